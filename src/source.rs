// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Descriptors of foreign buffers that an array can be assigned from.

use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::dimension::{self, Dim, IntoShape, Strides};
use crate::error::{from_argument, Argument, InvalidArgument};
use crate::extension::nonnull::{nonnull_from_ptr, nonnull_from_slice_data};
use crate::{ArrayView, Element, ElementKind};

/// A strided buffer of any element kind, to be copied into an array with
/// [`MultiArray::assign`](crate::MultiArray::assign).
///
/// The source has an element kind, a shape and strides counted in source
/// elements (not bytes). It borrows its buffer for `'a`.
///
/// ```
/// use multi_array::{ElementKind, ImportSource, MultiArray, Scalar};
///
/// // A 2 x 3 column-major buffer.
/// let data = [1u16, 4, 2, 5, 3, 6];
/// let src = ImportSource::from_slice(&data, (2, 3), &[1, 2]).unwrap();
///
/// let mut a = MultiArray::zeros((2, 3), ElementKind::I64).unwrap();
/// a.assign(&src).unwrap();
/// assert_eq!(a.get((0, 2)), Ok(Scalar::I64(3)));
/// assert_eq!(a.get((1, 0)), Ok(Scalar::I64(4)));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ImportSource<'a>
{
    kind: ElementKind,
    dim: Dim,
    strides: Strides,
    ptr: NonNull<u8>,
    life: PhantomData<&'a [u8]>,
}

fn source_shape<Sh>(shape: Sh) -> Result<Dim, InvalidArgument>
where Sh: IntoShape
{
    shape.into_shape().map_err(|_| from_argument(Argument::Nd))
}

fn source_strides(dim: &Dim, strides: &[isize]) -> Result<Strides, InvalidArgument>
{
    match Strides::from_slice(strides) {
        Some(s) if s.ndim() == dim.ndim() => Ok(s),
        _ => Err(from_argument(Argument::Nd)),
    }
}

impl<'a> ImportSource<'a>
{
    /// Describe the elements of `data` reached through `shape` and
    /// `strides` (in elements; negative strides are allowed).
    ///
    /// **Errors** with [`Argument::Nd`] if the rank is not in
    /// `1..=MAX_RANK`, `shape` and `strides` have different lengths, or any
    /// element reached lies outside `data`.
    pub fn from_slice<S, Sh>(data: &'a [S], shape: Sh, strides: &[isize]) -> Result<Self, InvalidArgument>
    where
        S: Element,
        Sh: IntoShape,
    {
        let dim = source_shape(shape)?;
        let strides = source_strides(&dim, strides)?;
        dimension::can_index_slice(data.len(), &dim, &strides)?;
        Ok(ImportSource {
            kind: S::KIND,
            dim,
            strides,
            ptr: nonnull_from_slice_data(data),
            life: PhantomData,
        })
    }

    /// Describe `data` as a row-major buffer of shape `shape`.
    ///
    /// **Errors** with [`Argument::Nd`] if the rank is not in
    /// `1..=MAX_RANK` or the length of `data` is not the number of elements
    /// of `shape`.
    pub fn contiguous<S, Sh>(data: &'a [S], shape: Sh) -> Result<Self, InvalidArgument>
    where
        S: Element,
        Sh: IntoShape,
    {
        let dim = source_shape(shape)?;
        if dim.size_checked() != Some(data.len()) {
            return Err(from_argument(Argument::Nd));
        }
        Ok(ImportSource {
            kind: S::KIND,
            strides: dim.default_strides(),
            dim,
            ptr: nonnull_from_slice_data(data),
            life: PhantomData,
        })
    }

    /// Describe a buffer given by a pointer to its first element, a shape and
    /// strides in elements of `kind`.
    ///
    /// **Errors** with [`Argument::Nd`] if `ptr` is null, the rank is not in
    /// `1..=MAX_RANK`, or `shape` and `strides` have different lengths.
    ///
    /// # Safety
    ///
    /// Every element reached through `shape` and `strides` must be valid
    /// for reads for `'a`, and must not be written during `'a`. In
    /// particular it must not overlap an array this source is assigned to.
    /// Elements need not be aligned.
    pub unsafe fn from_raw_parts<Sh>(
        kind: ElementKind, shape: Sh, strides: &[isize], ptr: *const u8,
    ) -> Result<Self, InvalidArgument>
    where Sh: IntoShape
    {
        let dim = source_shape(shape)?;
        let strides = source_strides(&dim, strides)?;
        let ptr = nonnull_from_ptr(ptr).ok_or_else(|| from_argument(Argument::Nd))?;
        Ok(ImportSource {
            kind,
            dim,
            strides,
            ptr,
            life: PhantomData,
        })
    }

    /// Like [`from_raw_parts`](ImportSource::from_raw_parts), with strides
    /// counted in bytes.
    ///
    /// **Errors** with [`Argument::Nd`] additionally if a stride is not a
    /// multiple of the element size.
    ///
    /// # Safety
    ///
    /// As for [`from_raw_parts`](ImportSource::from_raw_parts).
    pub unsafe fn from_byte_strides<Sh>(
        kind: ElementKind, shape: Sh, byte_strides: &[isize], ptr: *const u8,
    ) -> Result<Self, InvalidArgument>
    where Sh: IntoShape
    {
        let dim = source_shape(shape)?;
        let strides = source_strides(&dim, byte_strides)?
            .divided(kind.size_of() as isize)
            .ok_or_else(|| from_argument(Argument::Nd))?;
        Self::from_raw_parts(kind, dim, strides.slice(), ptr)
    }

    /// Return the element kind of the source.
    pub fn kind(&self) -> ElementKind
    {
        self.kind
    }

    /// Return the shape of the source.
    pub fn shape(&self) -> &[usize]
    {
        self.dim.slice()
    }

    pub(crate) fn raw_dim(&self) -> Dim
    {
        self.dim
    }

    /// Return the strides of the source, in elements.
    pub fn strides(&self) -> &[isize]
    {
        self.strides.slice()
    }

    pub(crate) fn raw_strides(&self) -> Strides
    {
        self.strides
    }

    pub fn ndim(&self) -> usize
    {
        self.dim.ndim()
    }

    /// Return a pointer to the first element of the source.
    pub fn as_ptr(&self) -> *const u8
    {
        self.ptr.as_ptr()
    }
}

/// Import from an exported view: the source reads the viewed array.
impl<'a> From<ArrayView<'a>> for ImportSource<'a>
{
    fn from(view: ArrayView<'a>) -> Self
    {
        let raw = view.into_raw_view();
        let size = raw.kind().size_of() as isize;
        // byte strides of a view are element strides times the element size
        let strides = raw
            .raw_byte_strides()
            .divided(size)
            .unwrap_or_else(|| raw.raw_dim().default_strides());
        ImportSource {
            kind: raw.kind(),
            dim: raw.raw_dim(),
            strides,
            ptr: raw.as_nonnull(),
            life: PhantomData,
        }
    }
}
