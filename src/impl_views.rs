// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exported views of an array's buffer.

use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;
use std::slice;

use crate::dimension::{self, Dim, NdIndex, Strides};
use crate::error::{from_argument, Argument, InvalidArgument};
use crate::extension::nonnull::nonnull_from_slice_data;
use crate::{Element, ElementKind, MultiArray, Scalar, TypedArray};

/// A raw description of an array's buffer: element kind, shape, strides in
/// bytes and a pointer to the first element.
///
/// A `RawArrayView` does not borrow the array it was taken from. The pointer
/// is only valid to read while that array is alive and its elements are not
/// written through any other path; [`deref_into_view`] turns it back into a
/// borrowing [`ArrayView`] under that obligation.
///
/// [`deref_into_view`]: RawArrayView::deref_into_view
#[derive(Copy, Clone, Debug)]
pub struct RawArrayView
{
    kind: ElementKind,
    dim: Dim,
    byte_strides: Strides,
    ptr: NonNull<u8>,
}

/// A read-only view of an array's buffer, borrowed for `'a`.
///
/// The view shares memory with the array: no element is copied. Its byte
/// strides are the array's strides multiplied by the element size.
///
/// ```
/// use multi_array::{ElementKind, MultiArray};
///
/// let a = MultiArray::zeros((2, 3), ElementKind::F32).unwrap();
/// let v = a.view();
/// assert_eq!(v.kind(), ElementKind::F32);
/// assert_eq!(v.shape(), &[2, 3]);
/// assert_eq!(v.byte_strides(), &[12, 4]);
/// assert_eq!(v.as_slice::<f32>(), Some(&[0.; 6][..]));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ArrayView<'a>
{
    raw: RawArrayView,
    life: PhantomData<&'a [u8]>,
}

impl RawArrayView
{
    /// Return the element kind.
    pub fn kind(&self) -> ElementKind
    {
        self.kind
    }

    /// Return the shape as a slice.
    pub fn shape(&self) -> &[usize]
    {
        self.dim.slice()
    }

    /// Return the shape as a `Dim`.
    pub fn raw_dim(&self) -> Dim
    {
        self.dim
    }

    /// Return the strides, in bytes.
    pub fn byte_strides(&self) -> &[isize]
    {
        self.byte_strides.slice()
    }

    pub(crate) fn raw_byte_strides(&self) -> Strides
    {
        self.byte_strides
    }

    pub fn ndim(&self) -> usize
    {
        self.dim.ndim()
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize
    {
        self.dim.size()
    }

    /// Return a pointer to the first element.
    pub fn as_ptr(&self) -> *const u8
    {
        self.ptr.as_ptr()
    }

    pub(crate) fn as_nonnull(&self) -> NonNull<u8>
    {
        self.ptr
    }

    /// Convert into a borrowing view.
    ///
    /// # Safety
    ///
    /// The array this view was taken from must stay alive for `'a`, and none
    /// of its elements may be written during `'a`.
    pub unsafe fn deref_into_view<'a>(self) -> ArrayView<'a>
    {
        ArrayView {
            raw: self,
            life: PhantomData,
        }
    }
}

impl<'a> ArrayView<'a>
{
    /// Return the element kind.
    pub fn kind(&self) -> ElementKind
    {
        self.raw.kind
    }

    /// Return the shape as a slice.
    pub fn shape(&self) -> &[usize]
    {
        self.raw.shape()
    }

    /// Return the shape as a `Dim`.
    pub fn raw_dim(&self) -> Dim
    {
        self.raw.dim
    }

    /// Return the strides, in bytes.
    pub fn byte_strides(&self) -> &[isize]
    {
        self.raw.byte_strides()
    }

    pub fn ndim(&self) -> usize
    {
        self.raw.ndim()
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize
    {
        self.raw.len()
    }

    /// Return whether the view has any elements
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Return a pointer to the first element.
    pub fn as_ptr(&self) -> *const u8
    {
        self.raw.as_ptr()
    }

    /// Return the elements as a slice in row-major order, if the element
    /// type is `A`. Return `None` otherwise.
    ///
    /// The slice borrows the array for `'a`, like the view.
    pub fn as_slice<A>(&self) -> Option<&'a [A]>
    where A: Element
    {
        if self.kind() != A::KIND {
            return None;
        }
        // views are only taken of whole arrays, which are contiguous
        unsafe { Some(slice::from_raw_parts(self.raw.ptr.cast::<A>().as_ptr(), self.len())) }
    }

    /// Return the element at `index`.
    ///
    /// **Errors** with [`Argument::Index`] like
    /// [`MultiArray::get`](crate::MultiArray::get).
    pub fn get<I>(&self, index: I) -> Result<Scalar, InvalidArgument>
    where I: NdIndex
    {
        let offset = index
            .index_checked(&self.raw.dim, &self.raw.byte_strides)
            .ok_or_else(|| from_argument(Argument::Index))?;
        // the offset is in bounds, so it stays inside the borrowed buffer
        unsafe {
            let ptr = self.raw.ptr.as_ptr().offset(offset);
            Ok(with_kind!(self.kind(), T => T::read_unaligned(ptr).into_scalar()))
        }
    }

    /// Convert into a raw view, dropping the borrow.
    pub fn into_raw_view(self) -> RawArrayView
    {
        self.raw
    }
}

impl<A> TypedArray<A>
where A: Element
{
    /// Return a read-only view of the array.
    pub fn view(&self) -> ArrayView<'_>
    {
        unsafe { self.raw_view().deref_into_view() }
    }

    /// Return a raw view of the array.
    pub fn raw_view(&self) -> RawArrayView
    {
        // The buffer is at most isize::MAX bytes, so neither a stride nor
        // its product with the element size can overflow.
        let size = mem::size_of::<A>() as isize;
        let mut byte_strides = self.strides;
        for bs in byte_strides.slice_mut() {
            *bs = dimension::stride_offset(*bs as usize, size);
        }
        RawArrayView {
            kind: A::KIND,
            dim: self.dim,
            byte_strides,
            ptr: nonnull_from_slice_data(&self.data),
        }
    }
}

impl MultiArray
{
    /// Return a read-only view of the array.
    ///
    /// The view carries the element kind, the shape, the strides in bytes
    /// and a pointer to the first element; no element is copied.
    pub fn view(&self) -> ArrayView<'_>
    {
        dispatch!(self, a => a.view())
    }

    /// Return a raw view of the array; see [`RawArrayView`] for when its
    /// pointer may be read.
    pub fn raw_view(&self) -> RawArrayView
    {
        dispatch!(self, a => a.raw_view())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn byte_strides()
    {
        let a = MultiArray::zeros((2, 3, 4), ElementKind::I16).unwrap();
        assert_eq!(a.view().byte_strides(), &[24, 8, 2]);
        let b = MultiArray::zeros(5, ElementKind::Bool).unwrap();
        assert_eq!(b.raw_view().byte_strides(), &[1]);
    }

    #[test]
    fn view_shares_buffer()
    {
        let a = TypedArray::from_shape_vec((2, 2), vec![1u64, 2, 3, 4]).unwrap();
        let v = a.view();
        assert_eq!(v.as_ptr(), a.as_ptr() as *const u8);
        assert_eq!(v.get((1, 0)), Ok(Scalar::U64(3)));
        assert_eq!(v.as_slice::<i64>(), None);
    }
}
