// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::rc::Rc;
use alloc::vec::Vec;
use std::cell::RefCell;
use std::fmt;

use crate::dimension::{IntoShape, NdIndex};
use crate::error::{from_argument, Argument, InvalidArgument};
use crate::{ElementKind, ImportSource, MultiArray, RawArrayView, Scalar};

/// Create a shared array of zeros with shape `shape` and element kind
/// `kind`.
///
/// **Errors** like [`MultiArray::zeros`].
///
/// ```
/// use multi_array::{make, ElementKind, Scalar};
///
/// let a = make((2, 2), ElementKind::F32).unwrap();
/// let b = a.clone();
/// b.set((1, 0), 3.0f32).unwrap();
/// assert_eq!(a.get((1, 0)), Ok(Scalar::F32(3.)));
/// assert_eq!(a.reference_count(), 2);
/// ```
pub fn make<Sh>(shape: Sh, kind: ElementKind) -> Result<SharedArray, InvalidArgument>
where Sh: IntoShape
{
    MultiArray::zeros(shape, kind).map(SharedArray::from)
}

/// A reference counted handle to a [`MultiArray`].
///
/// Clones of a handle refer to the same array; the array is dropped with the
/// last handle. A handle may also be *null*, referring to no array: every
/// operation on a null handle fails with [`Argument::SelfArg`].
///
/// The handle is not `Send`. The array is borrowed for the duration of each
/// call; calling back into the same array from inside
/// [`with_mut`](SharedArray::with_mut) panics.
#[derive(Clone, Default)]
pub struct SharedArray
{
    inner: Option<Rc<RefCell<MultiArray>>>,
}

impl SharedArray
{
    /// Create a null handle.
    pub fn null() -> Self
    {
        SharedArray { inner: None }
    }

    /// Return `true` if the handle refers to no array.
    pub fn is_null(&self) -> bool
    {
        self.inner.is_none()
    }

    /// Drop this handle's reference, leaving it null.
    ///
    /// The array is freed if this was the last handle to it.
    pub fn release(&mut self)
    {
        self.inner = None;
    }

    /// Return `true` if both handles refer to the same array.
    ///
    /// Two null handles are equal.
    pub fn ptr_eq(&self, other: &SharedArray) -> bool
    {
        match (&self.inner, &other.inner) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Return the number of handles to the array, or 0 for a null handle.
    pub fn reference_count(&self) -> usize
    {
        self.inner.as_ref().map_or(0, Rc::strong_count)
    }

    fn cell(&self) -> Result<&RefCell<MultiArray>, InvalidArgument>
    {
        self.inner
            .as_deref()
            .ok_or_else(|| from_argument(Argument::SelfArg))
    }

    /// Call `f` with a shared borrow of the array.
    pub fn with<F, R>(&self, f: F) -> Result<R, InvalidArgument>
    where F: FnOnce(&MultiArray) -> R
    {
        let array = self.cell()?.borrow();
        Ok(f(&*array))
    }

    /// Call `f` with a mutable borrow of the array.
    pub fn with_mut<F, R>(&self, f: F) -> Result<R, InvalidArgument>
    where F: FnOnce(&mut MultiArray) -> R
    {
        let mut array = self.cell()?.borrow_mut();
        Ok(f(&mut *array))
    }

    /// Return the element kind of the array.
    pub fn kind(&self) -> Result<ElementKind, InvalidArgument>
    {
        self.with(MultiArray::kind)
    }

    /// Return the shape of the array.
    pub fn shape(&self) -> Result<Vec<usize>, InvalidArgument>
    {
        self.with(|a| a.shape().to_vec())
    }

    /// Return the strides of the array, in elements.
    pub fn strides(&self) -> Result<Vec<isize>, InvalidArgument>
    {
        self.with(|a| a.strides().to_vec())
    }

    pub fn ndim(&self) -> Result<usize, InvalidArgument>
    {
        self.with(MultiArray::ndim)
    }

    /// Return the number of elements of the array.
    pub fn len(&self) -> Result<usize, InvalidArgument>
    {
        self.with(MultiArray::len)
    }

    /// See [`MultiArray::get`].
    pub fn get<I>(&self, index: I) -> Result<Scalar, InvalidArgument>
    where I: NdIndex
    {
        self.with(|a| a.get(index))?
    }

    /// See [`MultiArray::set`].
    pub fn set<I, V>(&self, index: I, value: V) -> Result<(), InvalidArgument>
    where
        I: NdIndex,
        V: Into<Scalar>,
    {
        self.with_mut(|a| a.set(index, value))?
    }

    /// See [`MultiArray::reset`].
    pub fn reset(&self) -> Result<(), InvalidArgument>
    {
        self.with_mut(MultiArray::reset)
    }

    /// See [`MultiArray::assign`].
    ///
    /// A source made from this array's own [`export_view`] breaks the
    /// safety contract of [`RawArrayView::deref_into_view`], since the
    /// array is written while the view is read.
    ///
    /// [`export_view`]: SharedArray::export_view
    pub fn assign(&self, source: &ImportSource<'_>) -> Result<(), InvalidArgument>
    {
        self.with_mut(|a| a.assign(source))?
    }

    /// Export a raw view of the array's buffer.
    ///
    /// The view stays valid while any handle keeps the array alive and the
    /// array is not modified; see [`RawArrayView`].
    pub fn export_view(&self) -> Result<RawArrayView, InvalidArgument>
    {
        self.with(MultiArray::raw_view)
    }
}

impl From<MultiArray> for SharedArray
{
    fn from(array: MultiArray) -> Self
    {
        SharedArray {
            inner: Some(Rc::new(RefCell::new(array))),
        }
    }
}

impl fmt::Debug for SharedArray
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match &self.inner {
            None => f.write_str("SharedArray(null)"),
            Some(cell) => match cell.try_borrow() {
                Ok(array) => f.debug_tuple("SharedArray").field(&*array).finish(),
                Err(_) => f.write_str("SharedArray(<borrowed>)"),
            },
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn null_handle()
    {
        let a = SharedArray::null();
        assert!(a.is_null());
        assert_eq!(a.reference_count(), 0);
        assert!(a.ptr_eq(&SharedArray::default()));
        assert_eq!(a.kind().map_err(|e| e.argument()), Err(Argument::SelfArg));
    }

    #[test]
    fn release_drops_one_reference()
    {
        let a = make(4, ElementKind::U32).unwrap();
        let mut b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(a.reference_count(), 2);
        b.release();
        assert!(b.is_null());
        assert!(!a.ptr_eq(&b));
        assert_eq!(a.reference_count(), 1);
        assert_eq!(a.len(), Ok(4));
    }
}
