// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for arrays
//!

use alloc::vec;
use alloc::vec::Vec;

use crate::dimension::{self, Dim, IntoShape};
use crate::error::{from_argument, Argument, InvalidArgument};
use crate::{Element, ElementKind, MultiArray, TypedArray};

/// Constructor methods for typed arrays.
impl<A> TypedArray<A>
where A: Element
{
    /// Create an array of zeros with shape `shape`.
    ///
    /// **Errors** with [`Argument::Shape`] if the rank is not in
    /// `1..=MAX_RANK` or the array would be larger than `isize::MAX` bytes.
    ///
    /// ```
    /// use multi_array::TypedArray;
    ///
    /// let a = TypedArray::<f32>::zeros((2, 2, 2)).unwrap();
    /// assert!(a.as_slice().iter().all(|&x| x == 0.));
    /// assert_eq!(a.strides(), &[4, 2, 1]);
    /// ```
    pub fn zeros<Sh>(shape: Sh) -> Result<Self, InvalidArgument>
    where Sh: IntoShape
    {
        Self::zeros_dim(shape.into_shape()?)
    }

    pub(crate) fn zeros_dim(dim: Dim) -> Result<Self, InvalidArgument>
    {
        let size = dimension::size_of_shape_checked::<A>(&dim)?;
        Ok(Self::from_vec_dim_unchecked(dim, vec![A::default(); size]))
    }

    /// Create an array with shape `shape` from a vector of its elements in
    /// row-major order (no copying needed).
    ///
    /// **Errors** with [`Argument::Shape`] if the rank is not in
    /// `1..=MAX_RANK` or `shape` does not correspond to the number of
    /// elements in `v`.
    ///
    /// ```
    /// use multi_array::TypedArray;
    ///
    /// let a = TypedArray::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(a.get((1, 0)), Ok(4));
    /// assert!(TypedArray::from_shape_vec((2, 2), vec![1, 2, 3]).is_err());
    /// ```
    pub fn from_shape_vec<Sh>(shape: Sh, v: Vec<A>) -> Result<Self, InvalidArgument>
    where Sh: IntoShape
    {
        let dim = shape.into_shape()?;
        if dimension::size_of_shape_checked::<A>(&dim)? != v.len() {
            return Err(from_argument(Argument::Shape));
        }
        Ok(Self::from_vec_dim_unchecked(dim, v))
    }

    fn from_vec_dim_unchecked(dim: Dim, v: Vec<A>) -> Self
    {
        debug_assert_eq!(dim.size_checked(), Some(v.len()));
        TypedArray {
            data: v,
            strides: dim.default_strides(),
            dim,
        }
    }
}

/// Constructor methods for arrays with a runtime element kind.
impl MultiArray
{
    /// Create an array of zeros with shape `shape` and element kind `kind`.
    ///
    /// `shape` is a single `usize` for a one-dimensional array, or a tuple,
    /// array, slice or vector with one length per axis.
    ///
    /// **Errors** with [`Argument::Shape`] if the rank is not in
    /// `1..=MAX_RANK` or the array would be larger than `isize::MAX` bytes.
    ///
    /// ```
    /// use multi_array::{ElementKind, MultiArray, Scalar};
    ///
    /// let a = MultiArray::zeros([1, 2, 3, 4], ElementKind::U16).unwrap();
    /// assert_eq!(a.shape(), &[1, 2, 3, 4]);
    /// assert_eq!(a.kind(), ElementKind::U16);
    /// assert_eq!(a.get((0, 1, 2, 3)), Ok(Scalar::U16(0)));
    ///
    /// assert!(MultiArray::zeros(vec![1; 9], ElementKind::U16).is_err());
    /// ```
    pub fn zeros<Sh>(shape: Sh, kind: ElementKind) -> Result<MultiArray, InvalidArgument>
    where Sh: IntoShape
    {
        let dim = shape.into_shape()?;
        with_kind!(kind, T => TypedArray::<T>::zeros_dim(dim).map(MultiArray::from))
    }

    /// Create an array with shape `shape` from a vector of its elements in
    /// row-major order; the element kind is the one of `A`.
    ///
    /// **Errors** like [`TypedArray::from_shape_vec`].
    pub fn from_shape_vec<A, Sh>(shape: Sh, v: Vec<A>) -> Result<MultiArray, InvalidArgument>
    where
        A: Element,
        Sh: IntoShape,
    {
        TypedArray::from_shape_vec(shape, v).map(MultiArray::from)
    }
}

impl<A> From<TypedArray<A>> for MultiArray
where A: Element
{
    fn from(array: TypedArray<A>) -> MultiArray
    {
        A::into_array(array)
    }
}
