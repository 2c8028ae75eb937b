// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt::Debug;

use alloc::vec::Vec;

use super::{offset_checked, Dim, Strides};

/// Integers, tuples, slices or fixed size arrays that can be used to index
/// an array.
///
/// A bare `usize` only indexes one-dimensional arrays; every other form must
/// have exactly one component per axis.
///
/// ```
/// use multi_array::{ElementKind, MultiArray, Scalar};
///
/// let mut a = MultiArray::zeros((2, 2), ElementKind::I32).unwrap();
/// a.set([0, 1], 1).unwrap();
/// a.set((1, 1), 3).unwrap();
/// assert_eq!(a.get(&[0, 1][..]), Ok(Scalar::I32(1)));
/// assert_eq!(a.get(vec![1, 1]), Ok(Scalar::I32(3)));
/// assert!(a.get(1).is_err());
/// ```
pub trait NdIndex: Debug
{
    /// Return the offset of the indexed element, or `None` if the index has
    /// the wrong number of components or is out of bounds.
    #[doc(hidden)]
    fn index_checked(&self, dim: &Dim, strides: &Strides) -> Option<isize>;
}

impl NdIndex for usize
{
    #[inline]
    fn index_checked(&self, dim: &Dim, strides: &Strides) -> Option<isize>
    {
        if dim.ndim() != 1 {
            return None;
        }
        offset_checked(dim, strides, &[*self])
    }
}

impl NdIndex for Dim
{
    #[inline]
    fn index_checked(&self, dim: &Dim, strides: &Strides) -> Option<isize>
    {
        offset_checked(dim, strides, self.slice())
    }
}

impl<'a> NdIndex for &'a [usize]
{
    #[inline]
    fn index_checked(&self, dim: &Dim, strides: &Strides) -> Option<isize>
    {
        offset_checked(dim, strides, self)
    }
}

impl NdIndex for Vec<usize>
{
    #[inline]
    fn index_checked(&self, dim: &Dim, strides: &Strides) -> Option<isize>
    {
        offset_checked(dim, strides, self)
    }
}

impl<const N: usize> NdIndex for [usize; N]
{
    #[inline]
    fn index_checked(&self, dim: &Dim, strides: &Strides) -> Option<isize>
    {
        offset_checked(dim, strides, self)
    }
}

impl<'a, const N: usize> NdIndex for &'a [usize; N]
{
    #[inline]
    fn index_checked(&self, dim: &Dim, strides: &Strides) -> Option<isize>
    {
        offset_checked(dim, strides, *self)
    }
}

macro_rules! tuple_ndindex {
    ($($index:tt)*) => {
        impl NdIndex for ($(sub!($index usize),)*)
        {
            #[inline]
            fn index_checked(&self, dim: &Dim, strides: &Strides) -> Option<isize>
            {
                offset_checked(dim, strides, &[$(self.$index,)*])
            }
        }
    };
}

tuple_ndindex!(0);
tuple_ndindex!(0 1);
tuple_ndindex!(0 1 2);
tuple_ndindex!(0 1 2 3);
tuple_ndindex!(0 1 2 3 4);
tuple_ndindex!(0 1 2 3 4 5);
tuple_ndindex!(0 1 2 3 4 5 6);
tuple_ndindex!(0 1 2 3 4 5 6 7);
