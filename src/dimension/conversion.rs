// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape argument conversion: integers, slices, vectors, arrays and tuples.

use alloc::vec::Vec;

use crate::error::{from_argument, Argument, InvalidArgument};
use crate::Dim;

/// Argument conversion into a shape.
///
/// A single `usize` is a one-dimensional shape; slices, vectors, fixed size
/// arrays and tuples of `usize` give one axis per component.
///
/// ```
/// use multi_array::IntoShape;
///
/// assert_eq!(10usize.into_shape().unwrap().slice(), &[10]);
/// assert_eq!((2usize, 3usize).into_shape().unwrap().slice(), &[2, 3]);
/// assert_eq!(vec![1usize, 2, 3, 4].into_shape().unwrap().slice(), &[1, 2, 3, 4]);
/// assert!([0usize; 9].into_shape().is_err());
/// ```
pub trait IntoShape
{
    /// Convert to a `Dim`, failing with [`Argument::Shape`] when the number
    /// of axes is not in `1..=MAX_RANK`.
    fn into_shape(self) -> Result<Dim, InvalidArgument>;
}

#[inline]
fn shape_from_slice(ix: &[usize]) -> Result<Dim, InvalidArgument>
{
    Dim::from_slice(ix).ok_or_else(|| from_argument(Argument::Shape))
}

impl IntoShape for Dim
{
    #[inline(always)]
    fn into_shape(self) -> Result<Dim, InvalidArgument>
    {
        Ok(self)
    }
}

impl IntoShape for usize
{
    #[inline]
    fn into_shape(self) -> Result<Dim, InvalidArgument>
    {
        shape_from_slice(&[self])
    }
}

impl<'a> IntoShape for &'a [usize]
{
    #[inline]
    fn into_shape(self) -> Result<Dim, InvalidArgument>
    {
        shape_from_slice(self)
    }
}

impl<'a> IntoShape for &'a Vec<usize>
{
    #[inline]
    fn into_shape(self) -> Result<Dim, InvalidArgument>
    {
        shape_from_slice(self)
    }
}

impl IntoShape for Vec<usize>
{
    #[inline]
    fn into_shape(self) -> Result<Dim, InvalidArgument>
    {
        shape_from_slice(&self)
    }
}

impl<const N: usize> IntoShape for [usize; N]
{
    #[inline]
    fn into_shape(self) -> Result<Dim, InvalidArgument>
    {
        shape_from_slice(&self)
    }
}

impl<'a, const N: usize> IntoShape for &'a [usize; N]
{
    #[inline]
    fn into_shape(self) -> Result<Dim, InvalidArgument>
    {
        shape_from_slice(self)
    }
}

macro_rules! tuple_into_shape {
    ($($index:tt)*) => {
        impl IntoShape for ($(sub!($index usize),)*)
        {
            #[inline]
            fn into_shape(self) -> Result<Dim, InvalidArgument>
            {
                shape_from_slice(&[$(self.$index,)*])
            }
        }
    };
}

tuple_into_shape!(0);
tuple_into_shape!(0 1);
tuple_into_shape!(0 1 2);
tuple_into_shape!(0 1 2 3);
tuple_into_shape!(0 1 2 3 4);
tuple_into_shape!(0 1 2 3 4 5);
tuple_into_shape!(0 1 2 3 4 5 6);
tuple_into_shape!(0 1 2 3 4 5 6 7);
