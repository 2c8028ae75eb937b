// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::vec::Vec;

use crate::dimension::{Dim, Strides};
use crate::Element;

/// An n-dimensional array with a statically known element type.
///
/// The array owns a contiguous buffer of `shape.iter().product()` elements
/// laid out in row-major order. Shape, strides and buffer length are fixed
/// at construction.
///
/// Create one with [`TypedArray::zeros`] or [`TypedArray::from_shape_vec`];
/// wrap it in a [`MultiArray`](crate::MultiArray) to erase the element type.
#[derive(Clone, PartialEq)]
pub struct TypedArray<A>
{
    pub(crate) data: Vec<A>,
    pub(crate) dim: Dim,
    pub(crate) strides: Strides,
}

impl<A> TypedArray<A>
where A: Element
{
    /// Return the shape of the array as a slice.
    pub fn shape(&self) -> &[usize]
    {
        self.dim.slice()
    }

    /// Return the shape of the array as a `Dim`.
    pub fn raw_dim(&self) -> Dim
    {
        self.dim
    }

    /// Return the strides of the array, in elements.
    pub fn strides(&self) -> &[isize]
    {
        self.strides.slice()
    }

    /// Return the number of dimensions (axes) in the array
    pub fn ndim(&self) -> usize
    {
        self.dim.ndim()
    }

    /// Return the total number of elements in the array.
    pub fn len(&self) -> usize
    {
        self.data.len()
    }

    /// Return whether the array has any elements
    pub fn is_empty(&self) -> bool
    {
        self.data.is_empty()
    }

    /// Return a pointer to the first element in the array.
    pub fn as_ptr(&self) -> *const A
    {
        self.data.as_ptr()
    }

    /// Return the array's data as a slice, in row-major order.
    pub fn as_slice(&self) -> &[A]
    {
        &self.data
    }

    /// Return the elements as a vector, in row-major order.
    pub fn into_vec(self) -> Vec<A>
    {
        self.data
    }
}
