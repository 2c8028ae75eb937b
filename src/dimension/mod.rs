// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shapes, strides and the offset arithmetic shared by indexing, views and
//! import.

use std::fmt;
use std::mem;
use std::ops::Index;

use crate::error::{from_argument, Argument, InvalidArgument};

pub use self::conversion::IntoShape;
pub use self::indices::{indices, Indices};
pub use self::ndindex::NdIndex;

mod conversion;
mod indices;
mod ndindex;

/// The largest supported number of axes.
pub const MAX_RANK: usize = 8;

/// An array shape: between 1 and [`MAX_RANK`] axis lengths, stored inline.
///
/// A `Dim` is also used as an index tuple during iteration.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Dim
{
    ndim: usize,
    ix: [usize; MAX_RANK],
}

/// Per-axis steps, in elements or in bytes depending on the context.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Strides
{
    ndim: usize,
    s: [isize; MAX_RANK],
}

impl Dim
{
    /// Create a shape from axis lengths, or `None` if the rank is not in
    /// `1..=MAX_RANK`.
    pub fn from_slice(ix: &[usize]) -> Option<Dim>
    {
        if ix.is_empty() || ix.len() > MAX_RANK {
            return None;
        }
        let mut dim = Dim {
            ndim: ix.len(),
            ix: [0; MAX_RANK],
        };
        dim.ix[..ix.len()].copy_from_slice(ix);
        Some(dim)
    }

    /// Number of axes.
    #[inline]
    pub fn ndim(&self) -> usize
    {
        self.ndim
    }

    /// The axis lengths.
    #[inline]
    pub fn slice(&self) -> &[usize]
    {
        &self.ix[..self.ndim]
    }

    #[inline]
    pub(crate) fn slice_mut(&mut self) -> &mut [usize]
    {
        &mut self.ix[..self.ndim]
    }

    /// Compute the size of the dimension (number of elements)
    pub fn size(&self) -> usize
    {
        self.slice().iter().product()
    }

    /// Compute the size while checking for overflow.
    pub fn size_checked(&self) -> Option<usize>
    {
        self.slice()
            .iter()
            .try_fold(1usize, |s, &a| s.checked_mul(a))
    }

    /// Row-major ("C" order) strides for this shape, in elements.
    ///
    /// Shape (a, b, c) gives strides (b * c, c, 1).
    pub fn default_strides(&self) -> Strides
    {
        let mut strides = Strides {
            ndim: self.ndim,
            s: [0; MAX_RANK],
        };
        let mut cum_prod = 1isize;
        for (rs, &dim) in strides.s[..self.ndim].iter_mut().zip(self.slice()).rev() {
            *rs = cum_prod;
            cum_prod = cum_prod.wrapping_mul(dim as isize);
        }
        strides
    }

    /// The index of the first element in row-major order, or `None` if the
    /// shape has no elements.
    pub fn first_index(&self) -> Option<Dim>
    {
        if self.slice().contains(&0) {
            return None;
        }
        Some(Dim {
            ndim: self.ndim,
            ix: [0; MAX_RANK],
        })
    }

    /// Iteration -- Use self as size, and return next index after `index`
    /// or None if there are no more.
    pub fn next_for(&self, mut index: Dim) -> Option<Dim>
    {
        for (&dim, ix) in self.slice().iter().zip(index.slice_mut()).rev() {
            *ix += 1;
            if *ix == dim {
                *ix = 0;
            } else {
                return Some(index);
            }
        }
        None
    }
}

impl Index<usize> for Dim
{
    type Output = usize;
    #[inline]
    fn index(&self, axis: usize) -> &usize
    {
        &self.slice()[axis]
    }
}

impl fmt::Debug for Dim
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Debug::fmt(self.slice(), f)
    }
}

impl Strides
{
    /// Create strides from per-axis steps, or `None` if the rank is not in
    /// `1..=MAX_RANK`.
    pub fn from_slice(s: &[isize]) -> Option<Strides>
    {
        if s.is_empty() || s.len() > MAX_RANK {
            return None;
        }
        let mut strides = Strides {
            ndim: s.len(),
            s: [0; MAX_RANK],
        };
        strides.s[..s.len()].copy_from_slice(s);
        Some(strides)
    }

    #[inline]
    pub fn ndim(&self) -> usize
    {
        self.ndim
    }

    #[inline]
    pub fn slice(&self) -> &[isize]
    {
        &self.s[..self.ndim]
    }

    #[inline]
    pub(crate) fn slice_mut(&mut self) -> &mut [isize]
    {
        &mut self.s[..self.ndim]
    }

    /// Multiply every stride by `factor`, e.g. to go from elements to bytes.
    pub(crate) fn scaled(&self, factor: isize) -> Option<Strides>
    {
        let mut out = *self;
        for s in &mut out.s[..self.ndim] {
            *s = s.checked_mul(factor)?;
        }
        Some(out)
    }

    /// Divide every stride by `divisor`, or `None` if any stride is not a
    /// multiple of it.
    pub(crate) fn divided(&self, divisor: isize) -> Option<Strides>
    {
        let mut out = *self;
        for s in &mut out.s[..self.ndim] {
            if divisor == 0 || *s % divisor != 0 {
                return None;
            }
            *s /= divisor;
        }
        Some(out)
    }

    /// Replace the stride of every axis in `axes` by zero.
    pub(crate) fn zeroed_where(&self, axes: &[bool]) -> Strides
    {
        let mut out = *self;
        for (s, &zero) in out.s[..self.ndim].iter_mut().zip(axes) {
            if zero {
                *s = 0;
            }
        }
        out
    }
}

impl Index<usize> for Strides
{
    type Output = isize;
    #[inline]
    fn index(&self, axis: usize) -> &isize
    {
        &self.slice()[axis]
    }
}

impl fmt::Debug for Strides
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Debug::fmt(self.slice(), f)
    }
}

/// Calculate offset from `Ix` stride converting sign properly
#[inline(always)]
pub fn stride_offset(n: usize, stride: isize) -> isize
{
    (n as isize) * stride
}

/// Return the offset of `index` in an array of shape `dim` and `strides`.
///
/// Return `None` if `index` has the wrong number of components, or if any
/// component is out of bounds. Axes are checked in order and the first
/// violation ends the check.
pub fn offset_checked(dim: &Dim, strides: &Strides, index: &[usize]) -> Option<isize>
{
    if index.len() != dim.ndim() {
        return None;
    }
    let mut offset = 0;
    for ((&d, &s), &i) in dim.slice().iter().zip(strides.slice()).zip(index) {
        if i >= d {
            return None;
        }
        offset += stride_offset(i, s);
    }
    Some(offset)
}

/// Return the number of elements of `dim`, checking that both the element
/// count and the size in bytes of an `A` buffer fit in `isize`.
pub(crate) fn size_of_shape_checked<A>(dim: &Dim) -> Result<usize, InvalidArgument>
{
    let size = dim
        .size_checked()
        .filter(|&s| s <= isize::MAX as usize)
        .ok_or_else(|| from_argument(Argument::Shape))?;
    size.checked_mul(mem::size_of::<A>())
        .filter(|&b| b <= isize::MAX as usize)
        .ok_or_else(|| from_argument(Argument::Shape))?;
    Ok(size)
}

/// Check that every element reachable through `dim` and `strides` lies
/// within a buffer of `len` elements starting at offset 0.
///
/// Negative strides are allowed as long as no reachable offset is negative.
/// A shape with a zero-length axis reaches no element and is always valid.
pub(crate) fn can_index_slice(len: usize, dim: &Dim, strides: &Strides) -> Result<(), InvalidArgument>
{
    if dim.ndim() != strides.ndim() {
        return Err(from_argument(Argument::Nd));
    }
    if dim.first_index().is_none() {
        return Ok(());
    }
    let mut low = 0isize;
    let mut high = 0isize;
    for (&d, &s) in dim.slice().iter().zip(strides.slice()) {
        if d > isize::MAX as usize {
            return Err(from_argument(Argument::Nd));
        }
        let reach = ((d - 1) as isize)
            .checked_mul(s)
            .ok_or_else(|| from_argument(Argument::Nd))?;
        if reach < 0 {
            low = low.checked_add(reach).ok_or_else(|| from_argument(Argument::Nd))?;
        } else {
            high = high.checked_add(reach).ok_or_else(|| from_argument(Argument::Nd))?;
        }
    }
    if low < 0 || high as usize >= len {
        return Err(from_argument(Argument::Nd));
    }
    Ok(())
}
