// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::iter::FusedIterator;

use super::{Dim, IntoShape};
use crate::error::InvalidArgument;

/// Create an iterator over the indices of an array of shape `shape`, in
/// row-major order.
///
/// ```
/// use multi_array::indices;
///
/// let ix: Vec<_> = indices((2, 2)).unwrap().map(|i| (i[0], i[1])).collect();
/// assert_eq!(ix, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
/// ```
pub fn indices<Sh>(shape: Sh) -> Result<Indices, InvalidArgument>
where Sh: IntoShape
{
    let dim = shape.into_shape()?;
    Ok(Indices {
        index: dim.first_index(),
        dim,
    })
}

/// An iterator over the indices of an array shape.
///
/// Iterator element type is `Dim`.
#[derive(Clone, Debug)]
pub struct Indices
{
    dim: Dim,
    index: Option<Dim>,
}

impl Iterator for Indices
{
    type Item = Dim;

    #[inline]
    fn next(&mut self) -> Option<Dim>
    {
        let index = self.index?;
        self.index = self.dim.next_for(index);
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let l = match self.index {
            None => 0,
            Some(ref ix) => {
                let gone = self
                    .dim
                    .default_strides()
                    .slice()
                    .iter()
                    .zip(ix.slice())
                    .fold(0, |s, (&a, &b)| s + a as usize * b);
                self.dim.size() - gone
            }
        };
        (l, Some(l))
    }
}

impl ExactSizeIterator for Indices {}

impl FusedIterator for Indices {}
