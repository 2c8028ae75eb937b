// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::{Element, MultiArray, TypedArray};

/// Write `data`, the row-major elements of an array of shape `shape`, as
/// nested brackets.
///
/// Sub-arrays are separated by a comma and one newline per remaining axis,
/// and indented to line up with the opening bracket of their parent.
fn format_array<A, F>(data: &[A], shape: &[usize], depth: usize, f: &mut fmt::Formatter<'_>, format: &mut F)
    -> fmt::Result
where F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result
{
    let (&len, rest) = match shape.split_first() {
        Some(split) => split,
        None => return Ok(()),
    };
    f.write_str("[")?;
    if rest.is_empty() {
        for (i, elt) in data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            format(elt, f)?;
        }
    } else {
        let chunk: usize = rest.iter().product();
        for i in 0..len {
            if i > 0 {
                f.write_str(",")?;
                for _ in 0..rest.len() {
                    f.write_str("\n")?;
                }
                for _ in 0..depth + 1 {
                    f.write_str(" ")?;
                }
            }
            format_array(&data[i * chunk..(i + 1) * chunk], rest, depth + 1, f, format)?;
        }
    }
    f.write_str("]")
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl<A> fmt::Display for TypedArray<A>
where A: Element
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_array(self.as_slice(), self.shape(), 0, f, &mut <A as fmt::Display>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style, followed by its shape, strides
/// and element kind.
impl<A> fmt::Debug for TypedArray<A>
where A: Element
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        // Add extra information for Debug
        format_array(self.as_slice(), self.shape(), 0, f, &mut <A as fmt::Debug>::fmt)?;
        write!(f, ", shape={:?}, strides={:?}, kind={}", self.shape(), self.strides(), A::KIND)
    }
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// ```
/// use multi_array::MultiArray;
///
/// let a = MultiArray::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(a.to_string(), "[[1, 2],\n [3, 4]]");
///
/// let b = MultiArray::from_shape_vec((2, 1, 2), vec![0.5, 1., 1.5, 2.]).unwrap();
/// assert_eq!(format!("{:.1}", b), "[[[0.5, 1.0]],\n\n [[1.5, 2.0]]]");
/// ```
impl fmt::Display for MultiArray
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        dispatch!(self, a => fmt::Display::fmt(a, f))
    }
}

impl fmt::Debug for MultiArray
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        dispatch!(self, a => fmt::Debug::fmt(a, f))
    }
}
