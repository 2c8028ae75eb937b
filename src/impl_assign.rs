// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Assignment from an `ImportSource`, with broadcasting and element
//! conversion.

use rawpointer::PointerExt;

use crate::dimension::{self, Dim, Strides, MAX_RANK};
use crate::error::{from_argument, Argument, InvalidArgument};
use crate::{CastFrom, Element, ImportSource, MultiArray, TypedArray};

/// Match the shape of `source` against `dim`.
///
/// Return, for every axis, whether the source is broadcast along it: a
/// source axis of length 1 is repeated over the whole destination axis,
/// any other length must be equal to the destination's.
fn broadcast_axes(dim: &Dim, source: &Dim) -> Result<[bool; MAX_RANK], InvalidArgument>
{
    if dim.ndim() != source.ndim() {
        return Err(from_argument(Argument::Source));
    }
    let mut broadcast = [false; MAX_RANK];
    for (axis, (&d, &s)) in dim.slice().iter().zip(source.slice()).enumerate() {
        if s == 1 {
            broadcast[axis] = true;
        } else if s != d {
            return Err(from_argument(Argument::Source));
        }
    }
    Ok(broadcast)
}

impl<A> TypedArray<A>
where A: Element
{
    /// Copy every element of `source` into the array, converting it to `A`.
    ///
    /// **Errors** with [`Argument::Source`] if the source has a different
    /// number of axes, or an axis whose length is neither 1 nor the length
    /// of the array along that axis; with [`Argument::Nd`] if a source
    /// stride in bytes overflows `isize`. Nothing is written on error.
    pub fn assign(&mut self, source: &ImportSource<'_>) -> Result<(), InvalidArgument>
    {
        let broadcast = broadcast_axes(&self.dim, &source.raw_dim())?;
        if self.is_empty() {
            return Ok(());
        }
        let src_strides = source
            .raw_strides()
            .zeroed_where(&broadcast[..self.ndim()])
            .scaled(source.kind().size_of() as isize)
            .ok_or_else(|| from_argument(Argument::Nd))?;
        let (dim, strides) = (self.dim, self.strides);
        let ptr = source.as_ptr();
        // The descriptor guarantees that every element it reaches is
        // readable, and it cannot alias `self.data` (borrowed mutably here).
        unsafe {
            with_kind!(source.kind(), S => copy_converted::<A, S>(&mut self.data, &dim, &strides, ptr, &src_strides))
        }
        Ok(())
    }
}

/// Visit `dim` in row-major order and write every source element, converted,
/// at the same index of `dst`.
///
/// `dst_strides` are in elements, `src_strides` in bytes; both offsets are
/// stepped from the same multi-index.
///
/// # Safety
///
/// `dim` must have no zero-length axis, and every element of `dim` under
/// `src_strides` from `src` must be readable as an `S`.
unsafe fn copy_converted<A, S>(
    dst: &mut [A], dim: &Dim, dst_strides: &Strides, src: *const u8, src_strides: &Strides,
) where
    A: Element + CastFrom<S>,
    S: Element,
{
    let mut index = match dim.first_index() {
        Some(ix) => ix,
        None => return,
    };
    let mut dst_offset = 0isize;
    let mut src_ptr = src;
    loop {
        dst[dst_offset as usize] = A::cast_from(S::read_unaligned(src_ptr));

        let mut axis = dim.ndim();
        loop {
            if axis == 0 {
                return;
            }
            axis -= 1;
            let ix = &mut index.slice_mut()[axis];
            *ix += 1;
            if *ix < dim[axis] {
                dst_offset += dst_strides[axis];
                src_ptr = src_ptr.stride_offset(src_strides[axis], 1);
                break;
            }
            // wrap this axis back to zero, carry into the next one
            *ix = 0;
            let last = dim[axis] - 1;
            dst_offset -= dimension::stride_offset(last, dst_strides[axis]);
            src_ptr = src_ptr.stride_offset(-src_strides[axis], last);
        }
    }
}

impl MultiArray
{
    /// Copy every element of `source` into the array, converting each one
    /// to the array's element kind.
    ///
    /// The source must have as many axes as the array. Along each axis its
    /// length is either the array's length, or 1 to repeat the same source
    /// elements over the whole axis (broadcasting). An array with a
    /// zero-length axis is left as is.
    ///
    /// Elements are converted as by [`CastFrom`]: numeric kinds convert
    /// like Rust's `as`, any non-zero value (and NaN) becomes `true`, and
    /// `true` becomes one.
    ///
    /// **Errors** with [`Argument::Source`] if the ranks differ or an axis
    /// length is neither 1 nor equal; the array is unchanged on error.
    ///
    /// ```
    /// use multi_array::{ElementKind, ImportSource, MultiArray, Scalar};
    ///
    /// let mut a = MultiArray::zeros((2, 3), ElementKind::I8).unwrap();
    ///
    /// // one value per row, broadcast along the columns
    /// let column = [-2.7f64, 1000.];
    /// a.assign(&ImportSource::contiguous(&column, (2, 1)).unwrap()).unwrap();
    /// assert_eq!(a.get((0, 2)), Ok(Scalar::I8(-2)));
    /// assert_eq!(a.get((1, 0)), Ok(Scalar::I8(127)));
    ///
    /// let wrong = [0u8; 4];
    /// assert!(a.assign(&ImportSource::contiguous(&wrong, (2, 2)).unwrap()).is_err());
    /// ```
    pub fn assign(&mut self, source: &ImportSource<'_>) -> Result<(), InvalidArgument>
    {
        dispatch!(self, a => a.assign(source))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::ElementKind;

    fn dim(ix: &[usize]) -> Dim
    {
        Dim::from_slice(ix).unwrap()
    }

    #[test]
    fn broadcast_flags()
    {
        let b = broadcast_axes(&dim(&[3, 4]), &dim(&[1, 4])).unwrap();
        assert_eq!(&b[..2], &[true, false]);
        let b = broadcast_axes(&dim(&[1, 1]), &dim(&[1, 1])).unwrap();
        assert_eq!(&b[..2], &[true, true]);
        let b = broadcast_axes(&dim(&[0, 5]), &dim(&[1, 5])).unwrap();
        assert_eq!(&b[..2], &[true, false]);
        fn err(d: &[usize], s: &[usize]) -> Result<[bool; MAX_RANK], Argument>
        {
            broadcast_axes(&dim(d), &dim(s)).map_err(|e| e.argument())
        }
        assert_eq!(err(&[3, 4], &[2, 4]), Err(Argument::Source));
        assert_eq!(err(&[3, 4], &[3, 4, 1]), Err(Argument::Source));
        assert_eq!(err(&[3, 1], &[3, 2]), Err(Argument::Source));
        assert_eq!(err(&[3, 0], &[3, 2]), Err(Argument::Source));
    }

    #[test]
    fn reversed_source()
    {
        let data = [1i32, 2, 3, 4, 5, 6];
        // the last row first, each row backwards
        let src = unsafe {
            ImportSource::from_raw_parts(ElementKind::I32, (2, 3), &[-3, -1], data.as_ptr().add(5) as *const u8)
                .unwrap()
        };
        let mut a = TypedArray::<u8>::zeros((2, 3)).unwrap();
        a.assign(&src).unwrap();
        assert_eq!(a.as_slice(), &[6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn eight_axes()
    {
        let shape = [2, 1, 2, 1, 2, 1, 2, 3];
        let data: Vec<u16> = (0..48).collect();
        let src = ImportSource::contiguous(&data, shape).unwrap();
        let mut a = TypedArray::<f32>::zeros(shape).unwrap();
        a.assign(&src).unwrap();
        assert!(a.as_slice().iter().enumerate().all(|(i, &x)| x == i as f32));
    }
}
