// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "multi_array"]
#![doc(html_root_url = "https://docs.rs/multi-array/0.1/")]
#![allow(
    clippy::many_single_char_names,
    clippy::deref_addrof,
    clippy::unreadable_literal,
    clippy::len_without_is_empty
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `multi_array` crate provides [`MultiArray`], a dense n-dimensional
//! array whose element type and number of axes are chosen at runtime.
//!
//! - The element type is one of eleven scalar kinds ([`ElementKind`]):
//!   `bool`, signed and unsigned integers of 8 to 64 bits, `f32` and `f64`.
//! - An array has between 1 and [`MAX_RANK`] (8) axes. The shape is fixed at
//!   creation and the elements are stored contiguously in row-major order.
//! - Elements are read and written one at a time with bounds checked
//!   indexing ([`MultiArray::get`], [`MultiArray::set`]).
//! - [`MultiArray::view`] exports the buffer without copying, as a pointer,
//!   a shape and strides in bytes ([`ArrayView`], [`RawArrayView`]).
//! - [`MultiArray::assign`] copies from a foreign strided buffer of any
//!   element kind ([`ImportSource`]), converting every element and
//!   broadcasting source axes of length one.
//! - [`SharedArray`] is a reference counted handle, for callers that want
//!   several owners of one array.
//!
//! ```
//! use multi_array::{ElementKind, ImportSource, MultiArray, Scalar};
//!
//! let mut a = MultiArray::zeros((3, 4), ElementKind::F64).unwrap();
//!
//! // One row of i32, repeated over the three rows of `a`.
//! let row = [1i32, 2, 3, 4];
//! a.assign(&ImportSource::contiguous(&row, (1, 4)).unwrap()).unwrap();
//! assert_eq!(a.get((2, 3)), Ok(Scalar::F64(4.)));
//!
//! let view = a.view();
//! assert_eq!(view.byte_strides(), &[32, 8]);
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `std`: enabled by default; implements `std::error::Error` for
//!   [`InvalidArgument`]. Without it the crate is `no_std` and uses `alloc`.
//! - `serde`: `Serialize` and `Deserialize` for arrays, element kinds and
//!   scalars.

extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macro_utils;

pub mod dimension;
mod element;
mod error;
mod typed;

mod arrayformat;
#[cfg(feature = "serde")]
mod array_serde;
mod extension
{
    pub(crate) mod nonnull;
}
mod impl_assign;
mod impl_constructors;
mod impl_methods;
mod impl_views;
mod shared;
mod source;

pub use crate::dimension::{indices, Dim, Indices, IntoShape, NdIndex, Strides, MAX_RANK};
pub use crate::element::{CastFrom, Element, ElementKind, Scalar};
pub use crate::error::{Argument, InvalidArgument};
pub use crate::impl_views::{ArrayView, RawArrayView};
pub use crate::shared::{make, SharedArray};
pub use crate::source::ImportSource;
pub use crate::typed::TypedArray;

/// An n-dimensional array with a runtime element kind.
///
/// Each variant holds a [`TypedArray`] of the corresponding element type;
/// methods on `MultiArray` dispatch to it. The element kind, shape and
/// strides are fixed when the array is created.
///
/// ```
/// use multi_array::{ElementKind, MultiArray, Scalar};
///
/// let mut a = MultiArray::zeros((2, 2), ElementKind::F32).unwrap();
/// a.set((0, 0), 1.0f32).unwrap();
/// a.set((0, 1), 2.0f32).unwrap();
/// a.set((1, 0), 3.0f32).unwrap();
/// a.set((1, 1), 4.0f32).unwrap();
/// assert_eq!(a.get((1, 0)), Ok(Scalar::F32(3.)));
///
/// a.reset();
/// assert_eq!(a.get((1, 0)), Ok(Scalar::F32(0.)));
/// ```
#[derive(Clone, PartialEq)]
pub enum MultiArray
{
    Bool(TypedArray<bool>),
    I8(TypedArray<i8>),
    I16(TypedArray<i16>),
    I32(TypedArray<i32>),
    I64(TypedArray<i64>),
    U8(TypedArray<u8>),
    U16(TypedArray<u16>),
    U32(TypedArray<u32>),
    U64(TypedArray<u64>),
    F32(TypedArray<f32>),
    F64(TypedArray<f64>),
}
