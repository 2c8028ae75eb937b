// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element kinds, the `Element` trait and element conversions.

use std::fmt;
use std::mem;

use num_traits::{AsPrimitive, Zero};

use crate::error::{from_argument, Argument, InvalidArgument};
use crate::{MultiArray, TypedArray};

/// The scalar type of the elements of an array, selected at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind
{
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl ElementKind
{
    /// All element kinds, in declaration order.
    pub const ALL: [ElementKind; 11] = [
        ElementKind::Bool,
        ElementKind::I8,
        ElementKind::I16,
        ElementKind::I32,
        ElementKind::I64,
        ElementKind::U8,
        ElementKind::U16,
        ElementKind::U32,
        ElementKind::U64,
        ElementKind::F32,
        ElementKind::F64,
    ];

    /// Look up an element kind by its numeric selector (its position in
    /// [`ElementKind::ALL`]).
    ///
    /// **Errors** with [`Argument::Dtype`] if `code` does not name a kind.
    pub fn from_code(code: u8) -> Result<Self, InvalidArgument>
    {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| from_argument(Argument::Dtype))
    }

    /// The numeric selector of this kind; the inverse of
    /// [`from_code`](ElementKind::from_code).
    pub fn code(self) -> u8
    {
        self as u8
    }

    /// The kind of the element type `A`.
    pub fn of<A: Element>() -> Self
    {
        A::KIND
    }

    /// Size of one element in bytes.
    pub fn size_of(self) -> usize
    {
        with_kind!(self, T => mem::size_of::<T>())
    }

    /// The zero value of this kind.
    pub fn zero(self) -> Scalar
    {
        with_kind!(self, T => T::default().into_scalar())
    }

    /// Lower case name, e.g. `"int32"` or `"float64"`.
    pub fn name(self) -> &'static str
    {
        match self {
            ElementKind::Bool => "bool",
            ElementKind::I8 => "int8",
            ElementKind::I16 => "int16",
            ElementKind::I32 => "int32",
            ElementKind::I64 => "int64",
            ElementKind::U8 => "uint8",
            ElementKind::U16 => "uint16",
            ElementKind::U32 => "uint32",
            ElementKind::U64 => "uint64",
            ElementKind::F32 => "float32",
            ElementKind::F64 => "float64",
        }
    }
}

impl fmt::Display for ElementKind
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

/// Conversion of one element value into another element type.
///
/// Implemented for every pair of element types:
///
/// - between integer and floating point types it is an `as` cast: integers
///   wrap, floats truncate toward zero and saturate (NaN becomes `0`);
/// - to `bool`, any value other than zero is `true` (NaN is `true`);
/// - from `bool`, `true` is one and `false` is zero.
pub trait CastFrom<S>: Sized
{
    fn cast_from(value: S) -> Self;
}

/// The element types an array can hold.
///
/// This trait is sealed; it is implemented for `bool`, `i8`, `i16`, `i32`,
/// `i64`, `u8`, `u16`, `u32`, `u64`, `f32` and `f64`. `Default::default()`
/// is the zero of each type.
pub trait Element:
    Copy
    + Default
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
    + CastFrom<bool>
    + CastFrom<i8>
    + CastFrom<i16>
    + CastFrom<i32>
    + CastFrom<i64>
    + CastFrom<u8>
    + CastFrom<u16>
    + CastFrom<u32>
    + CastFrom<u64>
    + CastFrom<f32>
    + CastFrom<f64>
{
    /// The runtime tag of this type.
    const KIND: ElementKind;

    /// Wrap the value in a `Scalar`.
    fn into_scalar(self) -> Scalar;

    /// Read one element from possibly unaligned memory.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `size_of::<Self>()` bytes.
    #[doc(hidden)]
    #[inline(always)]
    unsafe fn read_unaligned(ptr: *const u8) -> Self
    {
        ptr.cast::<Self>().read_unaligned()
    }

    #[doc(hidden)]
    fn into_array(array: TypedArray<Self>) -> MultiArray;

    #[doc(hidden)]
    fn array_ref(array: &MultiArray) -> Option<&TypedArray<Self>>;

    #[doc(hidden)]
    fn array_mut(array: &mut MultiArray) -> Option<&mut TypedArray<Self>>;

    sealed_decl! {}
}

/// A single element value of any kind.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scalar
{
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
}

macro_rules! scalar_match {
    ($scalar:expr, $v:ident => $body:expr) => {
        match $scalar {
            Scalar::Bool($v) => $body,
            Scalar::I8($v) => $body,
            Scalar::I16($v) => $body,
            Scalar::I32($v) => $body,
            Scalar::I64($v) => $body,
            Scalar::U8($v) => $body,
            Scalar::U16($v) => $body,
            Scalar::U32($v) => $body,
            Scalar::U64($v) => $body,
            Scalar::F32($v) => $body,
            Scalar::F64($v) => $body,
        }
    };
}

impl Scalar
{
    /// The kind of the value.
    pub fn kind(self) -> ElementKind
    {
        scalar_match!(self, v => element_kind_of(v))
    }

    /// Convert the value to `A` with the rules of [`CastFrom`].
    ///
    /// ```
    /// use multi_array::Scalar;
    ///
    /// assert_eq!(Scalar::F64(-3.75).cast::<i8>(), -3);
    /// assert_eq!(Scalar::F64(1000.).cast::<i8>(), i8::MAX);
    /// assert_eq!(Scalar::I32(0).cast::<bool>(), false);
    /// ```
    pub fn cast<A: Element>(self) -> A
    {
        scalar_match!(self, v => A::cast_from(v))
    }

    /// Convert the value to another kind.
    pub fn to_kind(self, kind: ElementKind) -> Scalar
    {
        with_kind!(kind, T => self.cast::<T>().into_scalar())
    }
}

#[inline(always)]
fn element_kind_of<A: Element>(_: A) -> ElementKind
{
    A::KIND
}

impl fmt::Display for Scalar
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        scalar_match!(self, v => fmt::Display::fmt(v, f))
    }
}

macro_rules! impl_element {
    ($($t:ty => $variant:ident;)*) => {
        $(
        impl Element for $t
        {
            const KIND: ElementKind = ElementKind::$variant;

            #[inline(always)]
            fn into_scalar(self) -> Scalar
            {
                Scalar::$variant(self)
            }

            fn into_array(array: TypedArray<Self>) -> MultiArray
            {
                MultiArray::$variant(array)
            }

            fn array_ref(array: &MultiArray) -> Option<&TypedArray<Self>>
            {
                match array {
                    MultiArray::$variant(a) => Some(a),
                    _ => None,
                }
            }

            fn array_mut(array: &mut MultiArray) -> Option<&mut TypedArray<Self>>
            {
                match array {
                    MultiArray::$variant(a) => Some(a),
                    _ => None,
                }
            }

            sealed_impl! {}
        }

        impl From<$t> for Scalar
        {
            #[inline(always)]
            fn from(value: $t) -> Scalar
            {
                Scalar::$variant(value)
            }
        }
        )*
    };
}

impl_element! {
    i8 => I8;
    i16 => I16;
    i32 => I32;
    i64 => I64;
    u8 => U8;
    u16 => U16;
    u32 => U32;
    u64 => U64;
    f32 => F32;
    f64 => F64;
}

impl Element for bool
{
    const KIND: ElementKind = ElementKind::Bool;

    #[inline(always)]
    fn into_scalar(self) -> Scalar
    {
        Scalar::Bool(self)
    }

    // Foreign buffers may hold bytes other than 0 and 1.
    #[inline(always)]
    unsafe fn read_unaligned(ptr: *const u8) -> Self
    {
        ptr.read() != 0
    }

    fn into_array(array: TypedArray<Self>) -> MultiArray
    {
        MultiArray::Bool(array)
    }

    fn array_ref(array: &MultiArray) -> Option<&TypedArray<Self>>
    {
        match array {
            MultiArray::Bool(a) => Some(a),
            _ => None,
        }
    }

    fn array_mut(array: &mut MultiArray) -> Option<&mut TypedArray<Self>>
    {
        match array {
            MultiArray::Bool(a) => Some(a),
            _ => None,
        }
    }

    sealed_impl! {}
}

impl From<bool> for Scalar
{
    #[inline(always)]
    fn from(value: bool) -> Scalar
    {
        Scalar::Bool(value)
    }
}

macro_rules! cast_numeric {
    ($dst:ty; $($src:ty),*) => {
        $(
        impl CastFrom<$src> for $dst
        {
            #[inline(always)]
            fn cast_from(value: $src) -> $dst
            {
                value.as_()
            }
        }
        )*
    };
}

macro_rules! cast_numeric_all {
    ($($dst:ty),*) => {
        $(
        cast_numeric!($dst; i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
        )*
    };
}

cast_numeric_all!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

macro_rules! cast_bool {
    ($($t:ty),*) => {
        $(
        impl CastFrom<bool> for $t
        {
            #[inline(always)]
            fn cast_from(value: bool) -> $t
            {
                (value as u8).as_()
            }
        }

        impl CastFrom<$t> for bool
        {
            #[inline(always)]
            fn cast_from(value: $t) -> bool
            {
                !value.is_zero()
            }
        }
        )*
    };
}

cast_bool!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl CastFrom<bool> for bool
{
    #[inline(always)]
    fn cast_from(value: bool) -> bool
    {
        value
    }
}
