// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::vec::Vec;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Dim, Element, MultiArray, TypedArray};

/// The version of the serialized form of an array.
pub const ARRAY_FORMAT_VERSION: u8 = 1u8;

/// Verifies that the version of the deserialized array matches the current
/// `ARRAY_FORMAT_VERSION`.
fn verify_version<E>(v: u8) -> Result<(), E>
where E: de::Error
{
    if v != ARRAY_FORMAT_VERSION {
        return Err(de::Error::custom(format_args!("unknown array version: {}", v)));
    }
    Ok(())
}

// The elements, tagged with their kind: `{"F32": [1.0, 2.0]}`.
#[derive(Serialize)]
enum ArrayDataRef<'a>
{
    Bool(&'a [bool]),
    I8(&'a [i8]),
    I16(&'a [i16]),
    I32(&'a [i32]),
    I64(&'a [i64]),
    U8(&'a [u8]),
    U16(&'a [u16]),
    U32(&'a [u32]),
    U64(&'a [u64]),
    F32(&'a [f32]),
    F64(&'a [f64]),
}

#[derive(Deserialize)]
enum ArrayData
{
    Bool(Vec<bool>),
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    U64(Vec<u64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

#[derive(Serialize)]
#[serde(rename = "MultiArray")]
struct ArrayRef<'a>
{
    v: u8,
    dim: &'a [usize],
    data: ArrayDataRef<'a>,
}

#[derive(Deserialize)]
#[serde(rename = "MultiArray")]
struct ArrayOwned
{
    v: u8,
    dim: Vec<usize>,
    data: ArrayData,
}

/// **Requires crate feature `"serde"`**
impl Serialize for MultiArray
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where Se: Serializer
    {
        let data = match self {
            MultiArray::Bool(a) => ArrayDataRef::Bool(a.as_slice()),
            MultiArray::I8(a) => ArrayDataRef::I8(a.as_slice()),
            MultiArray::I16(a) => ArrayDataRef::I16(a.as_slice()),
            MultiArray::I32(a) => ArrayDataRef::I32(a.as_slice()),
            MultiArray::I64(a) => ArrayDataRef::I64(a.as_slice()),
            MultiArray::U8(a) => ArrayDataRef::U8(a.as_slice()),
            MultiArray::U16(a) => ArrayDataRef::U16(a.as_slice()),
            MultiArray::U32(a) => ArrayDataRef::U32(a.as_slice()),
            MultiArray::U64(a) => ArrayDataRef::U64(a.as_slice()),
            MultiArray::F32(a) => ArrayDataRef::F32(a.as_slice()),
            MultiArray::F64(a) => ArrayDataRef::F64(a.as_slice()),
        };
        ArrayRef {
            v: ARRAY_FORMAT_VERSION,
            dim: self.shape(),
            data,
        }
        .serialize(serializer)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for MultiArray
{
    fn deserialize<D>(deserializer: D) -> Result<MultiArray, D::Error>
    where D: Deserializer<'de>
    {
        let repr = ArrayOwned::deserialize(deserializer)?;
        verify_version::<D::Error>(repr.v)?;
        let dim = Dim::from_slice(&repr.dim)
            .ok_or_else(|| <D::Error as de::Error>::custom(format_args!("array rank out of range: {}", repr.dim.len())))?;
        let array = match repr.data {
            ArrayData::Bool(v) => from_dim_vec(dim, v),
            ArrayData::I8(v) => from_dim_vec(dim, v),
            ArrayData::I16(v) => from_dim_vec(dim, v),
            ArrayData::I32(v) => from_dim_vec(dim, v),
            ArrayData::I64(v) => from_dim_vec(dim, v),
            ArrayData::U8(v) => from_dim_vec(dim, v),
            ArrayData::U16(v) => from_dim_vec(dim, v),
            ArrayData::U32(v) => from_dim_vec(dim, v),
            ArrayData::U64(v) => from_dim_vec(dim, v),
            ArrayData::F32(v) => from_dim_vec(dim, v),
            ArrayData::F64(v) => from_dim_vec(dim, v),
        };
        array.ok_or_else(|| de::Error::custom("data and dimension must match in size"))
    }
}

fn from_dim_vec<A>(dim: Dim, v: Vec<A>) -> Option<MultiArray>
where A: Element
{
    TypedArray::from_shape_vec(dim, v).ok().map(MultiArray::from)
}
