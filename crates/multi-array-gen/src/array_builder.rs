// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use multi_array::Dim;
use multi_array::Element;
use multi_array::ElementKind;
use multi_array::IntoShape;
use multi_array::MultiArray;
use multi_array::TypedArray;

use num_traits::Num;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArrayBuilder
{
    dim: Dim,
    kind: ElementKind,
    generator: ElementGenerator,
}

/// How to generate elements
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementGenerator
{
    /// 0, 1, 2, ... in row-major order
    Sequential,
    Zero,
}

impl Default for ArrayBuilder
{
    fn default() -> Self
    {
        Self::new(1)
    }
}

impl ArrayBuilder
{
    /// **Panics** if `shape` is not a valid array shape.
    pub fn new(shape: impl IntoShape) -> Self
    {
        ArrayBuilder {
            dim: shape.into_shape().unwrap(),
            kind: ElementKind::F64,
            generator: ElementGenerator::Sequential,
        }
    }

    /// Element kind of the arrays made by [`build_kind`](ArrayBuilder::build_kind).
    pub fn kind(mut self, kind: ElementKind) -> Self
    {
        self.kind = kind;
        self
    }

    pub fn generator(mut self, generator: ElementGenerator) -> Self
    {
        self.generator = generator;
        self
    }

    pub fn build<T>(self) -> TypedArray<T>
    where T: Element + Num
    {
        let mut current = T::zero();
        let size = self.dim.size();
        let use_zeros = self.generator == ElementGenerator::Zero;
        let v = (0..size)
            .map(|_| {
                let ret = current;
                if !use_zeros {
                    current = ret + T::one();
                }
                ret
            })
            .collect();
        TypedArray::from_shape_vec(self.dim, v).unwrap()
    }

    /// Build an array of the configured kind; sequential elements are
    /// converted from `u64` (so a `Bool` array is `false` then all `true`).
    pub fn build_kind(self) -> MultiArray
    {
        let kind = self.kind;
        MultiArray::from(self.build::<u64>()).cast(kind).unwrap()
    }
}

#[test]
fn test_sequential()
{
    let (m, n) = (12, 13);
    let a = ArrayBuilder::new((m, n)).build::<i32>();
    assert_eq!(a.shape(), &[m, n]);
    assert_eq!(a.strides(), &[n as isize, 1]);
    assert_eq!(a.get((1, 0)), Ok(n as i32));

    let z = ArrayBuilder::new((m, n))
        .generator(ElementGenerator::Zero)
        .build::<f32>();
    assert!(z.as_slice().iter().all(|&x| x == 0.));
}

#[test]
fn test_kind()
{
    let a = ArrayBuilder::new(3).kind(ElementKind::Bool).build_kind();
    assert_eq!(a.kind(), ElementKind::Bool);
    assert_eq!(a.as_typed::<bool>().unwrap().as_slice(), &[false, true, true]);
}
