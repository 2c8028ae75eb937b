// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::dimension::{Dim, NdIndex};
use crate::error::{from_argument, Argument, InvalidArgument};
use crate::{Element, ElementKind, MultiArray, Scalar, TypedArray};

/// # Methods For All Typed Arrays
impl<A> TypedArray<A>
where A: Element
{
    #[inline]
    fn offset_of<I>(&self, index: &I) -> Result<usize, InvalidArgument>
    where I: NdIndex
    {
        // strides are non-negative, so every in-bounds offset is too
        index
            .index_checked(&self.dim, &self.strides)
            .map(|offset| offset as usize)
            .ok_or_else(|| from_argument(Argument::Index))
    }

    /// Return the element at `index`.
    ///
    /// **Errors** with [`Argument::Index`] if the index does not have one
    /// component per axis or is out of bounds.
    ///
    /// ```
    /// use multi_array::TypedArray;
    ///
    /// let a = TypedArray::from_shape_vec((2, 2), vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(a.get((1, 1)), Ok(4.));
    /// assert!(a.get((2, 0)).is_err());
    /// assert!(a.get(0).is_err());
    /// ```
    pub fn get<I>(&self, index: I) -> Result<A, InvalidArgument>
    where I: NdIndex
    {
        let offset = self.offset_of(&index)?;
        Ok(self.data[offset])
    }

    /// Return a mutable reference to the element at `index`.
    ///
    /// **Errors** like [`get`](TypedArray::get).
    pub fn get_mut<I>(&mut self, index: I) -> Result<&mut A, InvalidArgument>
    where I: NdIndex
    {
        let offset = self.offset_of(&index)?;
        Ok(&mut self.data[offset])
    }

    /// Write `value` at `index`.
    ///
    /// **Errors** like [`get`](TypedArray::get); the array is unchanged on
    /// error.
    pub fn set<I>(&mut self, index: I, value: A) -> Result<(), InvalidArgument>
    where I: NdIndex
    {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Overwrite every element with zero.
    pub fn reset(&mut self)
    {
        self.fill(A::default());
    }

    /// Overwrite every element with `x`.
    pub fn fill(&mut self, x: A)
    {
        for elt in &mut self.data {
            *elt = x;
        }
    }
}

/// # Methods For Arrays With A Runtime Element Kind
impl MultiArray
{
    /// Return the element kind of the array.
    pub fn kind(&self) -> ElementKind
    {
        dispatch!(self, a => element_kind(a))
    }

    /// Return the shape of the array as a slice.
    pub fn shape(&self) -> &[usize]
    {
        dispatch!(self, a => a.shape())
    }

    /// Return the shape of the array as a `Dim`.
    pub fn raw_dim(&self) -> Dim
    {
        dispatch!(self, a => a.raw_dim())
    }

    /// Return the strides of the array, in elements.
    ///
    /// The strides are row-major: the last axis has stride 1 and every
    /// other axis steps over the product of the lengths that follow it.
    pub fn strides(&self) -> &[isize]
    {
        dispatch!(self, a => a.strides())
    }

    /// Return the number of dimensions (axes) in the array
    pub fn ndim(&self) -> usize
    {
        dispatch!(self, a => a.ndim())
    }

    /// Return the total number of elements in the array.
    pub fn len(&self) -> usize
    {
        dispatch!(self, a => a.len())
    }

    /// Return whether the array has any elements
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Return the element at `index` as a [`Scalar`] of the array's kind.
    ///
    /// `index` is a `usize` for a one-dimensional array, otherwise a tuple,
    /// fixed size array, slice or vector with one component per axis.
    ///
    /// **Errors** with [`Argument::Index`] if the index has the wrong number
    /// of components or any component is out of bounds.
    pub fn get<I>(&self, index: I) -> Result<Scalar, InvalidArgument>
    where I: NdIndex
    {
        dispatch!(self, a => a.get(index).map(Element::into_scalar))
    }

    /// Write `value` at `index`, converting it to the array's kind.
    ///
    /// A value of another kind is converted the same way [`assign`] converts
    /// elements; a value of the array's own kind is stored unchanged.
    ///
    /// **Errors** like [`get`](MultiArray::get); the array is unchanged on
    /// error.
    ///
    /// ```
    /// use multi_array::{ElementKind, MultiArray, Scalar};
    ///
    /// let mut a = MultiArray::zeros(3, ElementKind::U8).unwrap();
    /// a.set(0, 7u8).unwrap();
    /// a.set(1, 2.9f64).unwrap();
    /// a.set(2, true).unwrap();
    /// assert_eq!(a.get(1), Ok(Scalar::U8(2)));
    /// assert_eq!(a.get(2), Ok(Scalar::U8(1)));
    /// assert!(a.set(3, 1u8).is_err());
    /// ```
    ///
    /// [`assign`]: MultiArray::assign
    pub fn set<I, V>(&mut self, index: I, value: V) -> Result<(), InvalidArgument>
    where
        I: NdIndex,
        V: Into<Scalar>,
    {
        let value = value.into();
        dispatch!(self, a => a.set(index, value.cast()))
    }

    /// Overwrite every element with the zero of the array's kind.
    pub fn reset(&mut self)
    {
        dispatch!(self, a => a.reset())
    }

    /// Return the typed array inside, if its element type is `A`.
    ///
    /// ```
    /// use multi_array::{ElementKind, MultiArray};
    ///
    /// let a = MultiArray::zeros((2, 3), ElementKind::I16).unwrap();
    /// assert_eq!(a.as_typed::<i16>().unwrap().as_slice(), &[0; 6]);
    /// assert!(a.as_typed::<u16>().is_none());
    /// ```
    pub fn as_typed<A>(&self) -> Option<&TypedArray<A>>
    where A: Element
    {
        A::array_ref(self)
    }

    /// Return the typed array inside mutably, if its element type is `A`.
    pub fn as_typed_mut<A>(&mut self) -> Option<&mut TypedArray<A>>
    where A: Element
    {
        A::array_mut(self)
    }

    /// Return a copy of the array with every element converted to `kind`.
    ///
    /// **Errors** with [`Argument::Shape`] if the converted array would be
    /// too large to allocate.
    ///
    /// ```
    /// use multi_array::{ElementKind, MultiArray, Scalar};
    ///
    /// let a = MultiArray::from_shape_vec(3, vec![-1.5f32, 0., 300.]).unwrap();
    /// let b = a.cast(ElementKind::U8).unwrap();
    /// assert_eq!(b.get(0), Ok(Scalar::U8(0)));
    /// assert_eq!(b.get(2), Ok(Scalar::U8(255)));
    /// ```
    pub fn cast(&self, kind: ElementKind) -> Result<MultiArray, InvalidArgument>
    {
        let mut out = MultiArray::zeros(self.raw_dim(), kind)?;
        out.assign(&self.view().into())?;
        Ok(out)
    }
}

#[inline(always)]
fn element_kind<A: Element>(_: &TypedArray<A>) -> ElementKind
{
    A::KIND
}
