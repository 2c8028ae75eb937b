// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

/// An error raised when an argument violates the contract of an array
/// operation.
///
/// Every fallible operation in this crate reports its failure with this
/// type; [`.argument()`](InvalidArgument::argument) names the offending
/// parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidArgument
{
    // we want to be able to change this representation later
    repr: Argument,
}

impl InvalidArgument
{
    /// Return the argument that was rejected.
    #[inline]
    pub fn argument(&self) -> Argument
    {
        self.repr
    }

    /// Create a new `InvalidArgument` for `argument`.
    pub fn from_argument(argument: Argument) -> Self
    {
        from_argument(argument)
    }
}

/// The parameter blamed by an [`InvalidArgument`].
///
/// This enumeration is not exhaustive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Argument
{
    /// the array handle is null
    SelfArg,
    /// rank outside `1..=MAX_RANK`, or a shape too large to allocate
    Shape,
    /// unrecognized element kind
    Dtype,
    /// index of the wrong length, or out of bounds
    Index,
    /// import source incompatible with the destination
    Source,
    /// malformed import descriptor
    Nd,
}

impl Argument
{
    /// The parameter name as it appears in error messages.
    pub fn name(self) -> &'static str
    {
        match self {
            Argument::SelfArg => "self",
            Argument::Shape => "shape",
            Argument::Dtype => "dtype",
            Argument::Index => "index",
            Argument::Source => "source",
            Argument::Nd => "nd",
        }
    }
}

#[inline(always)]
pub(crate) fn from_argument(argument: Argument) -> InvalidArgument
{
    InvalidArgument { repr: argument }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidArgument {}

impl fmt::Display for InvalidArgument
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "invalid argument: {}", self.repr.name())
    }
}

impl fmt::Display for Argument
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}
