//! Strongly typed errors raised by the contiguous collections.
//!
//! Each failure condition gets its own small struct implementing
//! [`Error`], so callers can match on exactly the cases an operation can
//! produce. [`VectorError`] aggregates them for surfaces that can raise more
//! than one kind.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside the live range `[0, len)` of a collection.
///
/// Returned by the checked accessors ([`at`](crate::Vector::at),
/// [`try_remove`](crate::Vector::try_remove), cursor reads) and used as the
/// panic message of the panicking ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The number of live elements at the time of the access.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A requested capacity would exceed the maximum allocation size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The allocator declined a well-formed allocation request.
///
/// Propagated unmodified from the [`Allocator`](crate::alloc::Allocator);
/// the collections perform no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocFailure;

impl Display for AllocFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Memory allocation failed!")
    }
}

impl Error for AllocFailure {}

/// Any error a [`Vector`](crate::Vector) operation can raise.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum VectorError {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
    AllocFailure(AllocFailure),
}
