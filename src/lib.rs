//! A growable contiguous-buffer container rebuilt from first principles.
//!
//! # Purpose
//! This crate re-derives the machinery a standard-library growable array is
//! made of — explicit buffer ownership, capacity bookkeeping, amortized
//! growth, element migration — without building on [`Vec`]. The point is to
//! own every invariant rather than inherit them: the allocation strategy,
//! the element lifecycle and the position-validation rules are all spelled
//! out here.
//!
//! # Design
//! The pieces layer strictly:
//! - [`alloc::Allocator`] supplies raw memory; [`alloc::Global`] is the
//!   default implementation over [`std::alloc`].
//! - An internal buffer type owns one allocation and hosts the few unsafe
//!   primitives (migrate, shift, destroy) everything else is written in
//!   terms of.
//! - [`Vector`] orchestrates buffer and allocator into the public
//!   growable-array contract.
//! - [`Cursor`]/[`CursorMut`] are range-checked positions into a borrowed
//!   Vector. Holding one borrows the Vector, so the borrow checker — not a
//!   runtime flag — rules out using a position across a reallocation.
//!
//! # Error Handling
//! Failures are strongly typed ([`IndexOutOfBounds`], [`CapacityOverflow`],
//! [`AllocFailure`]) and every checked accessor stays checked in release
//! builds; bounds safety never depends on a build profile. Panicking entry
//! points exist for ergonomics and panic with the corresponding error's own
//! message, while the `try_` forms and [`Vector::at`] return [`Result`]s
//! for callers that want to handle the error. The only unchecked paths are
//! the explicitly `unsafe` ones.
//!
//! # Dependencies
//! Element storage is managed by hand on top of [`std::alloc`]; this
//! library doesn't use [`Vec`] at all. Derive macros cover the repetitive
//! parts of the error types.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod alloc;
pub mod collections;
pub mod error;

pub(crate) mod util;

pub use self::alloc::{Allocator, Global};
pub use self::collections::contiguous::{Cursor, CursorMut, IntoIter, Vector};
pub use self::error::{AllocFailure, CapacityOverflow, IndexOutOfBounds, VectorError};
