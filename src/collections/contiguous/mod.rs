//! Contiguous collection types. Namely [`Vector`], a growable collection
//! whose elements occupy a single heap buffer, together with its cursor and
//! iterator types.
#![warn(missing_docs)]

pub(crate) mod buffer;
pub mod vector;

#[doc(inline)]
pub use vector::{Cursor, CursorMut, IntoIter, Vector};
