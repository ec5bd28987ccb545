//! A module containing [`Vector`] and associated types.
//!
//! [`Cursor`] and [`CursorMut`] provide range-checked positioning over a
//! borrowed Vector, and [`IntoIter`] provides owned iteration.
//! [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from
//! [`std::slice`] are used for borrowed iteration.
//!
//! [`Vector`] is also re-exported under the parent module.

mod cursor;
mod iter;
mod tests;
mod vector;

pub use cursor::*;
pub use iter::IntoIter;
pub use vector::Vector;
