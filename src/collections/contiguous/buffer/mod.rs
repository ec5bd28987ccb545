//! The storage layer underneath [`Vector`](crate::Vector): a raw,
//! exclusively owned allocation with no notion of which slots are live.
//! Everything pointer-shaped in this crate happens inside [`RawBuf`]'s
//! primitives; the container above it deals purely in indices.

mod buffer;

pub(crate) use buffer::*;
