//! A bounds-checked sequential reader over a borrowed byte buffer.
//!
//! [`ByteCursor`] wraps a `&[u8]` with a read offset and exposes typed
//! accessors for the fixed-width values found in binary wire formats:
//! unsigned integers of one, two and four bytes, IEEE-754 single and double
//! precision floats, and raw sub-slices.
//!
//! ```rust
//! use bytecursor::ByteCursor;
//!
//! let mut cursor = ByteCursor::new(&[0x01, 0x02, 0x78, 0x56, 0x34, 0x12]);
//! assert_eq!(cursor.read_u16().unwrap(), 0x0102);
//! assert_eq!(cursor.peek_u8(0).unwrap(), 0x78);
//! assert_eq!(cursor.read_u32_le().unwrap(), 0x1234_5678);
//! assert!(cursor.has_ended());
//! assert!(cursor.read_u8().is_err());
//! ```
//!
//! # Byte order
//!
//! The fixed-width readers ([`ByteCursor::read_u16`], [`ByteCursor::read_u32`],
//! [`ByteCursor::read_f32`], [`ByteCursor::read_f64`]) are big-endian. The
//! `_le` readers, every peek, and the size-dispatching
//! [`ByteCursor::read_uint_x`] / [`ByteCursor::peek_uint_x`] are
//! little-endian. Wire formats decoded with this crate depend on that split,
//! so it is kept as is.

#![no_std]

#[cfg(test)]
extern crate std;

mod cursor;
mod error;

#[cfg(test)]
mod tests;

pub use cursor::ByteCursor;
pub use error::{CursorError, Result};
