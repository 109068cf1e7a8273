//! Read head over a borrowed byte buffer.
//!
//! Every accessor checks its whole byte range against the buffer before
//! reading, and only a successful non-peek read moves the offset. The offset
//! therefore always stays within `0..=buffer.len()`.

use core::fmt;

use bstr::BStr;

use crate::error::{CursorError, Result};


/// Sequential, bounds-checked reader over a byte slice.
///
/// Cloning a cursor yields an independent read head over the same bytes; the
/// two offsets never affect each other.
#[derive(Clone, PartialEq, Eq)]
pub struct ByteCursor<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor positioned at the start of `buffer`.
    #[must_use]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    /// Copies `N` bytes starting `rel` bytes past the offset.
    ///
    /// The whole range is validated up front; overflow of `offset + rel` is
    /// reported as an out-of-range access at `usize::MAX`.
    #[inline]
    fn bytes_at<const N: usize>(&self, rel: usize) -> Result<[u8; N]> {
        let start = self.offset.checked_add(rel);
        start
            .and_then(|start| Some(start..start.checked_add(N)?))
            .and_then(|range| self.buffer.get(range))
            .and_then(|slice| <[u8; N]>::try_from(slice).ok())
            .ok_or_else(|| {
                CursorError::out_of_range(start.unwrap_or(usize::MAX), N, self.buffer.len())
            })
    }

    #[inline]
    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.bytes_at::<N>(0)?;
        self.offset += N;
        Ok(bytes)
    }

    // Peeks. Little-endian, offset untouched.

    /// Returns the byte `rel` positions past the offset without consuming it.
    ///
    /// # Errors
    ///
    /// [`CursorError::OutOfRange`] if that byte lies past the end of the buffer.
    #[inline]
    pub fn peek_u8(&self, rel: usize) -> Result<u8> {
        self.bytes_at::<1>(rel).map(|[b]| b)
    }

    /// Little-endian `u16` starting `rel` bytes past the offset.
    ///
    /// # Errors
    ///
    /// [`CursorError::OutOfRange`] if fewer than two bytes are available there.
    #[inline]
    pub fn peek_u16(&self, rel: usize) -> Result<u16> {
        self.bytes_at(rel).map(u16::from_le_bytes)
    }

    /// Little-endian `u32` starting `rel` bytes past the offset.
    ///
    /// # Errors
    ///
    /// [`CursorError::OutOfRange`] if fewer than four bytes are available there.
    #[inline]
    pub fn peek_u32(&self, rel: usize) -> Result<u32> {
        self.bytes_at(rel).map(u32::from_le_bytes)
    }

    /// Peeks an unsigned integer whose width is chosen at runtime.
    ///
    /// `size` 4 and 2 dispatch to [`peek_u32`](Self::peek_u32) and
    /// [`peek_u16`](Self::peek_u16); any other value, including 0 or 8, reads
    /// a single byte.
    ///
    /// # Errors
    ///
    /// [`CursorError::OutOfRange`] from the selected accessor.
    pub fn peek_uint_x(&self, size: usize, rel: usize) -> Result<u32> {
        match size {
            4 => self.peek_u32(rel),
            2 => self.peek_u16(rel).map(u32::from),
            _ => self.peek_u8(rel).map(u32::from),
        }
    }

    // Reads. Advance the offset by the width of the value on success.

    /// Consumes one byte.
    ///
    /// # Errors
    ///
    /// [`CursorError::OutOfRange`] at the end of the buffer.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.take::<1>().map(|[b]| b)
    }

    /// Consumes a big-endian `u16`.
    ///
    /// # Errors
    ///
    /// [`CursorError::OutOfRange`] if fewer than two bytes remain.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        self.take().map(u16::from_be_bytes)
    }

    /// Consumes a little-endian `u16`.
    ///
    /// # Errors
    ///
    /// [`CursorError::OutOfRange`] if fewer than two bytes remain.
    #[inline]
    pub fn read_u16_le(&mut self) -> Result<u16> {
        self.take().map(u16::from_le_bytes)
    }

    /// Consumes a big-endian `u32`.
    ///
    /// # Errors
    ///
    /// [`CursorError::OutOfRange`] if fewer than four bytes remain.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        self.take().map(u32::from_be_bytes)
    }

    /// Consumes a little-endian `u32`.
    ///
    /// # Errors
    ///
    /// [`CursorError::OutOfRange`] if fewer than four bytes remain.
    #[inline]
    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.take().map(u32::from_le_bytes)
    }

    /// Consumes a big-endian IEEE-754 single.
    ///
    /// # Errors
    ///
    /// [`CursorError::OutOfRange`] if fewer than four bytes remain.
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32> {
        self.take().map(f32::from_be_bytes)
    }

    /// Consumes a little-endian IEEE-754 single.
    ///
    /// # Errors
    ///
    /// [`CursorError::OutOfRange`] if fewer than four bytes remain.
    #[inline]
    pub fn read_f32_le(&mut self) -> Result<f32> {
        self.take().map(f32::from_le_bytes)
    }

    /// Consumes a big-endian IEEE-754 double.
    ///
    /// There is no little-endian counterpart.
    ///
    /// # Errors
    ///
    /// [`CursorError::OutOfRange`] if fewer than eight bytes remain.
    #[inline]
    pub fn read_f64(&mut self) -> Result<f64> {
        self.take().map(f64::from_be_bytes)
    }

    /// Consumes a little-endian unsigned integer whose width is chosen at
    /// runtime. Same dispatch as [`peek_uint_x`](Self::peek_uint_x).
    ///
    /// # Errors
    ///
    /// [`CursorError::OutOfRange`] from the selected accessor.
    pub fn read_uint_x(&mut self, size: usize) -> Result<u32> {
        match size {
            4 => self.read_u32_le(),
            2 => self.read_u16_le().map(u32::from),
            _ => self.read_u8().map(u32::from),
        }
    }

    /// Consumes `length` raw bytes and returns them as a view into the
    /// underlying buffer.
    ///
    /// The returned slice borrows the buffer, not the cursor, so it can be
    /// held across further reads.
    ///
    /// # Errors
    ///
    /// [`CursorError::OutOfRange`] carrying the current offset, `length` and
    /// the buffer length when fewer than `length` bytes remain.
    pub fn read_buffer(&mut self, length: usize) -> Result<&'a [u8]> {
        let buffer = self.buffer;
        let end = self
            .offset
            .checked_add(length)
            .filter(|end| *end <= buffer.len())
            .ok_or_else(|| CursorError::out_of_range(self.offset, length, buffer.len()))?;
        let slice = &buffer[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    // Queries.

    /// `true` once every byte has been consumed.
    #[must_use]
    pub fn has_ended(&self) -> bool {
        // `offset` never passes the end, so equality is the whole story.
        self.offset == self.buffer.len()
    }

    /// Current read position in bytes from the start of the buffer.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes left to read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    /// Length of the underlying buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the underlying buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The whole underlying buffer, including consumed bytes.
    #[must_use]
    pub fn as_slice(&self) -> &'a [u8] {
        self.buffer
    }

    /// The unread tail, without consuming it.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        &self.buffer[self.offset..]
    }

    /// Panics if the offset has escaped the buffer.
    #[cfg(feature = "fuzzing")]
    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        assert!(self.offset <= self.buffer.len());
        assert_eq!(self.remaining() + self.offset, self.buffer.len());
        assert_eq!(self.has_ended(), self.remaining() == 0);
    }
}

impl<'a> From<&'a [u8]> for ByteCursor<'a> {
    fn from(buffer: &'a [u8]) -> Self {
        Self::new(buffer)
    }
}

impl fmt::Debug for ByteCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteCursor")
            .field("offset", &self.offset)
            .field("len", &self.buffer.len())
            .field("rest", &BStr::new(self.rest()))
            .finish()
    }
}
