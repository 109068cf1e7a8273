use thiserror::Error;

/// Result alias for cursor operations.
pub type Result<T, E = CursorError> = core::result::Result<T, E>;

/// Failure raised by a [`ByteCursor`](crate::ByteCursor) accessor.
///
/// A failed call never moves the cursor, so the caller can decide whether the
/// error is fatal or means "wait for more data" and retry against a longer
/// buffer starting from the same position.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// The access would touch bytes past the end of the buffer.
    ///
    /// `offset` is the absolute position of the first requested byte (for a
    /// read, the cursor position before the call), `length` the number of
    /// bytes requested and `buffer_len` the total buffer length.
    #[error("Trying to access beyond buffer length {offset} {length} {buffer_len}")]
    OutOfRange {
        /// Absolute position of the first requested byte.
        offset: usize,
        /// Number of bytes requested.
        length: usize,
        /// Length of the underlying buffer.
        buffer_len: usize,
    },
}

impl CursorError {
    pub(crate) fn out_of_range(offset: usize, length: usize, buffer_len: usize) -> Self {
        #[cfg(feature = "log")]
        log::trace!(
            "out of range access: offset={offset} length={length} buffer_len={buffer_len}"
        );
        CursorError::OutOfRange {
            offset,
            length,
            buffer_len,
        }
    }

    /// Position of the first byte the failed access asked for.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            CursorError::OutOfRange { offset, .. } => *offset,
        }
    }

    /// Number of bytes the failed access asked for.
    #[must_use]
    pub fn length(&self) -> usize {
        match self {
            CursorError::OutOfRange { length, .. } => *length,
        }
    }

    /// Length of the buffer the access ran against.
    #[must_use]
    pub fn buffer_len(&self) -> usize {
        match self {
            CursorError::OutOfRange { buffer_len, .. } => *buffer_len,
        }
    }
}
