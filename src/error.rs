// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for buffer construction, slicing, bitwise combination and
//! cursor reads.
//!
//! Every failure is reported at the point of violation. Nothing here retries
//! or falls back, so each variant carries enough context to tell the caller
//! exactly which bound was crossed.

use thiserror::Error;

/// What went wrong inside a hex string.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexFault {
    /// A character outside `0-9A-Fa-f` where a digit was expected.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
    /// The text ended after the first digit of a pair.
    #[error("odd number of hex digits")]
    OddLength,
}

/// Errors raised by [`ByteBuffer`](crate::ByteBuffer) and
/// [`ByteCursor`](crate::ByteCursor) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BytesError {
    /// Hex decoding hit a non-hex character or an incomplete digit pair.
    #[error("malformed hex at character {position}: {fault}")]
    MalformedHex {
        /// Character index (not byte index) of the offending digit
        position: usize,
        fault: HexFault,
    },

    /// Bitwise combination of buffers with different lengths.
    #[error("length mismatch: left operand has {left} bytes, right operand has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Slice request reaching past the end of the buffer.
    #[error("range of {length} bytes at offset {offset} exceeds buffer length {len}")]
    OutOfRange {
        offset: usize,
        length: usize,
        len: usize,
    },

    /// Read attempted on an exhausted cursor.
    #[error("end of buffer: position {position}, length {len}")]
    EndOfBuffer { position: usize, len: usize },

    /// Field layout text that does not name a known field kind.
    #[error("invalid field layout: {0}")]
    InvalidLayout(String),
}

impl BytesError {
    pub(crate) fn malformed_hex(position: usize, fault: HexFault) -> Self {
        BytesError::MalformedHex { position, fault }
    }
}

/// Result alias for buffer and cursor operations.
pub type Result<T> = std::result::Result<T, BytesError>;
