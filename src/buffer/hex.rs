// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hex text codec.
//!
//! Two digits per byte, high nibble first. Output is always uppercase,
//! input is case-insensitive.
//!
//! Decoding comes in two flavors:
//!
//! - **Strict** (`from_hex`, `FromStr`): every character must be a hex
//!   digit. `"0A 1B"` is rejected at the space.
//! - **Lenient** (`from_hex_lenient`): anything that is not a hex digit is
//!   skipped *between* pairs, so pasted dumps like `"0A 1B-2C"` decode. The
//!   second digit of a pair still has to be a digit.

use std::fmt::Write as _;
use std::str::FromStr;

use super::ByteBuffer;
use crate::contracts::check_hex_rendering;
use crate::error::{BytesError, HexFault, Result};

/// How a piece of text maps to bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// Strict hex digit pairs.
    #[default]
    Hex,
    /// Hex digit pairs, skipping separators between pairs.
    HexLenient,
    /// One byte per code unit.
    Raw,
}

#[inline]
fn nibble(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}

impl ByteBuffer {
    /// Decode strict hex text.
    pub fn from_hex(text: &str) -> Result<Self> {
        let mut bytes = Vec::with_capacity(text.len() / 2);
        let mut chars = text.chars().enumerate();

        while let Some((position, high)) = chars.next() {
            let high = nibble(high)
                .ok_or(BytesError::malformed_hex(position, HexFault::InvalidDigit(high)))?;
            let (position, low) = chars
                .next()
                .ok_or(BytesError::malformed_hex(position + 1, HexFault::OddLength))?;
            let low = nibble(low)
                .ok_or(BytesError::malformed_hex(position, HexFault::InvalidDigit(low)))?;
            bytes.push((high << 4) | low);
        }

        Ok(Self::from(bytes))
    }

    /// Decode hex text, skipping non-hex characters between digit pairs.
    pub fn from_hex_lenient(text: &str) -> Result<Self> {
        let mut bytes = Vec::with_capacity(text.len() / 2);
        let mut chars = text.chars().enumerate();

        while let Some((position, c)) = chars.next() {
            let Some(high) = nibble(c) else {
                continue;
            };
            let (position, low) = chars
                .next()
                .ok_or(BytesError::malformed_hex(position + 1, HexFault::OddLength))?;
            let low = nibble(low)
                .ok_or(BytesError::malformed_hex(position, HexFault::InvalidDigit(low)))?;
            bytes.push((high << 4) | low);
        }

        Ok(Self::from(bytes))
    }

    /// Uppercase hex, two digits per byte, no separator.
    pub fn to_hex(&self) -> String {
        self.to_hex_with("")
    }

    /// Uppercase hex with `separator` between (not after) byte pairs.
    pub fn to_hex_with(&self, separator: &str) -> String {
        let mut out =
            String::with_capacity(self.len() * 2 + self.len().saturating_sub(1) * separator.len());
        for (i, byte) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            // Writing to a String cannot fail
            let _ = write!(out, "{:02X}", byte);
        }
        check_hex_rendering(self.len(), separator.len(), &out);
        out
    }
}

impl FromStr for ByteBuffer {
    type Err = BytesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}
