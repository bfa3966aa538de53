// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The owned byte buffer.
//!
//! `ByteBuffer` is a value type around a single `Vec<u8>`. It deliberately
//! does not `Deref` to a slice: callers get the operations listed here, plus
//! `as_slice()` when they really want the raw bytes.
//!
//! ```text
//! ┌──────────────┐   from_hex / from_raw / from_parts
//! │   text, [u8] │ ─────────────────────────────────────▶ ┌────────────┐
//! └──────────────┘                                        │ ByteBuffer │
//!                    slice / left / right / concat  ◀──── │  Vec<u8>   │
//!                    and / or / xor (equal lengths)       └────────────┘
//!                    to_hex / dump / Display                    │
//!                                                               ▼
//!                                                     ByteCursor (reads)
//! ```
//!
//! # Submodules
//!
//! - `hex`: strict and lenient hex decoding, hex rendering, `TextEncoding`
//! - `bitwise`: AND/OR/XOR between equal-length buffers
//! - `dump`: the 16-column tabular dump and the formatting traits

mod bitwise;
mod dump;
mod hex;

pub use dump::{COMPACT_DISPLAY_MAX, DUMP_WIDTH};
pub use hex::TextEncoding;

use std::borrow::Borrow;
use std::ops::{Add, AddAssign, Index, IndexMut};

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::contracts::check_slice_bounds;
use crate::error::{BytesError, Result};

/// Printable ASCII range used by `all_ascii` and the dump gutter.
pub(crate) const PRINTABLE: std::ops::RangeInclusive<u8> = 0x20..=0x7E;

/// An ordered, growable sequence of bytes that owns its storage.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl ByteBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Create an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer of `len` zero bytes.
    pub fn zeroed(len: usize) -> Self {
        Self::filled(0, len)
    }

    /// Create a buffer holding `count` copies of `byte`.
    pub fn filled(byte: u8, count: usize) -> Self {
        Self {
            bytes: vec![byte; count],
        }
    }

    /// Copy each code unit of `text` as one byte, in order.
    ///
    /// Rust strings are UTF-8, so a non-ASCII character contributes one
    /// byte per UTF-8 code unit.
    pub fn from_raw(text: &str) -> Self {
        Self {
            bytes: text.as_bytes().to_vec(),
        }
    }

    /// Narrow each UTF-16 code unit to its low byte.
    pub fn from_wide(units: &[u16]) -> Self {
        units.iter().map(|&unit| unit as u8).collect()
    }

    /// Emit each UTF-16 code unit as two little-endian bytes.
    pub fn from_wide_le(units: &[u16]) -> Self {
        let mut bytes = Vec::with_capacity(units.len() * 2);
        for unit in units {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        Self { bytes }
    }

    /// Concatenate `parts` in order into a new buffer.
    pub fn from_parts<T: AsRef<[u8]>>(parts: &[T]) -> Self {
        let total: usize = parts.iter().map(|part| part.as_ref().len()).sum();
        let mut bytes = Vec::with_capacity(total);
        for part in parts {
            bytes.extend_from_slice(part.as_ref());
        }
        Self { bytes }
    }

    /// Decode `text` with the given encoding.
    pub fn parse(text: &str, encoding: TextEncoding) -> Result<Self> {
        match encoding {
            TextEncoding::Hex => Self::from_hex(text),
            TextEncoding::HexLenient => Self::from_hex_lenient(text),
            TextEncoding::Raw => Ok(Self::from_raw(text)),
        }
    }

    /// Unwrap into the underlying vector.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

// ============================================================================
// ACCESSORS
// ============================================================================

impl ByteBuffer {
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Byte at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    pub fn first(&self) -> Option<u8> {
        self.bytes.first().copied()
    }

    pub fn last(&self) -> Option<u8> {
        self.bytes.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.bytes.iter()
    }

    /// True iff every byte is printable ASCII (`0x20..=0x7E`).
    pub fn all_ascii(&self) -> bool {
        self.bytes.iter().all(|b| PRINTABLE.contains(b))
    }

    /// The contents as text, when every byte is printable ASCII.
    pub fn as_ascii_str(&self) -> Option<&str> {
        if self.all_ascii() {
            std::str::from_utf8(&self.bytes).ok()
        } else {
            None
        }
    }

    /// CRC32 (IEEE) of the contents.
    pub fn checksum(&self) -> u32 {
        crc32fast::hash(&self.bytes)
    }
}

// ============================================================================
// STRUCTURAL OPERATIONS
// ============================================================================

impl ByteBuffer {
    /// Copy `[offset, offset + length)` into a new buffer.
    pub fn slice(&self, offset: usize, length: usize) -> Result<Self> {
        let end = offset
            .checked_add(length)
            .filter(|&end| end <= self.len())
            .ok_or(BytesError::OutOfRange {
                offset,
                length,
                len: self.len(),
            })?;
        check_slice_bounds(offset, length, self.len());
        Ok(Self {
            bytes: self.bytes[offset..end].to_vec(),
        })
    }

    /// The first `length` bytes.
    pub fn left(&self, length: usize) -> Result<Self> {
        self.slice(0, length)
    }

    /// The last `length` bytes.
    pub fn right(&self, length: usize) -> Result<Self> {
        // len - length would underflow, so the range check happens here
        let offset = self
            .len()
            .checked_sub(length)
            .ok_or(BytesError::OutOfRange {
                offset: 0,
                length,
                len: self.len(),
            })?;
        self.slice(offset, length)
    }

    /// A new buffer holding `self` followed by `other`.
    pub fn concat(&self, other: &ByteBuffer) -> Self {
        let mut bytes = Vec::with_capacity(self.len() + other.len());
        bytes.extend_from_slice(&self.bytes);
        bytes.extend_from_slice(&other.bytes);
        Self { bytes }
    }

    /// Append `other` in place.
    pub fn join(&mut self, other: &ByteBuffer) -> &mut Self {
        self.bytes.extend_from_slice(&other.bytes);
        self
    }

    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }
}

// ============================================================================
// TRAIT IMPLS
// ============================================================================

impl Index<usize> for ByteBuffer {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.bytes[index]
    }
}

impl IndexMut<usize> for ByteBuffer {
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.bytes[index]
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Borrow<[u8]> for ByteBuffer {
    fn borrow(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }
}

impl<const N: usize> From<[u8; N]> for ByteBuffer {
    fn from(bytes: [u8; N]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }
}

impl From<ByteBuffer> for Vec<u8> {
    fn from(buffer: ByteBuffer) -> Self {
        buffer.bytes
    }
}

impl FromIterator<u8> for ByteBuffer {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            bytes: iter.into_iter().collect(),
        }
    }
}

impl Extend<u8> for ByteBuffer {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.bytes.extend(iter);
    }
}

impl IntoIterator for ByteBuffer {
    type Item = u8;
    type IntoIter = std::vec::IntoIter<u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ByteBuffer {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.iter()
    }
}

impl Add<&ByteBuffer> for &ByteBuffer {
    type Output = ByteBuffer;

    fn add(self, rhs: &ByteBuffer) -> ByteBuffer {
        self.concat(rhs)
    }
}

impl AddAssign<&ByteBuffer> for ByteBuffer {
    fn add_assign(&mut self, rhs: &ByteBuffer) {
        self.join(rhs);
    }
}

// ============================================================================
// SERDE (hex string form)
// ============================================================================

impl Serialize for ByteBuffer {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

struct HexVisitor;

impl Visitor<'_> for HexVisitor {
    type Value = ByteBuffer;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a string of hex digit pairs")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<ByteBuffer, E> {
        ByteBuffer::from_hex(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for ByteBuffer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_str(HexVisitor)
    }
}
