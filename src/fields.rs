// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typed field layouts read through a [`ByteCursor`].
//!
//! A layout is a comma-separated list of field kinds, e.g.
//! `"u8,u16be,i32le,bytes:4"`. Each entry maps to exactly one cursor call,
//! so decoding a layout is equivalent to issuing those calls by hand.
//!
//! | Name                        | Cursor call              |
//! |-----------------------------|--------------------------|
//! | `u8`, `i8`                  | `next_u8`, `next_i8`     |
//! | `u16[be\|le]`, `i16[be\|le]`| `next_u16`, `next_i16`   |
//! | `u32[be\|le]`, `i32[be\|le]`| `next_u32`, `next_i32`   |
//! | `bytes:N`                   | `next_bytes(N)`          |
//!
//! Names without an endian suffix read big-endian.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::buffer::ByteBuffer;
use crate::cursor::{ByteCursor, Endian};
use crate::error::{BytesError, Result};

/// One field of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    U8,
    I8,
    U16(Endian),
    I16(Endian),
    U32(Endian),
    I32(Endian),
    Bytes(usize),
}

/// A decoded field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Unsigned(u32),
    Signed(i32),
    /// Serialized as an uppercase hex string
    Bytes(ByteBuffer),
}

fn split_endian(name: &str) -> (&str, Endian) {
    if let Some(base) = name.strip_suffix("be") {
        (base, Endian::Big)
    } else if let Some(base) = name.strip_suffix("le") {
        (base, Endian::Little)
    } else {
        (name, Endian::default())
    }
}

impl FromStr for FieldKind {
    type Err = BytesError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();

        if let Some(count) = name.strip_prefix("bytes:") {
            return count
                .parse::<usize>()
                .map(FieldKind::Bytes)
                .map_err(|_| BytesError::InvalidLayout(format!("bad byte count in {:?}", s)));
        }

        match name.as_str() {
            "u8" => return Ok(FieldKind::U8),
            "i8" => return Ok(FieldKind::I8),
            _ => {}
        }

        let (base, endian) = split_endian(&name);
        match base {
            "u16" => Ok(FieldKind::U16(endian)),
            "i16" => Ok(FieldKind::I16(endian)),
            "u32" => Ok(FieldKind::U32(endian)),
            "i32" => Ok(FieldKind::I32(endian)),
            _ => Err(BytesError::InvalidLayout(format!(
                "unknown field kind {:?}",
                s
            ))),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = |endian: &Endian| match endian {
            Endian::Big => "be",
            Endian::Little => "le",
        };
        match self {
            FieldKind::U8 => f.write_str("u8"),
            FieldKind::I8 => f.write_str("i8"),
            FieldKind::U16(e) => write!(f, "u16{}", suffix(e)),
            FieldKind::I16(e) => write!(f, "i16{}", suffix(e)),
            FieldKind::U32(e) => write!(f, "u32{}", suffix(e)),
            FieldKind::I32(e) => write!(f, "i32{}", suffix(e)),
            FieldKind::Bytes(n) => write!(f, "bytes:{}", n),
        }
    }
}

/// Parse a comma-separated layout. Empty entries are rejected.
pub fn parse_layout(layout: &str) -> Result<Vec<FieldKind>> {
    layout
        .split(',')
        .map(|entry| {
            if entry.trim().is_empty() {
                Err(BytesError::InvalidLayout(format!(
                    "empty field in layout {:?}",
                    layout
                )))
            } else {
                entry.parse()
            }
        })
        .collect()
}

impl<B: Borrow<ByteBuffer>> ByteCursor<B> {
    /// Read one field.
    pub fn read_field(&mut self, kind: FieldKind) -> Result<FieldValue> {
        let value = match kind {
            FieldKind::U8 => FieldValue::Unsigned(u32::from(self.next_u8()?)),
            FieldKind::I8 => FieldValue::Signed(i32::from(self.next_i8()?)),
            FieldKind::U16(e) => FieldValue::Unsigned(u32::from(self.next_u16(e)?)),
            FieldKind::I16(e) => FieldValue::Signed(i32::from(self.next_i16(e)?)),
            FieldKind::U32(e) => FieldValue::Unsigned(self.next_u32(e)?),
            FieldKind::I32(e) => FieldValue::Signed(self.next_i32(e)?),
            FieldKind::Bytes(n) => FieldValue::Bytes(self.next_bytes(n)?),
        };
        tracing::trace!(field = %kind, position = self.position(), "decoded field");
        Ok(value)
    }
}

/// Read every field of `layout` in order. The first failure aborts.
pub fn decode_fields<B: Borrow<ByteBuffer>>(
    cursor: &mut ByteCursor<B>,
    layout: &[FieldKind],
) -> Result<Vec<FieldValue>> {
    layout.iter().map(|&kind| cursor.read_field(kind)).collect()
}
