// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tabular dump and formatting traits.
//!
//! The dump is the classic 16-column layout:
//!
//! ```text
//!       00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F  ASCII
//! 0000  48 65 6C 6C 6F 2C 20 77 6F 72 6C 64 21 0A 00 01  Hello, world!...
//! 0010  02 03                                            ..
//! ```
//!
//! Short rows pad the missing columns with blanks so the gutter always
//! starts at the same column. Every line ends with `\n`.

use std::fmt;

use super::{ByteBuffer, PRINTABLE};

/// Bytes per dump row.
pub const DUMP_WIDTH: usize = 16;

/// Buffers up to this length display as compact hex, longer ones as a dump.
pub const COMPACT_DISPLAY_MAX: usize = 16;

#[inline]
pub(crate) fn dump_char(byte: u8) -> char {
    if PRINTABLE.contains(&byte) {
        byte as char
    } else {
        '.'
    }
}

/// Write the header row labeling the hex columns and the gutter.
pub(crate) fn write_dump_header<W: fmt::Write>(out: &mut W) -> fmt::Result {
    out.write_str("      ")?;
    for column in 0..DUMP_WIDTH {
        write!(out, "{:02X} ", column)?;
    }
    out.write_str(" ASCII\n")
}

impl ByteBuffer {
    /// Write the tabular dump (header plus one row per 16 bytes).
    pub fn write_dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write_dump_header(out)?;
        for (row, chunk) in self.as_slice().chunks(DUMP_WIDTH).enumerate() {
            write!(out, "{:04X}  ", row * DUMP_WIDTH)?;
            for byte in chunk {
                write!(out, "{:02X} ", byte)?;
            }
            for _ in chunk.len()..DUMP_WIDTH {
                out.write_str("   ")?;
            }
            out.write_char(' ')?;
            for &byte in chunk {
                out.write_char(dump_char(byte))?;
            }
            out.write_char('\n')?;
        }
        Ok(())
    }

    /// The tabular dump as a string.
    pub fn dump(&self) -> String {
        let rows = self.len().div_ceil(DUMP_WIDTH) + 1;
        let mut out = String::with_capacity(rows * (6 + DUMP_WIDTH * 4 + 2));
        // Writing to a String cannot fail
        let _ = self.write_dump(&mut out);
        out
    }
}

impl fmt::Display for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len() <= COMPACT_DISPLAY_MAX {
            fmt::UpperHex::fmt(self, f)
        } else {
            self.write_dump(f)
        }
    }
}

impl fmt::UpperHex for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.iter() {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteBuffer({:X})", self)
    }
}
