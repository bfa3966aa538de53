// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Byte buffers with hex codecs, bitwise set operations and an endian-aware
//! sequential reader.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  buffer/     │────▶│  cursor.rs   │────▶│  fields.rs   │
//! │ (ByteBuffer, │     │ (ByteCursor, │     │ (FieldKind,  │
//! │  hex, dump,  │     │  Endian)     │     │  layouts)    │
//! │  bitwise)    │     └──────────────┘     └──────────────┘
//! └──────────────┘
//!        │
//!        ▼
//! ┌──────────────┐     ┌─────────────────────────────────────┐
//! │   io.rs      │     │ error.rs (BytesError)               │
//! │ (lines,load) │     │ contracts.rs (debug-only invariants)│
//! └──────────────┘     └─────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! | Operation              | Rule                                   | Error            |
//! |------------------------|----------------------------------------|------------------|
//! | `from_hex`             | digit pairs from `0-9A-Fa-f` only      | `MalformedHex`   |
//! | `and` / `or` / `xor`   | operands have equal length             | `LengthMismatch` |
//! | `slice` / `left` / `right` | range inside the buffer            | `OutOfRange`     |
//! | `ByteCursor::next_*`   | cursor not yet exhausted               | `EndOfBuffer`    |
//!
//! # Usage
//!
//! ```
//! use bytescope::{ByteBuffer, ByteCursor, Endian};
//!
//! let buf: ByteBuffer = "0102030405".parse().unwrap();
//! let mut cursor = ByteCursor::new(&buf);
//!
//! assert_eq!(cursor.next_u16(Endian::Big).unwrap(), 0x0102);
//! assert_eq!(cursor.next_u16(Endian::Little).unwrap(), 0x0403);
//! assert_eq!(cursor.next_bytes(8).unwrap().to_hex(), "05");
//! assert!(cursor.at_end());
//! ```

// Module declarations
mod buffer;
pub mod contracts;
mod cursor;
mod error;
pub mod fields;
pub mod io;

// Re-exports for public API
pub use buffer::{ByteBuffer, TextEncoding, COMPACT_DISPLAY_MAX, DUMP_WIDTH};
pub use cursor::{ByteCursor, Endian};
pub use error::{BytesError, HexFault, Result};
pub use fields::{decode_fields, parse_layout, FieldKind, FieldValue};
pub use io::InputFormat;
