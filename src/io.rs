// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading buffers from text streams and files.
//!
//! These are the I/O boundary, so they speak `io::Result`. Decode failures
//! come back as `io::ErrorKind::InvalidData` with the original
//! [`BytesError`] inside (`err.get_ref()` / `err.into_inner()`).

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use crate::buffer::{ByteBuffer, TextEncoding};
use crate::error::BytesError;

/// How the bytes of a file should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// File contents are the bytes.
    Binary,
    /// File contents are text in the given encoding.
    Text(TextEncoding),
}

fn invalid_data(err: BytesError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err)
}

fn trim_line_end(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Read one line and decode it as strict hex. `Ok(None)` at end of input.
pub fn read_hex_line<R: BufRead>(reader: &mut R) -> io::Result<Option<ByteBuffer>> {
    read_line_as(reader, TextEncoding::Hex)
}

fn read_line_as<R: BufRead>(
    reader: &mut R,
    encoding: TextEncoding,
) -> io::Result<Option<ByteBuffer>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    ByteBuffer::parse(trim_line_end(&line), encoding)
        .map(Some)
        .map_err(|e| {
            tracing::debug!(error = %e, "line failed to decode");
            invalid_data(e)
        })
}

/// Iterator over the lines of a reader, each decoded with one encoding.
pub struct Lines<R> {
    reader: R,
    encoding: TextEncoding,
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<ByteBuffer>;

    fn next(&mut self) -> Option<Self::Item> {
        read_line_as(&mut self.reader, self.encoding).transpose()
    }
}

/// Decode every line of `reader` with `encoding`.
pub fn read_hex_lines<R: BufRead>(reader: R, encoding: TextEncoding) -> Lines<R> {
    Lines { reader, encoding }
}

/// Load a file as a buffer.
///
/// Text formats decode the whole file; one trailing line terminator is
/// ignored so files written by editors decode cleanly.
pub fn load(path: impl AsRef<Path>, format: InputFormat) -> io::Result<ByteBuffer> {
    let path = path.as_ref();
    let buffer = match format {
        InputFormat::Binary => ByteBuffer::from(fs::read(path)?),
        InputFormat::Text(encoding) => {
            let text = fs::read_to_string(path)?;
            let text = match encoding {
                TextEncoding::Raw => text.as_str(),
                TextEncoding::Hex | TextEncoding::HexLenient => trim_line_end(&text),
            };
            ByteBuffer::parse(text, encoding).map_err(invalid_data)?
        }
    };
    tracing::debug!(path = %path.display(), len = buffer.len(), ?format, "loaded buffer");
    Ok(buffer)
}
