// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sequential, endian-aware reader over a [`ByteBuffer`].
//!
//! A cursor is a read position plus a buffer. Whether the buffer is borrowed
//! or owned is decided by the type parameter at construction time:
//!
//! ```text
//! ByteCursor<&ByteBuffer>   borrows; the buffer outlives the cursor and
//!                           cannot be mutated while the cursor lives
//! ByteCursor<ByteBuffer>    owns; the buffer moves in, `into_inner` moves it out
//! ```
//!
//! The position only moves forward. Once it reaches the buffer length the
//! cursor is exhausted for good: there is no seek and no reset.

use std::borrow::Borrow;

use crate::buffer::ByteBuffer;
use crate::contracts::check_cursor_advance;
use crate::error::{BytesError, Result};

/// Byte order used to combine consecutive bytes into a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endian {
    /// First byte is least significant.
    Little,
    /// First byte is most significant.
    #[default]
    Big,
}

impl Endian {
    /// Byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endian = Endian::Little;
    /// Byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endian = Endian::Big;
}

/// Forward-only reader over a borrowed or owned [`ByteBuffer`].
#[derive(Debug, Clone)]
pub struct ByteCursor<B: Borrow<ByteBuffer>> {
    buffer: B,
    position: usize,
}

impl<B: Borrow<ByteBuffer>> ByteCursor<B> {
    /// Start reading at position 0.
    pub fn new(buffer: B) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    #[inline]
    pub fn buffer(&self) -> &ByteBuffer {
        self.buffer.borrow()
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left before exhaustion.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer().len().saturating_sub(self.position)
    }

    /// True once the position has reached or passed the buffer length.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.position >= self.buffer().len()
    }

    /// Give back the buffer (or the borrow).
    pub fn into_inner(self) -> B {
        self.buffer
    }

    fn end_of_buffer(&self) -> BytesError {
        BytesError::EndOfBuffer {
            position: self.position,
            len: self.buffer().len(),
        }
    }

    fn advance(&mut self, by: usize) {
        let before = self.position;
        self.position = self.position.saturating_add(by);
        check_cursor_advance(before, self.position);
    }

    pub fn next_u8(&mut self) -> Result<u8> {
        if self.at_end() {
            return Err(self.end_of_buffer());
        }
        let byte = self.buffer()[self.position];
        self.advance(1);
        Ok(byte)
    }

    pub fn next_i8(&mut self) -> Result<i8> {
        self.next_u8().map(|b| b as i8)
    }

    /// Read two bytes. A lone trailing byte is consumed before the error.
    pub fn next_u16(&mut self, endian: Endian) -> Result<u16> {
        let a = u16::from(self.next_u8()?);
        let b = u16::from(self.next_u8()?);
        Ok(match endian {
            Endian::Big => (a << 8) | b,
            Endian::Little => a | (b << 8),
        })
    }

    pub fn next_i16(&mut self, endian: Endian) -> Result<i16> {
        self.next_u16(endian).map(|v| v as i16)
    }

    /// Read two 16-bit halves in `endian` order and combine them the same way.
    pub fn next_u32(&mut self, endian: Endian) -> Result<u32> {
        let a = u32::from(self.next_u16(endian)?);
        let b = u32::from(self.next_u16(endian)?);
        Ok(match endian {
            Endian::Big => (a << 16) | b,
            Endian::Little => a | (b << 16),
        })
    }

    pub fn next_i32(&mut self, endian: Endian) -> Result<i32> {
        self.next_u32(endian).map(|v| v as i32)
    }

    /// Read up to `length` bytes into a new buffer.
    ///
    /// Unlike the scalar readers this does not fail when fewer than `length`
    /// bytes remain: the result is clipped to what is available, and the
    /// position still advances by the full `length`, so it may end up past
    /// the buffer length. It only fails when the cursor is already exhausted.
    pub fn next_bytes(&mut self, length: usize) -> Result<ByteBuffer> {
        if self.at_end() {
            return Err(self.end_of_buffer());
        }
        let buffer = self.buffer().as_slice();
        let end = self.position.saturating_add(length).min(buffer.len());
        let out = ByteBuffer::from(&buffer[self.position..end]);
        self.advance(length);
        Ok(out)
    }
}

impl<'a> From<&'a ByteBuffer> for ByteCursor<&'a ByteBuffer> {
    fn from(buffer: &'a ByteBuffer) -> Self {
        ByteCursor::new(buffer)
    }
}

impl From<ByteBuffer> for ByteCursor<ByteBuffer> {
    fn from(buffer: ByteBuffer) -> Self {
        ByteCursor::new(buffer)
    }
}
