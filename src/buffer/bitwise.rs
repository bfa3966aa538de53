// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bitwise set operations between equal-length buffers.
//!
//! Unequal lengths are always an error. There is no truncation to the
//! shorter operand and no zero padding of the longer one. These are methods
//! instead of `BitAnd`/`BitOr`/`BitXor` impls because the operator traits
//! have no way to report the mismatch.

use super::ByteBuffer;
use crate::contracts::check_bitwise_operands;
use crate::error::{BytesError, Result};

impl ByteBuffer {
    fn ensure_same_len(&self, rhs: &ByteBuffer) -> Result<()> {
        if self.len() != rhs.len() {
            return Err(BytesError::LengthMismatch {
                left: self.len(),
                right: rhs.len(),
            });
        }
        check_bitwise_operands(self.as_slice(), rhs.as_slice());
        Ok(())
    }

    fn combine(&self, rhs: &ByteBuffer, op: impl Fn(u8, u8) -> u8) -> Result<ByteBuffer> {
        self.ensure_same_len(rhs)?;
        Ok(self
            .iter()
            .zip(rhs.iter())
            .map(|(&a, &b)| op(a, b))
            .collect())
    }

    fn combine_in_place(
        &mut self,
        rhs: &ByteBuffer,
        op: impl Fn(&mut u8, u8),
    ) -> Result<&mut Self> {
        self.ensure_same_len(rhs)?;
        for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.iter()) {
            op(a, b);
        }
        Ok(self)
    }

    /// Byte-wise AND into a new buffer.
    pub fn and(&self, rhs: &ByteBuffer) -> Result<ByteBuffer> {
        self.combine(rhs, |a, b| a & b)
    }

    /// Byte-wise OR into a new buffer.
    pub fn or(&self, rhs: &ByteBuffer) -> Result<ByteBuffer> {
        self.combine(rhs, |a, b| a | b)
    }

    /// Byte-wise XOR into a new buffer.
    pub fn xor(&self, rhs: &ByteBuffer) -> Result<ByteBuffer> {
        self.combine(rhs, |a, b| a ^ b)
    }

    /// Byte-wise AND in place. `self` is untouched on error.
    pub fn and_assign(&mut self, rhs: &ByteBuffer) -> Result<&mut Self> {
        self.combine_in_place(rhs, |a, b| *a &= b)
    }

    /// Byte-wise OR in place. `self` is untouched on error.
    pub fn or_assign(&mut self, rhs: &ByteBuffer) -> Result<&mut Self> {
        self.combine_in_place(rhs, |a, b| *a |= b)
    }

    /// Byte-wise XOR in place. `self` is untouched on error.
    pub fn xor_assign(&mut self, rhs: &ByteBuffer) -> Result<&mut Self> {
        self.combine_in_place(rhs, |a, b| *a ^= b)
    }
}
