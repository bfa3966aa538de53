// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for buffer and cursor invariants.
//!
//! These are debug-mode assertions:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure detection** during development and fuzzing
//!
//! The public operations already return errors for caller mistakes. The
//! checks here guard the implementation itself: if one of them fires, the
//! bug is in this crate, not in the caller.
//!
//! | Contract                      | Invariant                                   |
//! |-------------------------------|---------------------------------------------|
//! | `check_hex_rendering`         | two digits per byte plus separators         |
//! | `check_bitwise_operands`      | bitwise operands have equal length          |
//! | `check_cursor_advance`        | cursor position never moves backwards       |
//! | `check_slice_bounds`          | slice range lies inside the buffer          |

/// Check that a hex rendering has exactly two digits per byte, plus one
/// separator between each pair.
#[inline]
pub fn check_hex_rendering(byte_len: usize, separator_len: usize, rendered: &str) {
    let expected = byte_len * 2 + byte_len.saturating_sub(1) * separator_len;
    debug_assert_eq!(
        rendered.len(),
        expected,
        "Contract violation: hex rendering of {} bytes has length {}, expected {}",
        byte_len,
        rendered.len(),
        expected
    );
}

/// Check that both operands of a bitwise combination have equal length.
#[inline]
pub fn check_bitwise_operands(left: &[u8], right: &[u8]) {
    debug_assert_eq!(
        left.len(),
        right.len(),
        "Contract violation: bitwise operands of length {} and {}",
        left.len(),
        right.len()
    );
}

/// Check that a cursor read did not move the position backwards.
#[inline]
pub fn check_cursor_advance(before: usize, after: usize) {
    debug_assert!(
        after >= before,
        "Contract violation: cursor moved backwards from {} to {}",
        before,
        after
    );
}

/// Check that `[offset, offset + length)` lies inside a buffer of `len` bytes.
#[inline]
pub fn check_slice_bounds(offset: usize, length: usize, len: usize) {
    debug_assert!(
        offset.checked_add(length).is_some_and(|end| end <= len),
        "Contract violation: slice {}+{} outside buffer of {} bytes",
        offset,
        length,
        len
    );
}
