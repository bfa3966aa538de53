// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for strict and lenient hex decoding.
//!
//! Arbitrary text goes into both decoders. Neither may panic, and any buffer
//! that decodes must re-render to text that decodes back to the same bytes.

#![no_main]

use bytescope::ByteBuffer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    if let Ok(buf) = ByteBuffer::from_hex(text) {
        // Strict success means every character was a digit
        assert_eq!(buf.len() * 2, text.chars().count());
        assert_eq!(ByteBuffer::from_hex(&buf.to_hex()).unwrap(), buf);
        assert_eq!(buf.to_hex(), text.to_ascii_uppercase());
    }

    if let Ok(buf) = ByteBuffer::from_hex_lenient(text) {
        let rendered = buf.to_hex_with(" ");
        assert_eq!(ByteBuffer::from_hex_lenient(&rendered).unwrap(), buf);
    }
});
