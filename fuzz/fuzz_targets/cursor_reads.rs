// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for cursor reads.
//!
//! An arbitrary buffer and an arbitrary sequence of reads. Reads may fail
//! with EndOfBuffer but must never panic, and the position must never move
//! backwards.

#![no_main]

use arbitrary::Arbitrary;
use bytescope::{ByteBuffer, ByteCursor, Endian};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    U8,
    I8,
    U16(bool),
    I16(bool),
    U32(bool),
    I32(bool),
    Bytes(u16),
}

#[derive(Debug, Arbitrary)]
struct Input {
    data: Vec<u8>,
    ops: Vec<Op>,
}

fn endian(big: bool) -> Endian {
    if big {
        Endian::Big
    } else {
        Endian::Little
    }
}

fuzz_target!(|input: Input| {
    let buf = ByteBuffer::from(input.data);
    let mut cursor = ByteCursor::new(&buf);

    for op in input.ops {
        let before = cursor.position();
        let was_at_end = cursor.at_end();
        let ok = match op {
            Op::U8 => cursor.next_u8().is_ok(),
            Op::I8 => cursor.next_i8().is_ok(),
            Op::U16(big) => cursor.next_u16(endian(big)).is_ok(),
            Op::I16(big) => cursor.next_i16(endian(big)).is_ok(),
            Op::U32(big) => cursor.next_u32(endian(big)).is_ok(),
            Op::I32(big) => cursor.next_i32(endian(big)).is_ok(),
            Op::Bytes(n) => cursor.next_bytes(n as usize).is_ok(),
        };

        assert!(cursor.position() >= before);
        if was_at_end {
            assert!(!ok, "read succeeded on an exhausted cursor");
            assert_eq!(cursor.position(), before);
        }
    }
});
