//! Property tests for cursor reads.
//!
//! Verifies:
//! 1. Exactly N successful `next_u8` calls over N bytes
//! 2. Position never decreases, whatever the read sequence
//! 3. Multi-byte reads agree with the standard library's byte order helpers
//! 4. `next_bytes` clips rather than failing while the cursor is readable

use bytescope::{ByteBuffer, ByteCursor, BytesError, Endian};
use proptest::prelude::*;

use crate::common::buffer_strategy;

#[derive(Debug, Clone, Copy)]
enum Read {
    U8,
    I16(Endian),
    U32(Endian),
    Bytes(usize),
}

fn endian_strategy() -> impl Strategy<Value = Endian> {
    prop_oneof![Just(Endian::Big), Just(Endian::Little)]
}

fn read_strategy() -> impl Strategy<Value = Read> {
    prop_oneof![
        Just(Read::U8),
        endian_strategy().prop_map(Read::I16),
        endian_strategy().prop_map(Read::U32),
        (0usize..12).prop_map(Read::Bytes),
    ]
}

proptest! {
    #[test]
    fn prop_exactly_n_byte_reads(buf in buffer_strategy(64)) {
        let mut cursor = ByteCursor::new(&buf);
        for i in 0..buf.len() {
            prop_assert!(!cursor.at_end());
            prop_assert_eq!(cursor.next_u8().unwrap(), buf[i]);
        }
        prop_assert!(cursor.at_end());
        let is_end = matches!(cursor.next_u8(), Err(BytesError::EndOfBuffer { .. }));
        prop_assert!(is_end);
    }

    #[test]
    fn prop_position_monotonic(
        buf in buffer_strategy(48),
        reads in prop::collection::vec(read_strategy(), 0..24),
    ) {
        let mut cursor = ByteCursor::new(&buf);
        for read in reads {
            let before = cursor.position();
            let _ = match read {
                Read::U8 => cursor.next_u8().map(|_| ()),
                Read::I16(e) => cursor.next_i16(e).map(|_| ()),
                Read::U32(e) => cursor.next_u32(e).map(|_| ()),
                Read::Bytes(n) => cursor.next_bytes(n).map(|_| ()),
            };
            prop_assert!(cursor.position() >= before);
            prop_assert_eq!(cursor.at_end(), cursor.position() >= buf.len());
        }
    }

    #[test]
    fn prop_u16_matches_std(bytes in any::<[u8; 2]>()) {
        let buf = ByteBuffer::from(bytes);
        prop_assert_eq!(ByteCursor::new(&buf).next_u16(Endian::Big).unwrap(), u16::from_be_bytes(bytes));
        prop_assert_eq!(ByteCursor::new(&buf).next_u16(Endian::Little).unwrap(), u16::from_le_bytes(bytes));
        prop_assert_eq!(ByteCursor::new(&buf).next_i16(Endian::Big).unwrap(), i16::from_be_bytes(bytes));
    }

    #[test]
    fn prop_u32_matches_std(bytes in any::<[u8; 4]>()) {
        let buf = ByteBuffer::from(bytes);
        prop_assert_eq!(ByteCursor::new(&buf).next_u32(Endian::Big).unwrap(), u32::from_be_bytes(bytes));
        prop_assert_eq!(ByteCursor::new(&buf).next_u32(Endian::Little).unwrap(), u32::from_le_bytes(bytes));
        prop_assert_eq!(ByteCursor::new(&buf).next_i32(Endian::Little).unwrap(), i32::from_le_bytes(bytes));
    }

    #[test]
    fn prop_next_bytes_clips(buf in buffer_strategy(32), skip in 0usize..32, want in 0usize..64) {
        prop_assume!(skip < buf.len());
        let mut cursor = ByteCursor::new(&buf);
        cursor.next_bytes(skip).unwrap();

        let got = cursor.next_bytes(want).unwrap();
        let available = buf.len() - skip;
        prop_assert_eq!(got.len(), want.min(available));
        prop_assert_eq!(got.as_slice(), &buf.as_slice()[skip..skip + want.min(available)]);
        prop_assert_eq!(cursor.position(), skip + want);
    }
}
