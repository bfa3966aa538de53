//! Tests for ByteBuffer construction, structure, bitwise ops and rendering.

use bytescope::{ByteBuffer, BytesError, HexFault, TextEncoding};

use crate::common::{all_byte_values, greeting_with_tail};

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn test_hex_decode_is_case_insensitive() {
    let upper = ByteBuffer::from_hex("DEADBEEF").unwrap();
    let lower = ByteBuffer::from_hex("deadbeef").unwrap();
    let mixed = ByteBuffer::from_hex("dEaDbEeF").unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper, mixed);
    assert_eq!(upper.as_slice(), &[0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn test_hex_decode_odd_length_fails() {
    assert!(matches!(
        ByteBuffer::from_hex("0A1"),
        Err(BytesError::MalformedHex {
            fault: HexFault::OddLength,
            ..
        })
    ));
}

#[test]
fn test_hex_decode_invalid_digit_fails() {
    assert!(matches!(
        ByteBuffer::from_hex("0A1G"),
        Err(BytesError::MalformedHex {
            fault: HexFault::InvalidDigit('G'),
            ..
        })
    ));
}

#[test]
fn test_hex_decode_rejects_non_ascii() {
    assert!(matches!(
        ByteBuffer::from_hex("0Aé1"),
        Err(BytesError::MalformedHex {
            position: 2,
            fault: HexFault::InvalidDigit('é')
        })
    ));
}

#[test]
fn test_lenient_decode_of_dump_row() {
    let row = "48 65 6c 6C 6F";
    assert!(ByteBuffer::from_hex(row).is_err());
    assert_eq!(
        ByteBuffer::parse(row, TextEncoding::HexLenient)
            .unwrap()
            .as_slice(),
        b"Hello"
    );
}

#[test]
fn test_construct_from_list_of_buffers() {
    let a = ByteBuffer::from_hex("0102").unwrap();
    let b = ByteBuffer::from_raw("AB");
    let c = ByteBuffer::new();
    let all = ByteBuffer::from_parts(&[a.clone(), b.clone(), c]);
    assert_eq!(all.len(), a.len() + b.len());
    assert_eq!(all.to_hex(), "01024142");

    // Slices work as parts too
    let raw: [&[u8]; 2] = [&[1], &[2, 3]];
    assert_eq!(ByteBuffer::from_parts(&raw).as_slice(), &[1, 2, 3]);
}

#[test]
fn test_filled_and_zeroed() {
    assert_eq!(ByteBuffer::filled(0x7F, 3).as_slice(), &[0x7F; 3]);
    assert_eq!(ByteBuffer::zeroed(2).as_slice(), &[0, 0]);
    assert!(ByteBuffer::zeroed(0).is_empty());
}

// ============================================================================
// INDEXING
// ============================================================================

#[test]
fn test_index_and_get() {
    let mut buf = ByteBuffer::from([1, 2, 3]);
    assert_eq!(buf[0], 1);
    assert_eq!(buf.get(2), Some(3));
    assert_eq!(buf.get(3), None);
    buf[1] = 9;
    assert_eq!(buf.as_slice(), &[1, 9, 3]);
    assert_eq!(buf.first(), Some(1));
    assert_eq!(buf.last(), Some(3));
}

#[test]
#[should_panic]
fn test_index_out_of_range_panics() {
    let buf = ByteBuffer::from([1, 2, 3]);
    let _ = buf[3];
}

// ============================================================================
// STRUCTURE
// ============================================================================

#[test]
fn test_slice_left_right() {
    let buf = all_byte_values();
    assert_eq!(buf.slice(16, 2).unwrap().to_hex(), "1011");
    assert_eq!(buf.left(3).unwrap().to_hex(), "000102");
    assert_eq!(buf.right(2).unwrap().to_hex(), "FEFF");
    assert_eq!(buf.slice(0, buf.len()).unwrap(), buf);
}

#[test]
fn test_slice_out_of_range() {
    let buf = ByteBuffer::from([1, 2, 3]);
    assert_eq!(
        buf.slice(2, 2),
        Err(BytesError::OutOfRange {
            offset: 2,
            length: 2,
            len: 3
        })
    );
    assert!(buf.left(4).is_err());
    assert!(buf.right(4).is_err());
    assert!(ByteBuffer::new().right(1).is_err());
    assert_eq!(ByteBuffer::new().right(0).unwrap(), ByteBuffer::new());
}

#[test]
fn test_concat_and_join() {
    let a = ByteBuffer::from_hex("AA").unwrap();
    let b = ByteBuffer::from_hex("BBCC").unwrap();

    let c = &a + &b;
    assert_eq!(c.to_hex(), "AABBCC");
    assert_eq!(a.to_hex(), "AA");

    let mut d = a.clone();
    d.join(&b).join(&a);
    assert_eq!(d.to_hex(), "AABBCCAA");
}

// ============================================================================
// BITWISE
// ============================================================================

#[test]
fn test_xor_with_key() {
    let plain = ByteBuffer::from_raw("secret");
    let key = ByteBuffer::filled(0x5A, plain.len());
    let cipher = plain.xor(&key).unwrap();
    assert_ne!(cipher, plain);
    assert_eq!(cipher.xor(&key).unwrap(), plain);
}

#[test]
fn test_bitwise_length_mismatch_never_truncates() {
    let mut a = ByteBuffer::from([0xFF, 0xFF]);
    let b = ByteBuffer::from([0x0F]);
    assert_eq!(
        a.and(&b),
        Err(BytesError::LengthMismatch { left: 2, right: 1 })
    );
    assert_eq!(
        b.or(&a),
        Err(BytesError::LengthMismatch { left: 1, right: 2 })
    );
    assert!(a.and_assign(&b).is_err());
    assert!(a.or_assign(&b).is_err());
    assert_eq!(a.as_slice(), &[0xFF, 0xFF]);
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
fn test_hex_rendering_with_separator() {
    let buf = ByteBuffer::from([0x01, 0xAB, 0x00]);
    assert_eq!(buf.to_hex(), "01AB00");
    assert_eq!(buf.to_hex_with(" "), "01 AB 00");
    assert_eq!(format!("{:x}", buf), "01ab00");
}

#[test]
fn test_dump_layout() {
    let dump = greeting_with_tail().dump();
    let expected = concat!(
        "      00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F  ASCII\n",
        "0000  48 65 6C 6C 6F 2C 20 77 6F 72 6C 64 21 0A 00 01  Hello, world!...\n",
        "0010  02 03                                            ..\n",
    );
    assert_eq!(dump, expected);
}

#[test]
fn test_dump_line_count() {
    let buf = all_byte_values();
    assert_eq!(buf.dump().lines().count(), 256 / 16 + 1);
    assert!(buf.dump().contains("00F0  F0 F1"));
}

#[test]
fn test_display_threshold() {
    let short = ByteBuffer::from_raw("0123456789ABCDEF");
    assert_eq!(short.to_string(), short.to_hex());

    let long = greeting_with_tail();
    assert_eq!(long.to_string(), long.dump());
}

#[test]
fn test_ascii_predicates() {
    assert!(ByteBuffer::from_raw("plain text").all_ascii());
    assert!(!greeting_with_tail().all_ascii());
    assert_eq!(greeting_with_tail().as_ascii_str(), None);
}
