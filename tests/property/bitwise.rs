//! Property tests for bitwise set operations.
//!
//! Identities only hold for equal-length operands; anything else must be a
//! `LengthMismatch`, never a silently truncated result.

use bytescope::{ByteBuffer, BytesError};
use proptest::prelude::*;

use crate::common::{buffer_strategy, equal_length_pair, unequal_length_pair};

proptest! {
    #[test]
    fn prop_idempotent(x in buffer_strategy(64)) {
        prop_assert_eq!(x.and(&x).unwrap(), x.clone());
        prop_assert_eq!(x.or(&x).unwrap(), x.clone());
    }

    #[test]
    fn prop_xor_self_is_zero(x in buffer_strategy(64)) {
        prop_assert_eq!(x.xor(&x).unwrap(), ByteBuffer::zeroed(x.len()));
    }

    #[test]
    fn prop_zero_identities(x in buffer_strategy(64)) {
        let zero = ByteBuffer::zeroed(x.len());
        prop_assert_eq!(x.and(&zero).unwrap(), zero.clone());
        prop_assert_eq!(x.or(&zero).unwrap(), x.clone());
    }

    #[test]
    fn prop_in_place_matches_allocating((a, b) in equal_length_pair()) {
        let mut and = a.clone();
        and.and_assign(&b).unwrap();
        prop_assert_eq!(and, a.and(&b).unwrap());

        let mut or = a.clone();
        or.or_assign(&b).unwrap();
        prop_assert_eq!(or, a.or(&b).unwrap());

        let mut xor = a.clone();
        xor.xor_assign(&b).unwrap();
        prop_assert_eq!(xor, a.xor(&b).unwrap());
    }

    #[test]
    fn prop_commutative((a, b) in equal_length_pair()) {
        prop_assert_eq!(a.and(&b).unwrap(), b.and(&a).unwrap());
        prop_assert_eq!(a.or(&b).unwrap(), b.or(&a).unwrap());
        prop_assert_eq!(a.xor(&b).unwrap(), b.xor(&a).unwrap());
    }

    #[test]
    fn prop_unequal_lengths_fail((a, b) in unequal_length_pair()) {
        let expected = BytesError::LengthMismatch { left: a.len(), right: b.len() };
        prop_assert_eq!(a.and(&b), Err(expected.clone()));
        prop_assert_eq!(a.or(&b), Err(expected.clone()));
        prop_assert_eq!(a.xor(&b), Err(expected));

        let mut m = a.clone();
        prop_assert!(m.xor_assign(&b).is_err());
        prop_assert_eq!(m, a);
    }
}
