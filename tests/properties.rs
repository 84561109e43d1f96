//! Property-based tests for envelope invariants.
//!
//! - Every recipient recovers the message; outsiders get nothing
//! - Envelope length is `56 + 49 * recipients + message + 16`
//! - Any single bit flip makes a single-recipient envelope unreadable
//! - `max` outside `1..=255` never reaches the envelope functions

#![cfg(feature = "xsalsa")]
// Test code legitimately uses panic patterns for test failure reporting
#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

use proptest::prelude::*;

use multibox::{
    decrypt, decrypt_symmetric, encrypt, encrypt_symmetric, envelope_len, Capacity, GroupKey,
    Keypair, MultiboxError, PublicKey, Salsa,
};

fn keypairs(n: usize) -> Vec<Keypair> {
    (0..n).map(|_| Keypair::generate().unwrap()).collect()
}

fn public_keys(keypairs: &[Keypair]) -> Vec<PublicKey> {
    keypairs.iter().map(|k| *k.public_key()).collect()
}

// ==================== Recipient Property Tests ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every listed recipient opens the envelope to the original message.
    #[test]
    fn every_recipient_opens(
        message in prop::collection::vec(any::<u8>(), 0..512),
        n in 1usize..=7,
    ) {
        let keypairs = keypairs(n);
        let envelope = encrypt::<Salsa>(&message, &public_keys(&keypairs), Capacity::DEFAULT).unwrap();

        for keypair in &keypairs {
            let opened = decrypt::<Salsa>(&envelope, keypair.secret_key(), Capacity::DEFAULT);
            prop_assert_eq!(opened.as_deref(), Some(message.as_slice()));
        }
    }

    /// A key that was not listed opens nothing.
    #[test]
    fn outsider_opens_nothing(
        message in prop::collection::vec(any::<u8>(), 0..256),
        n in 0usize..=7,
    ) {
        let envelope = encrypt::<Salsa>(&message, &public_keys(&keypairs(n)), Capacity::DEFAULT).unwrap();
        let outsider = Keypair::generate().unwrap();
        prop_assert_eq!(decrypt::<Salsa>(&envelope, outsider.secret_key(), Capacity::DEFAULT), None);
    }

    /// Group recipients open a symmetric envelope whose header is exactly
    /// what the caller supplied.
    #[test]
    fn symmetric_header_is_caller_supplied(
        message in prop::collection::vec(any::<u8>(), 0..256),
        nonce in any::<[u8; 24]>(),
        ephemeral_pk in any::<[u8; 32]>(),
        n in 1usize..=7,
    ) {
        let keys: Vec<GroupKey> = (0..n).map(|_| GroupKey::generate().unwrap()).collect();
        let envelope = encrypt_symmetric::<Salsa>(
            &message,
            &nonce,
            &PublicKey::from(ephemeral_pk),
            &keys,
            Capacity::DEFAULT,
        ).unwrap();

        prop_assert_eq!(&envelope[..24], &nonce[..]);
        prop_assert_eq!(&envelope[24..56], &ephemeral_pk[..]);
        for key in &keys {
            let opened = decrypt_symmetric::<Salsa>(&envelope, key, Capacity::DEFAULT);
            prop_assert_eq!(opened.as_deref(), Some(message.as_slice()));
        }
    }

    /// Bytes that were never sealed never open.
    #[test]
    fn arbitrary_bytes_never_open(bytes in prop::collection::vec(any::<u8>(), 0..600)) {
        let keypair = Keypair::generate().unwrap();
        let group_key = GroupKey::generate().unwrap();
        prop_assert_eq!(decrypt::<Salsa>(&bytes, keypair.secret_key(), Capacity::MAX), None);
        prop_assert_eq!(decrypt_symmetric::<Salsa>(&bytes, &group_key, Capacity::MAX), None);
    }
}

// ==================== Layout Property Tests ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Length follows the layout for every recipient count up to the limit.
    #[test]
    fn length_follows_layout(
        k in prop::sample::select(vec![0usize, 1, 7, 128, 255]),
        message_len in 0usize..128,
    ) {
        let keys: Vec<GroupKey> = (0..k).map(|_| GroupKey::generate().unwrap()).collect();
        let message = vec![0x5a; message_len];
        let envelope = encrypt_symmetric::<Salsa>(
            &message,
            &[1u8; 24],
            &PublicKey::from([2u8; 32]),
            &keys,
            Capacity::MAX,
        ).unwrap();

        prop_assert_eq!(envelope.len(), 56 + 49 * k + message_len + 16);
        prop_assert_eq!(envelope.len(), envelope_len(k, message_len));
    }

    /// Flipping any bit of a single-recipient envelope makes it unreadable.
    #[test]
    fn single_bit_flip_is_detected(
        message in prop::collection::vec(any::<u8>(), 0..64),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let keypair = Keypair::generate().unwrap();
        let mut envelope = encrypt::<Salsa>(&message, &[*keypair.public_key()], Capacity::DEFAULT).unwrap();

        let i = position.index(envelope.len());
        envelope[i] ^= 1 << bit;
        prop_assert_eq!(decrypt::<Salsa>(&envelope, keypair.secret_key(), Capacity::DEFAULT), None);
    }
}

// ==================== Capacity Property Tests ====================

proptest! {
    /// `Capacity::new` accepts exactly `1..=255`.
    #[test]
    fn capacity_accepts_exactly_one_to_255(max in any::<i64>()) {
        match Capacity::new(max) {
            Ok(capacity) => {
                prop_assert!((1..=255).contains(&max));
                prop_assert_eq!(i64::from(capacity.get()), max);
            }
            Err(MultiboxError::InvalidConfig { max: rejected }) => {
                prop_assert!(!(1..=255).contains(&max));
                prop_assert_eq!(rejected, max);
            }
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }

    /// Counts above the limit are refused before anything is sealed.
    #[test]
    fn counts_above_limit_are_refused(max in 1i64..=16, extra in 1usize..4) {
        let capacity = Capacity::new(max).unwrap();
        let count = usize::from(capacity.get()) + extra;
        let keys: Vec<GroupKey> = (0..count).map(|_| GroupKey::generate().unwrap()).collect();

        let result = encrypt_symmetric::<Salsa>(b"x", &[0u8; 24], &PublicKey::from([0u8; 32]), &keys, capacity);
        let refused = matches!(
            result,
            Err(MultiboxError::CapacityExceeded { count: c, max: m }) if c == count && m == capacity.get()
        );
        prop_assert!(refused);
    }
}
