//! Envelope opening by trial decryption.
//!
//! A viewer does not know which slot is theirs, so [`resolve_slot`] tries the
//! viewer's unwrap key against every slot position up to `max`. The scan
//! always runs to the end of the reachable positions, even after a slot
//! opens, so the amount of work does not depend on where the viewer's slot
//! sits. The first slot that opens wins.
//!
//! Every failure (not a recipient, `max` mismatch, corrupted or truncated
//! envelope) returns `None`.

use subtle::{Choice, ConditionallySelectable};
use tracing::trace;
use zeroize::{Zeroize, Zeroizing};

use crate::core::capacity::Capacity;
use crate::core::layout::{
    body_offset, slot_range, EPHEMERAL_PK_SIZE, HEADER_SIZE, KEY_SIZE, MIN_ENVELOPE_SIZE,
    NONCE_SIZE, SLOT_PLAINTEXT_SIZE,
};
use crate::core::suite::Suite;
use crate::core::types::{GroupKey, KeyMaterial, SecretKey, SlotKey};

/// Decrypts an envelope with an X25519 secret key.
///
/// Returns `None` if the key does not open any slot or the envelope fails
/// authentication.
pub fn decrypt<S: Suite>(envelope: &[u8], secret_key: &SecretKey, capacity: Capacity) -> Option<Vec<u8>> {
    let slot_key = resolve_slot::<S>(envelope, KeyMaterial::Secret(secret_key), capacity)?;
    unseal_body::<S>(envelope, &slot_key)
}

/// Decrypts an envelope with a pre-shared group key.
///
/// Returns `None` if the key does not open any slot or the envelope fails
/// authentication.
pub fn decrypt_symmetric<S: Suite>(
    envelope: &[u8],
    group_key: &GroupKey,
    capacity: Capacity,
) -> Option<Vec<u8>> {
    let slot_key = resolve_slot::<S>(envelope, KeyMaterial::Group(group_key), capacity)?;
    unseal_body::<S>(envelope, &slot_key)
}

/// Finds the slot `key` opens and returns its `(count, session_key)`.
///
/// This is a membership test that never touches the body. A resolved slot
/// whose count exceeds `capacity`, or whose position is not below its own
/// count, is rejected: an honest builder never produces either.
///
/// # Example
///
/// ```rust
/// use multibox::{encrypt_mixed, resolve_slot, unseal_body, Capacity, GroupKey, KeyMaterial, Salsa};
///
/// let group = GroupKey::generate()?;
/// let envelope = encrypt_mixed::<Salsa>(b"minutes", &[], &[group.clone()], Capacity::DEFAULT)?;
///
/// let slot_key = resolve_slot::<Salsa>(&envelope, KeyMaterial::Group(&group), Capacity::DEFAULT);
/// assert_eq!(slot_key.as_ref().map(|k| k.count()), Some(1));
///
/// let body = slot_key.and_then(|k| unseal_body::<Salsa>(&envelope, &k));
/// assert_eq!(body.as_deref(), Some(&b"minutes"[..]));
/// # Ok::<(), multibox::MultiboxError>(())
/// ```
pub fn resolve_slot<S: Suite>(
    envelope: &[u8],
    key: KeyMaterial<'_>,
    capacity: Capacity,
) -> Option<SlotKey> {
    let resolved = parse_header(envelope).and_then(|(nonce, ephemeral_pk)| {
        let unwrap_key = derive_unwrap_key(key, &ephemeral_pk)?;
        scan_slots(envelope, capacity, |slot| S::open(&unwrap_key, &nonce, slot))
    });

    if resolved.is_none() {
        trace!(suite = S::NAME, "no slot resolved");
    }

    resolved
}

/// Decrypts the body of an envelope with an already resolved slot.
///
/// Returns `None` if the body fails authentication.
pub fn unseal_body<S: Suite>(envelope: &[u8], slot_key: &SlotKey) -> Option<Vec<u8>> {
    let (nonce, _) = parse_header(envelope)?;
    let body = envelope.get(body_offset(usize::from(slot_key.count()))..)?;
    S::open(slot_key.session_key(), &nonce, body)
}

fn parse_header(envelope: &[u8]) -> Option<([u8; NONCE_SIZE], [u8; EPHEMERAL_PK_SIZE])> {
    if envelope.len() < MIN_ENVELOPE_SIZE {
        return None;
    }
    let nonce = envelope.get(..NONCE_SIZE)?.try_into().ok()?;
    let ephemeral_pk = envelope.get(NONCE_SIZE..HEADER_SIZE)?.try_into().ok()?;
    Some((nonce, ephemeral_pk))
}

/// Derives the key that unwraps this viewer's slot.
fn derive_unwrap_key(
    key: KeyMaterial<'_>,
    ephemeral_pk: &[u8; EPHEMERAL_PK_SIZE],
) -> Option<Zeroizing<[u8; KEY_SIZE]>> {
    match key {
        KeyMaterial::Secret(secret_key) => {
            let ephemeral_public = x25519_dalek::PublicKey::from(*ephemeral_pk);
            let shared_secret = secret_key.to_x25519().diffie_hellman(&ephemeral_public);
            // An all-zero shared secret means a low-order ephemeral key.
            shared_secret
                .was_contributory()
                .then(|| Zeroizing::new(*shared_secret.as_bytes()))
        }
        KeyMaterial::Group(group_key) => Some(Zeroizing::new(*group_key.as_bytes())),
    }
}

/// Probes every slot position in `0..=max` that fits before the body tag.
///
/// `probe` returns the opened slot plaintext, if any. The first success is
/// kept with constant-time selection and later successes are ignored.
fn scan_slots<F>(envelope: &[u8], capacity: Capacity, mut probe: F) -> Option<SlotKey>
where
    F: FnMut(&[u8]) -> Option<Vec<u8>>,
{
    let mut found = Choice::from(0);
    let mut index = 0u8;
    let mut plaintext = Zeroizing::new([0u8; SLOT_PLAINTEXT_SIZE]);

    for i in 0..=capacity.get() {
        let Some(range) = slot_range(usize::from(i), envelope.len()) else {
            break;
        };

        let mut candidate = Zeroizing::new([0u8; SLOT_PLAINTEXT_SIZE]);
        let mut opened = Choice::from(0);
        if let Some(mut bytes) = probe(&envelope[range]) {
            if bytes.len() == SLOT_PLAINTEXT_SIZE {
                candidate.copy_from_slice(&bytes);
                opened = Choice::from(1);
            }
            bytes.zeroize();
        }

        let take = opened & !found;
        for (dst, src) in plaintext.iter_mut().zip(candidate.iter()) {
            dst.conditional_assign(src, take);
        }
        index.conditional_assign(&i, take);
        found |= opened;
    }

    if !bool::from(found) {
        return None;
    }

    let slot_key = SlotKey::from_plaintext(&plaintext);
    if slot_key.count() > capacity.get() || index >= slot_key.count() {
        return None;
    }
    Some(slot_key)
}
