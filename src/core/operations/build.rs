//! Envelope construction.
//!
//! One random session key seals the body. Every recipient gets a slot that
//! seals the same `count || session_key` plaintext under that recipient's
//! unwrap key:
//!
//! - asymmetric recipients: the X25519 shared secret between a one-time
//!   ephemeral key and the recipient's public key
//! - group recipients: the group key itself
//!
//! Slots are written in the order the caller lists recipients, public keys
//! first, then group keys.

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::capacity::Capacity;
use crate::core::error::{MultiboxError, MultiboxResult};
use crate::core::layout::{envelope_len, KEY_SIZE, NONCE_SIZE, SLOT_PLAINTEXT_SIZE};
use crate::core::operations::random::{generate_x25519, random_bytes};
use crate::core::suite::Suite;
use crate::core::types::{GroupKey, PublicKey, SlotKey};

/// Encrypts `message` for a set of X25519 public keys.
///
/// # Errors
///
/// Returns `MultiboxError::CapacityExceeded` if there are more recipients
/// than `capacity` allows, `MultiboxError::InvalidKey` if a recipient key is
/// a low-order point, or `MultiboxError::CryptoError` if the random source
/// fails.
///
/// # Example
///
/// ```rust
/// use multibox::{decrypt, encrypt, Capacity, Keypair, Salsa};
///
/// let alice = Keypair::generate()?;
/// let bob = Keypair::generate()?;
/// let recipients = [*alice.public_key(), *bob.public_key()];
///
/// let envelope = encrypt::<Salsa>(b"hello there!", &recipients, Capacity::DEFAULT)?;
/// assert_eq!(envelope.len(), 182);
///
/// let opened = decrypt::<Salsa>(&envelope, bob.secret_key(), Capacity::DEFAULT);
/// assert_eq!(opened.as_deref(), Some(&b"hello there!"[..]));
/// # Ok::<(), multibox::MultiboxError>(())
/// ```
pub fn encrypt<S: Suite>(
    message: &[u8],
    recipients: &[PublicKey],
    capacity: Capacity,
) -> MultiboxResult<Vec<u8>> {
    encrypt_mixed::<S>(message, recipients, &[], capacity)
}

/// Encrypts `message` for X25519 public keys and pre-shared group keys at once.
///
/// The combined number of recipients counts against `capacity`.
///
/// # Errors
///
/// Same as [`encrypt`].
pub fn encrypt_mixed<S: Suite>(
    message: &[u8],
    recipients: &[PublicKey],
    group_keys: &[GroupKey],
    capacity: Capacity,
) -> MultiboxResult<Vec<u8>> {
    let count = recipient_count(recipients.len().saturating_add(group_keys.len()), capacity)?;

    let nonce = random_bytes::<NONCE_SIZE>()?;
    let slot_key = SlotKey::new(count, random_bytes::<KEY_SIZE>()?);
    let (ephemeral_secret, ephemeral_pk) = generate_x25519()?;

    debug!(
        suite = S::NAME,
        public_keys = recipients.len(),
        group_keys = group_keys.len(),
        max = capacity.get(),
        "sealing envelope"
    );

    let plaintext = Zeroizing::new(slot_key.to_plaintext());
    let mut envelope = start_envelope(&nonce, ephemeral_pk.as_bytes(), count, message.len());

    for recipient in recipients {
        let shared_secret = ephemeral_secret.diffie_hellman(&recipient.to_x25519());
        if !shared_secret.was_contributory() {
            return Err(MultiboxError::InvalidKey);
        }
        seal_slot::<S>(&mut envelope, shared_secret.as_bytes(), &nonce, &plaintext)?;
    }

    seal_group_slots::<S>(&mut envelope, group_keys, &nonce, &plaintext)?;
    envelope.extend_from_slice(&S::seal(slot_key.session_key(), &nonce, message)?);

    Ok(envelope)
}

/// Encrypts `message` for group keys only, with a caller-chosen nonce and
/// ephemeral public key.
///
/// No key exchange takes place, so `ephemeral_pk` only fills its field of the
/// layout; callers can place any 32 bytes there. The nonce must never be
/// reused with the same group key.
///
/// # Errors
///
/// Returns `MultiboxError::CapacityExceeded` if there are more keys than
/// `capacity` allows, or `MultiboxError::CryptoError` if the random source
/// fails.
pub fn encrypt_symmetric<S: Suite>(
    message: &[u8],
    nonce: &[u8; NONCE_SIZE],
    ephemeral_pk: &PublicKey,
    keys: &[GroupKey],
    capacity: Capacity,
) -> MultiboxResult<Vec<u8>> {
    let count = recipient_count(keys.len(), capacity)?;
    let slot_key = SlotKey::new(count, random_bytes::<KEY_SIZE>()?);

    debug!(
        suite = S::NAME,
        group_keys = keys.len(),
        max = capacity.get(),
        "sealing symmetric envelope"
    );

    let plaintext = Zeroizing::new(slot_key.to_plaintext());
    let mut envelope = start_envelope(nonce, ephemeral_pk.as_bytes(), count, message.len());

    seal_group_slots::<S>(&mut envelope, keys, nonce, &plaintext)?;
    envelope.extend_from_slice(&S::seal(slot_key.session_key(), nonce, message)?);

    Ok(envelope)
}

/// Validates the total recipient count against `capacity`.
fn recipient_count(count: usize, capacity: Capacity) -> MultiboxResult<u8> {
    capacity.check(count)?;
    u8::try_from(count).map_err(|_| MultiboxError::CapacityExceeded {
        count,
        max: capacity.get(),
    })
}

fn start_envelope(
    nonce: &[u8; NONCE_SIZE],
    ephemeral_pk: &[u8; 32],
    count: u8,
    message_len: usize,
) -> Vec<u8> {
    let mut envelope = Vec::with_capacity(envelope_len(usize::from(count), message_len));
    envelope.extend_from_slice(nonce);
    envelope.extend_from_slice(ephemeral_pk);
    envelope
}

fn seal_group_slots<S: Suite>(
    envelope: &mut Vec<u8>,
    group_keys: &[GroupKey],
    nonce: &[u8; NONCE_SIZE],
    plaintext: &[u8; SLOT_PLAINTEXT_SIZE],
) -> MultiboxResult<()> {
    for group_key in group_keys {
        seal_slot::<S>(envelope, group_key.as_bytes(), nonce, plaintext)?;
    }
    Ok(())
}

fn seal_slot<S: Suite>(
    envelope: &mut Vec<u8>,
    unwrap_key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    plaintext: &[u8; SLOT_PLAINTEXT_SIZE],
) -> MultiboxResult<()> {
    envelope.extend_from_slice(&S::seal(unwrap_key, nonce, plaintext)?);
    Ok(())
}
