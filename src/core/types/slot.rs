//! Slot contents and the key material that unwraps them.

use core::fmt::{self, Debug};

use zeroize::Zeroize;

use crate::core::layout::{KEY_SIZE, SLOT_PLAINTEXT_SIZE};
use crate::core::types::{GroupKey, SecretKey};

/// A resolved slot: the envelope's recipient count and its session key.
///
/// Every slot of an envelope decrypts to the same `SlotKey`. Resolving it is
/// enough to prove membership; it can be kept and handed to
/// [`unseal_body`](crate::unseal_body) later without probing the slots again.
///
/// # Security
///
/// - The session key is zeroized on drop
/// - Debug output redacts the session key
/// - Equality comparison uses constant-time comparison
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SlotKey {
    count: u8,
    session_key: [u8; KEY_SIZE],
}

impl SlotKey {
    /// Creates a `SlotKey`, e.g. from a cached resolution.
    #[must_use]
    pub const fn new(count: u8, session_key: [u8; KEY_SIZE]) -> Self {
        Self { count, session_key }
    }

    /// Returns the number of recipients the envelope was built for.
    #[must_use]
    pub const fn count(&self) -> u8 {
        self.count
    }

    /// Returns the session key that seals the body.
    #[must_use]
    pub const fn session_key(&self) -> &[u8; KEY_SIZE] {
        &self.session_key
    }

    /// Encodes the slot plaintext: `count || session_key`.
    pub(crate) fn to_plaintext(&self) -> [u8; SLOT_PLAINTEXT_SIZE] {
        let mut plaintext = [0u8; SLOT_PLAINTEXT_SIZE];
        plaintext[0] = self.count;
        plaintext[1..].copy_from_slice(&self.session_key);
        plaintext
    }

    pub(crate) fn from_plaintext(plaintext: &[u8; SLOT_PLAINTEXT_SIZE]) -> Self {
        let mut session_key = [0u8; KEY_SIZE];
        session_key.copy_from_slice(&plaintext[1..]);
        Self::new(plaintext[0], session_key)
    }
}

impl Debug for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotKey")
            .field("count", &self.count)
            .field("session_key", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for SlotKey {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        (self.count.ct_eq(&other.count) & self.session_key.ct_eq(&other.session_key)).into()
    }
}

impl Eq for SlotKey {}

/// The key a viewer holds when probing an envelope's slots.
#[derive(Debug, Clone, Copy)]
pub enum KeyMaterial<'a> {
    /// An X25519 secret key; the unwrap key is its shared secret with the
    /// envelope's ephemeral public key.
    Secret(&'a SecretKey),
    /// A pre-shared group key, used as the unwrap key unchanged.
    Group(&'a GroupKey),
}

impl<'a> From<&'a SecretKey> for KeyMaterial<'a> {
    fn from(key: &'a SecretKey) -> Self {
        Self::Secret(key)
    }
}

impl<'a> From<&'a GroupKey> for KeyMaterial<'a> {
    fn from(key: &'a GroupKey) -> Self {
        Self::Group(key)
    }
}
