//! `Envelope` - an owned multi-recipient envelope.
//!
//! Binary form: `nonce || ephemeral_pk || slots || body` (see
//! [`layout`](crate::core::layout)). Text form: standard base64 of the binary
//! form. Neither carries the suite or the capacity limit; both ends must
//! agree on them.

use core::fmt::{self, Debug, Display};
use core::marker::PhantomData;

use base64::prelude::*;

use crate::core::capacity::Capacity;
use crate::core::error::{MultiboxError, MultiboxResult};
use crate::core::layout::{EPHEMERAL_PK_SIZE, HEADER_SIZE, MIN_ENVELOPE_SIZE, NONCE_SIZE};
use crate::core::operations::{
    decrypt, decrypt_symmetric, encrypt, encrypt_mixed, encrypt_symmetric, resolve_slot,
    unseal_body,
};
use crate::core::suite::Suite;
use crate::core::types::{GroupKey, KeyMaterial, PublicKey, SecretKey, SlotKey};

/// An envelope sealed with suite `S`.
///
/// # Example
///
/// ```rust
/// use multibox::{Capacity, Envelope, GroupKey, Keypair, Salsa};
///
/// let alice = Keypair::generate()?;
/// let team = GroupKey::generate()?;
///
/// let envelope = Envelope::<Salsa>::try_seal_mixed(
///     b"standup moved to 10:00",
///     &[*alice.public_key()],
///     &[team.clone()],
///     Capacity::DEFAULT,
/// )?;
///
/// // Ship it as text and open it on the other side.
/// let received = Envelope::<Salsa>::try_from(envelope.to_string())?;
/// assert!(received.try_open(alice.secret_key(), Capacity::DEFAULT).is_some());
/// assert!(received.try_open_symmetric(&team, Capacity::DEFAULT).is_some());
/// # Ok::<(), multibox::MultiboxError>(())
/// ```
#[derive(Clone)]
pub struct Envelope<S: Suite> {
    nonce: [u8; NONCE_SIZE],
    ephemeral_pk: PublicKey,
    bytes: Vec<u8>,
    _suite: PhantomData<S>,
}

impl<S: Suite> Envelope<S> {
    /// Seals `message` for a set of X25519 public keys.
    ///
    /// # Errors
    ///
    /// See [`encrypt`].
    pub fn try_seal(
        message: &[u8],
        recipients: &[PublicKey],
        capacity: Capacity,
    ) -> MultiboxResult<Self> {
        Self::try_from(encrypt::<S>(message, recipients, capacity)?)
    }

    /// Seals `message` for public keys and group keys together.
    ///
    /// # Errors
    ///
    /// See [`encrypt_mixed`].
    pub fn try_seal_mixed(
        message: &[u8],
        recipients: &[PublicKey],
        group_keys: &[GroupKey],
        capacity: Capacity,
    ) -> MultiboxResult<Self> {
        Self::try_from(encrypt_mixed::<S>(message, recipients, group_keys, capacity)?)
    }

    /// Seals `message` for group keys only, with a caller-chosen nonce and
    /// ephemeral public key.
    ///
    /// # Errors
    ///
    /// See [`encrypt_symmetric`].
    pub fn try_seal_symmetric(
        message: &[u8],
        nonce: &[u8; NONCE_SIZE],
        ephemeral_pk: &PublicKey,
        keys: &[GroupKey],
        capacity: Capacity,
    ) -> MultiboxResult<Self> {
        Self::try_from(encrypt_symmetric::<S>(
            message,
            nonce,
            ephemeral_pk,
            keys,
            capacity,
        )?)
    }

    /// Opens the envelope with an X25519 secret key.
    #[must_use]
    pub fn try_open(&self, secret_key: &SecretKey, capacity: Capacity) -> Option<Vec<u8>> {
        decrypt::<S>(&self.bytes, secret_key, capacity)
    }

    /// Opens the envelope with a group key.
    #[must_use]
    pub fn try_open_symmetric(&self, group_key: &GroupKey, capacity: Capacity) -> Option<Vec<u8>> {
        decrypt_symmetric::<S>(&self.bytes, group_key, capacity)
    }

    /// Resolves the slot `key` opens, without decrypting the body.
    #[must_use]
    pub fn resolve(&self, key: KeyMaterial<'_>, capacity: Capacity) -> Option<SlotKey> {
        resolve_slot::<S>(&self.bytes, key, capacity)
    }

    /// Decrypts the body with a resolved slot.
    #[must_use]
    pub fn unseal(&self, slot_key: &SlotKey) -> Option<Vec<u8>> {
        unseal_body::<S>(&self.bytes, slot_key)
    }

    /// Returns the nonce shared by every slot and the body.
    #[must_use]
    pub const fn nonce(&self) -> &[u8; NONCE_SIZE] {
        &self.nonce
    }

    /// Returns the one-time public key.
    #[must_use]
    pub const fn ephemeral_public_key(&self) -> &PublicKey {
        &self.ephemeral_pk
    }

    /// Returns the binary form.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the envelope and returns the binary form.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl<S: Suite> TryFrom<Vec<u8>> for Envelope<S> {
    type Error = MultiboxError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        if bytes.len() < MIN_ENVELOPE_SIZE {
            return Err(MultiboxError::InvalidFormat);
        }

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&bytes[..NONCE_SIZE]);
        let mut ephemeral_pk = [0u8; EPHEMERAL_PK_SIZE];
        ephemeral_pk.copy_from_slice(&bytes[NONCE_SIZE..HEADER_SIZE]);

        Ok(Self {
            nonce,
            ephemeral_pk: PublicKey::from(ephemeral_pk),
            bytes,
            _suite: PhantomData,
        })
    }
}

impl<S: Suite> TryFrom<&[u8]> for Envelope<S> {
    type Error = MultiboxError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from(bytes.to_vec())
    }
}

impl<S: Suite> AsRef<[u8]> for Envelope<S> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<S: Suite> Display for Envelope<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BASE64_STANDARD.encode(&self.bytes))
    }
}

impl<S: Suite> Debug for Envelope<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("suite", &S::NAME)
            .field("ephemeral_pk", &self.ephemeral_pk)
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

impl<S: Suite> TryFrom<&str> for Envelope<S> {
    type Error = MultiboxError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        Self::try_from(BASE64_STANDARD.decode(encoded)?)
    }
}

impl<S: Suite> TryFrom<String> for Envelope<S> {
    type Error = MultiboxError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        Self::try_from(encoded.as_str())
    }
}

impl<S: Suite> PartialEq for Envelope<S> {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl<S: Suite> Eq for Envelope<S> {}
