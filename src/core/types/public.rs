//! `PublicKey` - X25519 recipient public key.
//!
//! Text form: standard base64 of the 32 key bytes.

use core::fmt::{self, Debug, Display};

use base64::prelude::*;

use crate::core::error::MultiboxError;

/// An X25519 public key identifying an asymmetric recipient.
///
/// # Example
///
/// ```rust
/// use multibox::{Keypair, PublicKey};
///
/// let keypair = Keypair::generate()?;
/// let text = keypair.public_key().to_string();
/// let parsed = PublicKey::try_from(text.as_str())?;
/// assert_eq!(&parsed, keypair.public_key());
/// # Ok::<(), multibox::MultiboxError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey {
    key: [u8; 32],
}

impl PublicKey {
    /// Creates a new `PublicKey` from raw key bytes.
    #[must_use]
    pub const fn new(key: [u8; 32]) -> Self {
        Self { key }
    }

    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.key
    }

    pub(crate) fn to_x25519(self) -> x25519_dalek::PublicKey {
        x25519_dalek::PublicKey::from(self.key)
    }
}

impl From<[u8; 32]> for PublicKey {
    fn from(key: [u8; 32]) -> Self {
        Self::new(key)
    }
}

impl From<&[u8; 32]> for PublicKey {
    fn from(key: &[u8; 32]) -> Self {
        Self::new(*key)
    }
}

impl From<x25519_dalek::PublicKey> for PublicKey {
    fn from(key: x25519_dalek::PublicKey) -> Self {
        Self::new(key.to_bytes())
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = MultiboxError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let key: [u8; 32] = bytes.try_into().map_err(|_| MultiboxError::InvalidKey)?;
        Ok(Self::new(key))
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BASE64_STANDARD.encode(self.key))
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey").field(&self.to_string()).finish()
    }
}

impl TryFrom<&str> for PublicKey {
    type Error = MultiboxError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        let bytes = BASE64_STANDARD.decode(encoded)?;
        Self::try_from(bytes.as_slice())
    }
}

impl TryFrom<String> for PublicKey {
    type Error = MultiboxError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        Self::try_from(encoded.as_str())
    }
}
