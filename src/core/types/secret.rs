//! `SecretKey` and `Keypair` - X25519 viewer key material.
//!
//! Text form: standard base64 of the 32 key bytes.

use core::fmt::{self, Debug, Display};

use base64::prelude::*;
use x25519_dalek::StaticSecret;
use zeroize::Zeroize;

use crate::core::error::{MultiboxError, MultiboxResult};
use crate::core::operations::random::random_bytes;
use crate::core::types::PublicKey;

/// An X25519 secret key used to open envelopes addressed to its public key.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key
/// - Equality comparison uses constant-time comparison
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretKey {
    key: [u8; 32],
}

impl SecretKey {
    /// Creates a new `SecretKey` from raw key bytes.
    ///
    /// The bytes are clamped when used, as X25519 requires.
    #[must_use]
    pub const fn new(key: [u8; 32]) -> Self {
        Self { key }
    }

    /// Generates a fresh secret key from the operating system's CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns `MultiboxError::CryptoError` if the random source fails.
    pub fn generate() -> MultiboxResult<Self> {
        random_bytes::<32>().map(Self::new)
    }

    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.key
    }

    /// Derives the matching public key.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from(x25519_dalek::PublicKey::from(&self.to_x25519()))
    }

    pub(crate) fn to_x25519(&self) -> StaticSecret {
        StaticSecret::from(self.key)
    }
}

impl From<[u8; 32]> for SecretKey {
    fn from(key: [u8; 32]) -> Self {
        Self::new(key)
    }
}

impl From<&[u8; 32]> for SecretKey {
    fn from(key: &[u8; 32]) -> Self {
        Self::new(*key)
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = MultiboxError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let key: [u8; 32] = bytes.try_into().map_err(|_| MultiboxError::InvalidKey)?;
        Ok(Self::new(key))
    }
}

impl AsRef<[u8]> for SecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

impl Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BASE64_STANDARD.encode(self.key))
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl TryFrom<&str> for SecretKey {
    type Error = MultiboxError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        let mut bytes = BASE64_STANDARD.decode(encoded)?;
        let result = Self::try_from(bytes.as_slice());
        bytes.zeroize();
        result
    }
}

impl TryFrom<String> for SecretKey {
    type Error = MultiboxError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        Self::try_from(encoded.as_str())
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.key.ct_eq(&other.key).into()
    }
}

impl Eq for SecretKey {}

// =============================================================================
// Keypair
// =============================================================================

/// An X25519 keypair.
///
/// # Example
///
/// ```rust
/// use multibox::Keypair;
///
/// let keypair = Keypair::generate()?;
/// assert_eq!(keypair.secret_key().public_key(), *keypair.public_key());
/// # Ok::<(), multibox::MultiboxError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Keypair {
    public: PublicKey,
    secret: SecretKey,
}

impl Keypair {
    /// Generates a fresh keypair from the operating system's CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns `MultiboxError::CryptoError` if the random source fails.
    pub fn generate() -> MultiboxResult<Self> {
        SecretKey::generate().map(Self::from)
    }

    /// Returns the public half.
    #[must_use]
    pub const fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Returns the secret half.
    #[must_use]
    pub const fn secret_key(&self) -> &SecretKey {
        &self.secret
    }
}

impl From<SecretKey> for Keypair {
    fn from(secret: SecretKey) -> Self {
        Self {
            public: secret.public_key(),
            secret,
        }
    }
}

impl Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public", &self.public)
            .field("secret", &self.secret)
            .finish()
    }
}
