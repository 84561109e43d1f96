//! `GroupKey` - pre-shared symmetric recipient key.
//!
//! A group key seals a slot directly, with no key exchange, so a closed group
//! holding the same secret can be addressed next to public-key recipients.

use core::fmt::{self, Debug, Display};

use base64::prelude::*;
use zeroize::Zeroize;

use crate::core::error::{MultiboxError, MultiboxResult};
use crate::core::operations::random::random_bytes;

/// A 32-byte symmetric key shared by the members of a group.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key
/// - Equality comparison uses constant-time comparison
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct GroupKey {
    key: [u8; 32],
}

impl GroupKey {
    /// Creates a new `GroupKey` from raw key bytes.
    #[must_use]
    pub const fn new(key: [u8; 32]) -> Self {
        Self { key }
    }

    /// Generates a fresh group key from the operating system's CSPRNG.
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
}

impl From<[u8; 32]> for GroupKey {
    fn from(key: [u8; 32]) -> Self {
        Self::new(key)
    }
}

impl From<&[u8; 32]> for GroupKey {
    fn from(key: &[u8; 32]) -> Self {
        Self::new(*key)
    }
}

impl TryFrom<&[u8]> for GroupKey {
    type Error = MultiboxError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let key: [u8; 32] = bytes.try_into().map_err(|_| MultiboxError::InvalidKey)?;
        Ok(Self::new(key))
    }
}

impl AsRef<[u8]> for GroupKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

impl Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BASE64_STANDARD.encode(self.key))
    }
}

impl Debug for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl TryFrom<&str> for GroupKey {
    type Error = MultiboxError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        let mut bytes = BASE64_STANDARD.decode(encoded)?;
        let result = Self::try_from(bytes.as_slice());
        bytes.zeroize();
        result
    }
}

impl TryFrom<String> for GroupKey {
    type Error = MultiboxError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        Self::try_from(encoded.as_str())
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.key.ct_eq(&other.key).into()
    }
}

impl Eq for GroupKey {}
