//! Cipher suite markers.
//!
//! The envelope construction only needs an AEAD with a 32-byte key, a 24-byte
//! nonce and a 16-byte tag. This module provides zero-sized markers for the
//! supported AEADs behind a sealed [`Suite`] trait, much like a protocol
//! version: the builder and the opener must use the same suite, and the
//! type parameter on [`Envelope`](crate::Envelope) keeps them in step.
//!
//! | Marker | AEAD | Feature |
//! |--------|------|---------|
//! | [`Salsa`] | XSalsa20-Poly1305 (libsodium `secretbox`) | `xsalsa` |
//! | [`ChaCha`] | XChaCha20-Poly1305 | `xchacha` |

use crate::core::error::MultiboxResult;
use crate::core::layout::{KEY_SIZE, NONCE_SIZE};

#[cfg(any(feature = "xsalsa", feature = "xchacha"))]
use core::fmt::{self, Display};

#[cfg(any(feature = "xsalsa", feature = "xchacha"))]
use crate::core::error::MultiboxError;

mod private {
    pub trait Sealed {}
}

/// Trait for cipher suite markers.
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait Suite: private::Sealed + Default + Clone + Copy + Send + Sync + 'static {
    /// Human-readable suite name (e.g., "xsalsa20poly1305").
    const NAME: &'static str;

    /// Seals `plaintext`, returning `plaintext.len() + 16` bytes.
    ///
    /// # Errors
    ///
    /// Returns `MultiboxError::CryptoError` if the AEAD rejects the input.
    fn seal(
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        plaintext: &[u8],
    ) -> MultiboxResult<Vec<u8>>;

    /// Opens `ciphertext`, returning `None` if authentication fails.
    fn open(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], ciphertext: &[u8]) -> Option<Vec<u8>>;
}

// =============================================================================
// XSalsa20-Poly1305
// =============================================================================

/// XSalsa20-Poly1305 suite marker.
///
/// Byte-for-byte the libsodium `crypto_secretbox_easy` construction, so
/// envelopes interoperate with sodium-based implementations of the format.
#[cfg(feature = "xsalsa")]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Salsa;

#[cfg(feature = "xsalsa")]
impl private::Sealed for Salsa {}

#[cfg(feature = "xsalsa")]
impl Suite for Salsa {
    const NAME: &'static str = "xsalsa20poly1305";

    fn seal(
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        plaintext: &[u8],
    ) -> MultiboxResult<Vec<u8>> {
        use crypto_secretbox::aead::{Aead, KeyInit};
        use crypto_secretbox::XSalsa20Poly1305;

        let cipher = XSalsa20Poly1305::new(&(*key).into());
        cipher
            .encrypt(&(*nonce).into(), plaintext)
            .map_err(|_| MultiboxError::CryptoError)
    }

    fn open(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], ciphertext: &[u8]) -> Option<Vec<u8>> {
        use crypto_secretbox::aead::{Aead, KeyInit};
        use crypto_secretbox::XSalsa20Poly1305;

        let cipher = XSalsa20Poly1305::new(&(*key).into());
        cipher.decrypt(&(*nonce).into(), ciphertext).ok()
    }
}

#[cfg(feature = "xsalsa")]
impl Display for Salsa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::NAME)
    }
}

// =============================================================================
// XChaCha20-Poly1305
// =============================================================================

/// XChaCha20-Poly1305 suite marker.
#[cfg(feature = "xchacha")]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChaCha;

#[cfg(feature = "xchacha")]
impl private::Sealed for ChaCha {}

#[cfg(feature = "xchacha")]
impl Suite for ChaCha {
    const NAME: &'static str = "xchacha20poly1305";

    fn seal(
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        plaintext: &[u8],
    ) -> MultiboxResult<Vec<u8>> {
        use chacha20poly1305::aead::{Aead, KeyInit};
        use chacha20poly1305::XChaCha20Poly1305;

        let cipher = XChaCha20Poly1305::new(&(*key).into());
        cipher
            .encrypt(&(*nonce).into(), plaintext)
            .map_err(|_| MultiboxError::CryptoError)
    }

    fn open(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], ciphertext: &[u8]) -> Option<Vec<u8>> {
        use chacha20poly1305::aead::{Aead, KeyInit};
        use chacha20poly1305::XChaCha20Poly1305;

        let cipher = XChaCha20Poly1305::new(&(*key).into());
        cipher.decrypt(&(*nonce).into(), ciphertext).ok()
    }
}

#[cfg(feature = "xchacha")]
impl Display for ChaCha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::NAME)
    }
}
