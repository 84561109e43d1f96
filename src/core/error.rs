//! Error types for multibox operations.
//!
//! Only building an envelope (and parsing key or envelope material) can fail
//! with an error. Opening an envelope never does: a key that opens nothing, a
//! `max` mismatch and a tampered envelope all collapse into `None`, so that
//! callers cannot be turned into a membership or integrity oracle.

use thiserror::Error;

/// Errors that can occur when building envelopes or parsing key material.
#[derive(Debug, Error)]
pub enum MultiboxError {
    /// The capacity limit is outside `1..=255`.
    #[error("Invalid capacity {max}: must be between 1 and 255")]
    InvalidConfig {
        /// The rejected value.
        max: i64,
    },

    /// More recipients were requested than the capacity limit allows.
    #[error("Too many recipients: {count} exceeds the maximum of {max}")]
    CapacityExceeded {
        /// Asymmetric and symmetric recipients combined.
        count: usize,
        /// The capacity limit in force.
        max: u8,
    },

    /// The key material is invalid (wrong size, low-order point).
    #[error("Invalid key material")]
    InvalidKey,

    /// The envelope is too short to hold a nonce, an ephemeral key and a body tag.
    #[error("Invalid envelope format")]
    InvalidFormat,

    /// Base64 decoding error.
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// The random source or the AEAD failed.
    /// Intentionally vague for security.
    #[error("Cryptographic operation failed")]
    CryptoError,
}

/// Result type alias for multibox operations.
pub type MultiboxResult<T> = Result<T, MultiboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MultiboxError::InvalidConfig { max: 256 };
        assert_eq!(err.to_string(), "Invalid capacity 256: must be between 1 and 255");

        let err = MultiboxError::InvalidConfig { max: -1 };
        assert_eq!(err.to_string(), "Invalid capacity -1: must be between 1 and 255");

        let err = MultiboxError::CapacityExceeded { count: 16, max: 7 };
        assert_eq!(err.to_string(), "Too many recipients: 16 exceeds the maximum of 7");

        let err = MultiboxError::InvalidKey;
        assert_eq!(err.to_string(), "Invalid key material");

        let err = MultiboxError::InvalidFormat;
        assert_eq!(err.to_string(), "Invalid envelope format");

        let err = MultiboxError::CryptoError;
        assert_eq!(err.to_string(), "Cryptographic operation failed");
    }

    #[test]
    fn test_base64_error_converts() {
        use base64::prelude::*;

        let decode_err = BASE64_STANDARD.decode("!!!").err();
        assert!(decode_err.is_some());
        if let Some(e) = decode_err {
            let err = MultiboxError::from(e);
            assert!(matches!(err, MultiboxError::Base64Decode(_)));
            assert!(err.to_string().starts_with("Base64 decode error"));
        }
    }

    #[test]
    fn test_error_debug() {
        let err = MultiboxError::CapacityExceeded { count: 9, max: 8 };
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("CapacityExceeded"));
        assert!(debug_str.contains("count: 9"));
    }
}
