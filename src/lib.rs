//! Multi-recipient authenticated encryption envelopes.
//!
//! A multibox envelope carries one message for up to 255 recipients. Each
//! recipient gets a fixed-size key slot; a viewer finds their slot by trial
//! decryption, so nothing in the envelope says who the recipients are or how
//! many there are.
//!
//! # Quick Start
//!
//! ```rust
//! use multibox::{decrypt, encrypt, Capacity, Keypair, Salsa};
//!
//! let alice = Keypair::generate()?;
//! let bob = Keypair::generate()?;
//!
//! let envelope = encrypt::<Salsa>(
//!     b"hello there!",
//!     &[*alice.public_key(), *bob.public_key()],
//!     Capacity::DEFAULT,
//! )?;
//!
//! let opened = decrypt::<Salsa>(&envelope, bob.secret_key(), Capacity::DEFAULT);
//! assert_eq!(opened.as_deref(), Some(&b"hello there!"[..]));
//!
//! let outsider = Keypair::generate()?;
//! assert_eq!(decrypt::<Salsa>(&envelope, outsider.secret_key(), Capacity::DEFAULT), None);
//! # Ok::<(), multibox::MultiboxError>(())
//! ```
//!
//! # Layout
//!
//! | Field | Size |
//! |-------|------|
//! | nonce | 24 |
//! | ephemeral public key | 32 |
//! | slots | 49 per recipient |
//! | body | message length + 16 |
//!
//! Every slot seals the same 33 bytes: the recipient count followed by the
//! session key. X25519 recipients unwrap their slot with the shared secret
//! between their key and the ephemeral key; group recipients use the group
//! key directly.
//!
//! # Suites
//!
//! The AEAD is chosen with a type parameter:
//!
//! - **Salsa**: XSalsa20-Poly1305, the libsodium `secretbox` construction (feature `xsalsa`)
//! - **`ChaCha`**: XChaCha20-Poly1305 (feature `xchacha`)
//!
//! The envelope does not record its suite. Sender and viewer must agree on
//! it, and on the capacity limit `max`.
//!
//! ```toml
//! [dependencies]
//! multibox = "0.1"                                                   # both suites
//! multibox = { version = "0.1", default-features = false, features = ["xchacha"] }
//! ```
//!
//! # Security
//!
//! - Key material is zeroized on drop
//! - Debug output redacts secret keys, group keys and session keys
//! - Slot scanning does the same work whichever slot matches
//! - No unsafe code
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports and builders (requires `prelude` feature)

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use crate::core::capacity::Capacity;
pub use crate::core::error::{MultiboxError, MultiboxResult};
pub use crate::core::layout::{envelope_len, MIN_ENVELOPE_SIZE, SLOT_SIZE};
pub use crate::core::suite::Suite;

#[cfg(feature = "xchacha")]
pub use crate::core::suite::ChaCha;
#[cfg(feature = "xsalsa")]
pub use crate::core::suite::Salsa;

pub use crate::core::types::{
    Envelope, GroupKey, KeyMaterial, Keypair, PublicKey, SecretKey, SlotKey,
};

pub use crate::core::operations::{
    decrypt, decrypt_symmetric, encrypt, encrypt_mixed, encrypt_symmetric, resolve_slot,
    unseal_body,
};

/// Envelope aliases for each enabled suite.
pub mod types {
    #[cfg(feature = "xchacha")]
    use super::ChaCha;
    use super::Envelope;
    #[cfg(feature = "xsalsa")]
    use super::Salsa;

    /// Envelope sealed with XSalsa20-Poly1305.
    #[cfg(feature = "xsalsa")]
    pub type SalsaEnvelope = Envelope<Salsa>;
    /// Envelope sealed with XChaCha20-Poly1305.
    #[cfg(feature = "xchacha")]
    pub type ChaChaEnvelope = Envelope<ChaCha>;
}
