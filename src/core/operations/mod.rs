//! Envelope operations.
//!
//! - [`build`] - sealing envelopes (`encrypt`, `encrypt_mixed`, `encrypt_symmetric`)
//! - [`open`] - trial decryption (`decrypt`, `decrypt_symmetric`, `resolve_slot`, `unseal_body`)

pub mod build;
pub mod open;
pub(crate) mod random;

pub use build::{encrypt, encrypt_mixed, encrypt_symmetric};
pub use open::{decrypt, decrypt_symmetric, resolve_slot, unseal_body};
