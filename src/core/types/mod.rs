//! Key material and envelope types.
//!
//! - [`PublicKey`], [`SecretKey`], [`Keypair`] - X25519 recipient keys
//! - [`GroupKey`] - pre-shared symmetric recipient key
//! - [`SlotKey`] - a resolved `(count, session_key)` pair
//! - [`KeyMaterial`] - whichever key a viewer probes slots with
//! - [`Envelope`] - an owned envelope tagged with its cipher suite

mod envelope;
mod group;
mod public;
mod secret;
mod slot;

pub use envelope::Envelope;
pub use group::GroupKey;
pub use public::PublicKey;
pub use secret::{Keypair, SecretKey};
pub use slot::{KeyMaterial, SlotKey};
