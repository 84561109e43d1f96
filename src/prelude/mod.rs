//! Ergonomic layer for multibox operations.
//!
//! The prelude re-exports the key and envelope types together with
//! [`EnvelopeBuilder`] and [`EnvelopeOpener`], which collect recipients
//! fluently and validate `max` on both sides.
//!
//! # Usage
//!
//! ```rust
//! use multibox::prelude::*;
//! ```

mod builders;

pub use builders::{EnvelopeBuilder, EnvelopeOpener};

pub use crate::core::capacity::Capacity;
pub use crate::core::error::{MultiboxError, MultiboxResult};
pub use crate::core::suite::Suite;
pub use crate::core::types::{
    Envelope, GroupKey, KeyMaterial, Keypair, PublicKey, SecretKey, SlotKey,
};

#[cfg(feature = "xchacha")]
pub use crate::core::suite::ChaCha;
#[cfg(feature = "xsalsa")]
pub use crate::core::suite::Salsa;
