//! Core multibox types and operations.
//!
//! - [`error`] - Error types
//! - [`layout`] - Wire format constants and offsets
//! - [`capacity`] - The validated recipient limit
//! - [`suite`] - Cipher suite markers (the AEAD underneath)
//! - [`types`] - Keys, resolved slots and envelopes
//! - [`operations`] - Sealing and opening

pub mod capacity;
pub mod error;
pub mod layout;
pub mod operations;
pub mod suite;
pub mod types;

// Re-export commonly used items
pub use capacity::Capacity;
pub use error::{MultiboxError, MultiboxResult};
pub use suite::Suite;
