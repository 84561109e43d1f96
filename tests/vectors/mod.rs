//! Test vector types for multibox envelopes.
//!
//! `xsalsa20poly1305.json` and `xchacha20poly1305.json` hold envelopes built
//! by an independent implementation from fixed keys, nonces and session
//! keys. `seal.json` holds sealing scenarios whose outputs are random but
//! whose lengths and errors are fixed.

// Some fields are only read by one of the suites or kept for diagnostics
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    #[serde(default)]
    pub suite: Option<String>,
    pub tests: Vec<T>,
}

/// Which kind of key a viewer opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyKind {
    Secret,
    Group,
}

/// Test vector for opening a fixed envelope.
#[derive(Debug, Deserialize)]
pub struct OpenTestVector {
    pub name: String,
    /// `true` when the key must not open the envelope
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(rename = "key-kind")]
    pub key_kind: KeyKind,
    /// Hex-encoded X25519 secret key or group key
    pub key: String,
    pub max: i64,
    /// Hex-encoded envelope
    pub envelope: String,
    /// Hex-encoded message (null for fail tests)
    pub message: Option<String>,
}

/// Expected sealing error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SealError {
    CapacityExceeded,
    InvalidConfig,
}

/// Test vector for sealing to freshly generated recipients.
#[derive(Debug, Deserialize)]
pub struct SealTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Number of X25519 recipients to generate
    #[serde(rename = "public-keys")]
    pub public_keys: usize,
    /// Number of group keys to generate
    #[serde(rename = "group-keys")]
    pub group_keys: usize,
    pub max: i64,
    /// UTF-8 message
    pub message: String,
    #[serde(rename = "envelope-length")]
    pub envelope_length: Option<usize>,
    pub error: Option<SealError>,
}

/// Decode a hex string to bytes.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Decode a hex string to a 32-byte key.
pub fn hex_key(s: &str) -> Option<[u8; 32]> {
    hex_decode(s)?.try_into().ok()
}

/// Load test vectors from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
