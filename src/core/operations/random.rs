//! Secure random source.

use rand_core::{OsRng, TryRngCore};
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::Zeroize;

use crate::core::error::{MultiboxError, MultiboxResult};

/// Returns `N` bytes from the operating system's CSPRNG.
pub(crate) fn random_bytes<const N: usize>() -> MultiboxResult<[u8; N]> {
    let mut bytes = [0u8; N];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|_| MultiboxError::CryptoError)?;
    Ok(bytes)
}

/// Generates an X25519 keypair.
pub(crate) fn generate_x25519() -> MultiboxResult<(StaticSecret, PublicKey)> {
    let mut secret_bytes = random_bytes::<32>()?;
    let secret = StaticSecret::from(secret_bytes);
    let public = PublicKey::from(&secret);

    secret_bytes.zeroize();

    Ok((secret, public))
}
