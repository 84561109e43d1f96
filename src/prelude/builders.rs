//! Builder patterns for sealing and opening envelopes.
//!
//! The builders take `max` as a plain integer and validate it when the
//! envelope is sealed or opened, so an out-of-range `max` is reported as
//! `MultiboxError::InvalidConfig` on both sides.
//!
//! # Example
//!
//! ```rust
//! use multibox::prelude::*;
//!
//! let alice = Keypair::generate()?;
//! let bob = Keypair::generate()?;
//! let team = GroupKey::generate()?;
//!
//! let envelope = EnvelopeBuilder::<Salsa>::new()
//!     .recipient(*alice.public_key())
//!     .recipient(*bob.public_key())
//!     .group_key(team.clone())
//!     .max(16)
//!     .try_seal(b"quarterly numbers")?;
//!
//! let opener = EnvelopeOpener::<Salsa>::new().max(16);
//! let message = opener.try_open(&envelope, bob.secret_key())?;
//! assert_eq!(message.as_deref(), Some(&b"quarterly numbers"[..]));
//!
//! // An out-of-range max is a configuration error, not an absent message.
//! assert!(EnvelopeOpener::<Salsa>::new().max(256).try_open(&envelope, bob.secret_key()).is_err());
//! # Ok::<(), multibox::MultiboxError>(())
//! ```

use core::marker::PhantomData;

use crate::core::capacity::Capacity;
use crate::core::error::MultiboxResult;
use crate::core::suite::Suite;
use crate::core::types::{Envelope, GroupKey, KeyMaterial, PublicKey, SecretKey, SlotKey};

/// Builder for sealing an envelope to any mix of recipients.
///
/// Slots are written in insertion order, public keys before group keys.
#[derive(Debug, Clone)]
pub struct EnvelopeBuilder<S: Suite> {
    recipients: Vec<PublicKey>,
    group_keys: Vec<GroupKey>,
    max: i64,
    _suite: PhantomData<S>,
}

impl<S: Suite> Default for EnvelopeBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Suite> EnvelopeBuilder<S> {
    /// Creates a builder with no recipients and the default `max` of 7.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            recipients: Vec::new(),
            group_keys: Vec::new(),
            max: Capacity::DEFAULT.get() as i64,
            _suite: PhantomData,
        }
    }

    /// Adds an X25519 recipient.
    #[must_use]
    pub fn recipient(mut self, public_key: PublicKey) -> Self {
        self.recipients.push(public_key);
        self
    }

    /// Adds several X25519 recipients.
    #[must_use]
    pub fn recipients(mut self, public_keys: impl IntoIterator<Item = PublicKey>) -> Self {
        self.recipients.extend(public_keys);
        self
    }

    /// Adds a group recipient.
    #[must_use]
    pub fn group_key(mut self, group_key: GroupKey) -> Self {
        self.group_keys.push(group_key);
        self
    }

    /// Adds several group recipients.
    #[must_use]
    pub fn group_keys(mut self, group_keys: impl IntoIterator<Item = GroupKey>) -> Self {
        self.group_keys.extend(group_keys);
        self
    }

    /// Sets the capacity limit. Validated by [`try_seal`](Self::try_seal).
    #[must_use]
    pub fn max(mut self, max: i64) -> Self {
        self.max = max;
        self
    }

    /// Returns the number of recipients added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipients.len() + self.group_keys.len()
    }

    /// Returns `true` if no recipients have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Seals `message` to every recipient added so far.
    ///
    /// # Errors
    ///
    /// Returns `MultiboxError::InvalidConfig` if `max` is outside `1..=255`,
    /// `MultiboxError::CapacityExceeded` if there are more recipients than
    /// `max`, plus the errors of [`encrypt`](crate::encrypt).
    pub fn try_seal(&self, message: &[u8]) -> MultiboxResult<Envelope<S>> {
        let capacity = Capacity::new(self.max)?;
        Envelope::try_seal_mixed(message, &self.recipients, &self.group_keys, capacity)
    }
}

/// Opener that carries the agreed capacity limit.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeOpener<S: Suite> {
    max: i64,
    _suite: PhantomData<S>,
}

impl<S: Suite> Default for EnvelopeOpener<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Suite> EnvelopeOpener<S> {
    /// Creates an opener with the default `max` of 7.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max: Capacity::DEFAULT.get() as i64,
            _suite: PhantomData,
        }
    }

    /// Sets the capacity limit. Validated on every open.
    #[must_use]
    pub const fn max(mut self, max: i64) -> Self {
        self.max = max;
        self
    }

    /// Opens `envelope` with an X25519 secret key.
    ///
    /// `Ok(None)` means the key does not open the envelope.
    ///
    /// # Errors
    ///
    /// Returns `MultiboxError::InvalidConfig` if `max` is outside `1..=255`.
    pub fn try_open(&self, envelope: &Envelope<S>, secret_key: &SecretKey) -> MultiboxResult<Option<Vec<u8>>> {
        Ok(envelope.try_open(secret_key, self.capacity()?))
    }

    /// Opens `envelope` with a group key.
    ///
    /// # Errors
    ///
    /// Returns `MultiboxError::InvalidConfig` if `max` is outside `1..=255`.
    pub fn try_open_symmetric(
        &self,
        envelope: &Envelope<S>,
        group_key: &GroupKey,
    ) -> MultiboxResult<Option<Vec<u8>>> {
        Ok(envelope.try_open_symmetric(group_key, self.capacity()?))
    }

    /// Resolves the slot `key` opens without decrypting the body.
    ///
    /// # Errors
    ///
    /// Returns `MultiboxError::InvalidConfig` if `max` is outside `1..=255`.
    pub fn try_resolve(
        &self,
        envelope: &Envelope<S>,
        key: KeyMaterial<'_>,
    ) -> MultiboxResult<Option<SlotKey>> {
        Ok(envelope.resolve(key, self.capacity()?))
    }

    fn capacity(&self) -> MultiboxResult<Capacity> {
        Capacity::new(self.max)
    }
}

#[cfg(test)]
#[cfg(feature = "xsalsa")]
mod tests {
    use super::*;
    use crate::core::error::MultiboxError;
    use crate::core::suite::Salsa;
    use crate::core::types::Keypair;

    #[test]
    fn test_builder_defaults() {
        let builder = EnvelopeBuilder::<Salsa>::default();
        assert!(builder.is_empty());
        assert_eq!(builder.max, 7);
        assert_eq!(EnvelopeOpener::<Salsa>::default().max, 7);
    }

    #[test]
    fn test_builder_counts_both_kinds() -> MultiboxResult<()> {
        let builder = EnvelopeBuilder::<Salsa>::new()
            .recipients([*Keypair::generate()?.public_key(), *Keypair::generate()?.public_key()])
            .group_keys([GroupKey::generate()?]);
        assert_eq!(builder.len(), 3);
        Ok(())
    }

    #[test]
    fn test_builder_invalid_max() -> MultiboxResult<()> {
        let pk = *Keypair::generate()?.public_key();
        for max in [0, 256, -1] {
            let result = EnvelopeBuilder::<Salsa>::new().recipient(pk).max(max).try_seal(b"x");
            assert!(matches!(result, Err(MultiboxError::InvalidConfig { max: m }) if m == max));
        }
        Ok(())
    }

    #[test]
    fn test_builder_capacity_exceeded() -> MultiboxResult<()> {
        let pk = *Keypair::generate()?.public_key();
        let result = EnvelopeBuilder::<Salsa>::new()
            .recipients(std::iter::repeat(pk).take(16))
            .try_seal(b"hello there!");
        assert!(matches!(
            result,
            Err(MultiboxError::CapacityExceeded { count: 16, max: 7 })
        ));
        Ok(())
    }

    #[test]
    fn test_opener_roundtrip() -> MultiboxResult<()> {
        let alice = Keypair::generate()?;
        let team = GroupKey::generate()?;
        let envelope = EnvelopeBuilder::<Salsa>::new()
            .recipient(*alice.public_key())
            .group_key(team.clone())
            .try_seal(b"agenda")?;

        let opener = EnvelopeOpener::<Salsa>::new();
        assert_eq!(opener.try_open(&envelope, alice.secret_key())?.as_deref(), Some(&b"agenda"[..]));
        assert_eq!(opener.try_open_symmetric(&envelope, &team)?.as_deref(), Some(&b"agenda"[..]));
        assert_eq!(
            opener.try_resolve(&envelope, KeyMaterial::Group(&team))?.map(|k| k.count()),
            Some(2)
        );

        let outsider = Keypair::generate()?;
        assert_eq!(opener.try_open(&envelope, outsider.secret_key())?, None);
        Ok(())
    }

    #[test]
    fn test_opener_invalid_max() -> MultiboxResult<()> {
        let alice = Keypair::generate()?;
        let envelope = EnvelopeBuilder::<Salsa>::new()
            .recipient(*alice.public_key())
            .try_seal(b"agenda")?;

        let result = EnvelopeOpener::<Salsa>::new().max(256).try_open(&envelope, alice.secret_key());
        assert!(matches!(result, Err(MultiboxError::InvalidConfig { max: 256 })));
        Ok(())
    }
}
