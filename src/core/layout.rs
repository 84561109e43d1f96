//! Envelope byte layout.
//!
//! Every field of an envelope has a fixed width:
//!
//! ```text
//! nonce (24) || ephemeral_pk (32) || slot[0] (49) || ... || slot[k-1] (49) || body (len + 16)
//! ```
//!
//! A slot is the AEAD-sealed form of `count (1) || session_key (32)`. The
//! format carries no version tag and no recipient count in the clear.

/// Size of the nonce shared by every slot and the body.
pub const NONCE_SIZE: usize = 24;

/// Size of the one-time X25519 public key.
pub const EPHEMERAL_PK_SIZE: usize = 32;

/// Size of every symmetric key (session keys, group keys, shared secrets).
pub const KEY_SIZE: usize = 32;

/// Size of the AEAD authentication tag.
pub const TAG_SIZE: usize = 16;

/// Size of a slot before sealing: one count byte followed by the session key.
pub const SLOT_PLAINTEXT_SIZE: usize = 1 + KEY_SIZE;

/// Size of a sealed slot.
pub const SLOT_SIZE: usize = SLOT_PLAINTEXT_SIZE + TAG_SIZE;

/// Offset of the first slot.
pub const HEADER_SIZE: usize = NONCE_SIZE + EPHEMERAL_PK_SIZE;

/// Smallest well-formed envelope: no slots and an empty message.
pub const MIN_ENVELOPE_SIZE: usize = HEADER_SIZE + TAG_SIZE;

/// Returns the offset of slot `index`.
#[must_use]
pub const fn slot_offset(index: usize) -> usize {
    HEADER_SIZE + index * SLOT_SIZE
}

/// Returns the offset of the body in an envelope with `count` slots.
#[must_use]
pub const fn body_offset(count: usize) -> usize {
    slot_offset(count)
}

/// Returns the total envelope length for `recipients` slots and a message of
/// `message_len` bytes.
#[must_use]
pub const fn envelope_len(recipients: usize, message_len: usize) -> usize {
    body_offset(recipients) + message_len + TAG_SIZE
}

/// Returns the byte range of slot `index`, or `None` if a full slot would
/// reach into the trailing body tag of an envelope of `envelope_len` bytes.
pub(crate) fn slot_range(index: usize, envelope_len: usize) -> Option<core::ops::Range<usize>> {
    let start = slot_offset(index);
    let end = start.checked_add(SLOT_SIZE)?;
    let limit = envelope_len.checked_sub(TAG_SIZE)?;
    (end <= limit).then_some(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(SLOT_PLAINTEXT_SIZE, 33);
        assert_eq!(SLOT_SIZE, 49);
        assert_eq!(HEADER_SIZE, 56);
        assert_eq!(MIN_ENVELOPE_SIZE, 72);
    }

    #[test]
    fn test_slot_offsets() {
        assert_eq!(slot_offset(0), 56);
        assert_eq!(slot_offset(1), 105);
        assert_eq!(slot_offset(7), 56 + 7 * 49);
        assert_eq!(body_offset(2), 154);
    }

    #[test]
    fn test_envelope_len() {
        // "hello there!" to two recipients
        assert_eq!(envelope_len(2, 12), 182);
        assert_eq!(envelope_len(0, 0), MIN_ENVELOPE_SIZE);
        assert_eq!(envelope_len(255, 1024), 24 + 32 + 49 * 255 + 1024 + 16);
    }

    #[test]
    fn test_slot_range_bounds() {
        // One slot and an empty body: slot 0 fits exactly, slot 1 does not.
        let len = envelope_len(1, 0);
        assert_eq!(slot_range(0, len), Some(56..105));
        assert_eq!(slot_range(1, len), None);
    }

    #[test]
    fn test_slot_range_short_envelope() {
        assert_eq!(slot_range(0, 0), None);
        assert_eq!(slot_range(0, TAG_SIZE - 1), None);
        assert_eq!(slot_range(0, MIN_ENVELOPE_SIZE), None);
    }

    #[test]
    fn test_slot_range_reaches_into_body() {
        // A long body lets indices past the real slot count stay in bounds;
        // those probes simply fail to authenticate.
        let len = envelope_len(1, 200);
        assert!(slot_range(3, len).is_some());
        assert!(slot_range(5, len).is_none());
    }
}
