#![no_main]

use libfuzzer_sys::fuzz_target;
use multibox::{Envelope, Salsa};

fuzz_target!(|data: &str| {
    // Parsing text or bytes should never panic, and parsed envelopes re-encode
    if let Ok(envelope) = Envelope::<Salsa>::try_from(data) {
        let reparsed = Envelope::<Salsa>::try_from(envelope.to_string());
        assert!(reparsed.is_ok());
    }
    let _ = Envelope::<Salsa>::try_from(data.as_bytes());
});
