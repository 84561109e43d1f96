#![no_main]

use libfuzzer_sys::fuzz_target;
use multibox::{GroupKey, PublicKey, SecretKey};

fuzz_target!(|data: &str| {
    // Key text forms should never panic
    let _ = PublicKey::try_from(data);
    let _ = SecretKey::try_from(data);
    let _ = GroupKey::try_from(data);
    let _ = PublicKey::try_from(data.as_bytes());
});
