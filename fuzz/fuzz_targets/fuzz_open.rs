#![no_main]

use libfuzzer_sys::fuzz_target;
use multibox::{
    decrypt, decrypt_symmetric, resolve_slot, Capacity, ChaCha, GroupKey, KeyMaterial, Salsa,
    SecretKey,
};

// Fixed keys: the scan must stay in bounds and must never panic.
const SECRET: [u8; 32] = [0x42; 32];
const GROUP: [u8; 32] = [0x24; 32];

fuzz_target!(|data: &[u8]| {
    let secret = SecretKey::new(SECRET);
    let group = GroupKey::new(GROUP);

    // First byte picks the limit, the rest is the envelope.
    let Some((&max, envelope)) = data.split_first() else {
        return;
    };
    let Ok(capacity) = Capacity::new(i64::from(max)) else {
        return;
    };

    let _ = decrypt::<Salsa>(envelope, &secret, capacity);
    let _ = decrypt_symmetric::<Salsa>(envelope, &group, capacity);
    let _ = decrypt::<ChaCha>(envelope, &secret, capacity);
    let _ = resolve_slot::<ChaCha>(envelope, KeyMaterial::Group(&group), capacity);
});
