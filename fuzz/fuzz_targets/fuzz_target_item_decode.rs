#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Item JSON decoding must not panic on arbitrary vault CLI output
    let _ = serde_json::from_slice::<passop::core::item::ItemTemplate>(data);
});
