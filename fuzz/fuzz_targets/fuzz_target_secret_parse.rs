#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // The secret parser must never panic on arbitrary pass output
    let _ = passop::core::secret::SecretRecord::parse(data);
});
