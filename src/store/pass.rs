use crate::core::ports::SecretSource;
use crate::store::command::run_capture;
use anyhow::Result;
use zeroize::Zeroizing;

/// Fetches secrets by invoking the `pass` binary.
pub struct PassSecretSource {
    bin: String,
}

impl PassSecretSource {
    pub fn new(bin: String) -> Self {
        Self { bin }
    }
}

impl SecretSource for PassSecretSource {
    fn fetch(&self, name: &str) -> Result<Zeroizing<String>> {
        let out = run_capture(&self.bin, &[name])?;
        Ok(Zeroizing::new(out))
    }
}
