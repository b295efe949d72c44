use crate::core::item::{ItemTemplate, VaultListEntry};
use anyhow::Result;
use std::collections::BTreeMap;
use zeroize::Zeroizing;

/// Source password store, e.g. `pass <name>`.
pub trait SecretSource: Send + Sync {
    /// Fetch the raw secret text for `name`. The buffer is zeroized on drop.
    fn fetch(&self, name: &str) -> Result<Zeroizing<String>>;
}

/// Narrow capability set against the target vault so the orchestration is
/// testable without real subprocess execution.
pub trait ItemStore: Send + Sync {
    fn list(&self) -> Result<Vec<VaultListEntry>>;

    fn get(&self, name: &str) -> Result<ItemTemplate>;

    /// Create an item from `template`, passing `extra` through as opaque
    /// `key=value` arguments and targeting `vault` when given.
    fn create(
        &self,
        template: &ItemTemplate,
        extra: &BTreeMap<String, String>,
        vault: Option<&str>,
    ) -> Result<()>;

    fn delete(&self, name: &str) -> Result<()>;
}
