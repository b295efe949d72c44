use crate::core::builder::build_item;
use crate::core::error::CopyError;
use crate::core::ports::{ItemStore, SecretSource};
use crate::core::secret::SecretRecord;
use anyhow::Context;
use std::collections::BTreeMap;
use std::sync::Arc;

// Title suffix for the backup staged during a destructive replace.
const BACKUP_SUFFIX: &str = ".old";

pub struct CopyRequest {
    pub name: String,
    pub overwrite: bool,
    pub vault: Option<String>,
}

pub struct CopyService {
    source: Arc<dyn SecretSource>,
    store: Arc<dyn ItemStore>,
}

impl CopyService {
    pub fn new(source: Arc<dyn SecretSource>, store: Arc<dyn ItemStore>) -> Self {
        Self { source, store }
    }

    /// Run the full copy sequence: existence check, overwrite gate, source
    /// fetch, parse, template build, then either a plain create or the
    /// backup/delete/create/cleanup replace sequence.
    ///
    /// The replace window is not transactional: if create fails after the
    /// original was deleted, the `.old` backup is the only remaining copy and
    /// is deliberately left in place.
    pub fn copy(&self, request: &CopyRequest) -> Result<(), CopyError> {
        let name = request.name.as_str();

        let exists = self.exists(name)?;
        if exists && !request.overwrite {
            return Err(CopyError::ConfirmationRequired(name.to_string()));
        }

        let raw = self.source.fetch(name)?;
        let record = SecretRecord::parse(&raw)?;
        let (template, extra) = build_item(name, record);

        let vault = request.vault.as_deref();
        if exists {
            let backup_title = format!("{name}{BACKUP_SUFFIX}");
            self.duplicate(name, &backup_title)?;
            self.store.delete(name)?;
            self.store.create(&template, &extra, vault)?;
            // An orphaned backup still holds the old plaintext; failing to
            // remove it is security-relevant and must not be ignored.
            self.store
                .delete(&backup_title)
                .with_context(|| format!("error deleting temporary secret {backup_title}"))?;
        } else {
            self.store.create(&template, &extra, vault)?;
        }

        Ok(())
    }

    fn exists(&self, name: &str) -> Result<bool, CopyError> {
        let entries = self.store.list()?;
        Ok(entries.iter().any(|e| e.title == name))
    }

    /// Re-create the item `name` under `new_title`. The backup always lands
    /// in the default vault, so no vault argument is passed.
    fn duplicate(&self, name: &str, new_title: &str) -> Result<(), CopyError> {
        let mut item = self.store.get(name)?;
        item.title = new_title.to_string();
        self.store.create(&item, &BTreeMap::new(), None)?;
        Ok(())
    }
}
