use crate::core::fs_secure::shred;
use crate::core::item::{ItemTemplate, VaultListEntry};
use crate::core::ports::ItemStore;
use crate::store::command::{run_capture, run_checked};
use anyhow::{anyhow, Context, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const TEMP_PREFIX: &str = "passop";

/// Vault operations backed by the 1Password `op` CLI.
pub struct OpCliStore {
    bin: String,
    temp_dir: PathBuf,
}

impl OpCliStore {
    pub fn new(bin: String, temp_dir: PathBuf) -> Self {
        Self { bin, temp_dir }
    }

    fn write_and_invoke(
        &self,
        mut file: File,
        path: &Path,
        template: &ItemTemplate,
        extra: &BTreeMap<String, String>,
        vault: Option<&str>,
    ) -> Result<()> {
        serde_json::to_writer(&mut file, template).context("failed to write item template")?;
        file.flush()
            .context("failed to flush item template file")?;
        drop(file);

        let mut args: Vec<String> = vec![
            "item".into(),
            "create".into(),
            "--template".into(),
            path.to_string_lossy().into_owned(),
        ];
        if let Some(vault) = vault {
            args.push("--vault".into());
            args.push(vault.to_string());
        }
        for (key, value) in extra {
            args.push(format!("{key}={value}"));
        }

        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        run_checked(&self.bin, &arg_refs)
    }
}

impl ItemStore for OpCliStore {
    fn list(&self) -> Result<Vec<VaultListEntry>> {
        let out = run_capture(&self.bin, &["item", "list", "--format=json"])?;
        serde_json::from_str(&out).context("malformed item list JSON")
    }

    fn get(&self, name: &str) -> Result<ItemTemplate> {
        let out = run_capture(&self.bin, &["item", "get", name, "--format", "json"])?;
        serde_json::from_str(&out).with_context(|| format!("malformed item JSON for {name}"))
    }

    fn create(
        &self,
        template: &ItemTemplate,
        extra: &BTreeMap<String, String>,
        vault: Option<&str>,
    ) -> Result<()> {
        // The template file holds the plaintext password, so it is staged in
        // the volatile temp dir and shredded on every exit path.
        let staged = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempfile_in(&self.temp_dir)
            .context("failed to create template staging file")?;
        // Disarm tempfile's own delete-on-drop; removal goes through shred.
        let (file, path) = staged
            .keep()
            .map_err(|e| anyhow!("failed to persist template staging file: {e}"))?;

        let result = self.write_and_invoke(file, &path, template, extra, vault);
        shred(&path)?;
        result
    }

    fn delete(&self, name: &str) -> Result<()> {
        run_checked(&self.bin, &["item", "delete", name])
    }
}
