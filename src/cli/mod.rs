#![allow(clippy::module_inception)]
use crate::cli::cli::Cli;
use crate::config::config::Config;
use crate::core::ports::{ItemStore, SecretSource};
use crate::core::service::{CopyRequest, CopyService};
use crate::store::op::OpCliStore;
use crate::store::pass::PassSecretSource;
use anyhow::anyhow;
use clap::Parser;
use std::sync::Arc;
use tokio::task::spawn_blocking;

mod cli;

pub async fn run() -> anyhow::Result<()> {
    let parsed = Cli::parse();

    let config = Config::create(parsed.vault)?;

    let source: Arc<dyn SecretSource> = Arc::new(PassSecretSource::new(config.pass_bin.clone()));
    let store: Arc<dyn ItemStore> =
        Arc::new(OpCliStore::new(config.op_bin.clone(), config.temp_dir.clone()));
    let service = CopyService::new(source, store);

    let request = CopyRequest {
        name: parsed.secret,
        overwrite: parsed.overwrite,
        vault: config.vault,
    };

    spawn_blocking(move || service.copy(&request))
        .await
        .map_err(|_| anyhow!("task join error"))??;

    Ok(())
}
