use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_PASS_BIN: &str = "pass";
const DEFAULT_OP_BIN: &str = "op";
// Preferred staging location: RAM-backed, so shredded plaintext never hits a disk.
const VOLATILE_TEMP_DIR: &str = "/dev/shm";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("temp dir {0} does not exist or is not a directory")]
    InvalidTempDir(String),
}

/// Optional on-disk configuration, read from `<config-dir>/passop/config.toml`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub pass_bin: Option<String>,
    pub op_bin: Option<String>,
    pub temp_dir: Option<String>,
    pub vault: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub pass_bin: String,
    pub op_bin: String,
    pub temp_dir: PathBuf,
    pub vault: Option<String>,
}

impl Config {
    /// Resolve the effective configuration.
    ///
    /// Precedence for every knob: CLI flag (vault only) > environment > config
    /// file > built-in default. An explicitly configured temp dir must exist;
    /// the built-in default falls back from /dev/shm to the system temp dir.
    pub fn create(vault_flag: Option<String>) -> Result<Self, ConfigError> {
        let file_cfg = load_file_config();

        let pass_bin = env::var("PASSOP_PASS_BIN")
            .ok()
            .or(file_cfg.pass_bin)
            .unwrap_or_else(|| DEFAULT_PASS_BIN.to_string());

        let op_bin = env::var("PASSOP_OP_BIN")
            .ok()
            .or(file_cfg.op_bin)
            .unwrap_or_else(|| DEFAULT_OP_BIN.to_string());

        let temp_dir = match env::var("PASSOP_TEMP_DIR").ok().or(file_cfg.temp_dir) {
            Some(dir) => {
                let path = PathBuf::from(&dir);
                if !path.is_dir() {
                    return Err(ConfigError::InvalidTempDir(dir));
                }
                path
            }
            None => default_temp_dir(),
        };

        let vault = vault_flag
            .or_else(|| env::var("PASSOP_VAULT").ok())
            .or(file_cfg.vault);

        Ok(Config {
            pass_bin,
            op_bin,
            temp_dir,
            vault,
        })
    }
}

fn default_temp_dir() -> PathBuf {
    let volatile = PathBuf::from(VOLATILE_TEMP_DIR);
    if volatile.is_dir() {
        volatile
    } else {
        env::temp_dir()
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("passop").join("config.toml"))
}

fn load_file_config() -> FileConfig {
    let Some(path) = config_file_path() else {
        return FileConfig::default();
    };
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return FileConfig::default();
    };
    toml::from_str(&contents).unwrap_or_default()
}
