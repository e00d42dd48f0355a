//! Runtime settings and logging bootstrap.
//!
//! Settings are layered: built-in defaults, then an optional file (any format
//! the `config` crate recognises by extension), then `TRISTATE_*` environment
//! variables, e.g. `TRISTATE_WORKER_POOL_SIZE=8`.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::{Result, TristateError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `EnvFilter` directives, used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub worker_pool_size: usize,
    /// How long closing a worker pool waits for queued tasks.
    pub shutdown_grace_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            worker_pool_size: 4,
            shutdown_grace_ms: 5000,
        }
    }
}

impl Settings {
    /// Defaults, then `file` if given (it must exist), then the environment.
    pub fn load(file: Option<&str>) -> Result<Self> {
        let mut builder = defaults()?;
        if let Some(path) = file {
            builder = builder.add_source(File::with_name(path).required(true));
        }
        finish(builder)
    }
    /// Defaults, then TOML text, then the environment.
    pub fn from_toml(text: &str) -> Result<Self> {
        finish(defaults()?.add_source(File::from_str(text, FileFormat::Toml)))
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    let d = Settings::default();
    Ok(Config::builder()
        .set_default("log_filter", d.log_filter)?
        .set_default("worker_pool_size", d.worker_pool_size as i64)?
        .set_default("shutdown_grace_ms", d.shutdown_grace_ms as i64)?)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Settings> {
    let settings: Settings = builder
        .add_source(Environment::with_prefix("TRISTATE").try_parsing(true))
        .build()?
        .try_deserialize()?;
    if settings.worker_pool_size == 0 {
        return Err(TristateError::Config(
            "worker_pool_size must be at least 1".to_string(),
        ));
    }
    Ok(settings)
}

/// Installs the global `fmt` subscriber. Returns false when one was already
/// installed, which is not an error.
pub fn init_tracing(settings: &Settings) -> Result<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.log_filter)
            .map_err(|e| TristateError::Config(format!("invalid log filter: {}", e)))?,
    };
    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok())
}
