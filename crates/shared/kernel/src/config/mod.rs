use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default configuration file stem, resolved relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "ccrm";
/// Environment prefix for overrides (`CCRM__RECORDS__DATA_DIR`).
pub const ENV_PREFIX: &str = "CCRM";

/// Custom error type for config loading.
#[ccrm_derive::ccrm_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered with environment overrides.
///
/// 1. **Base File**: `path`, or [`DEFAULT_CONFIG_FILE`] when `None`. The `config` crate
///    picks the format from the extension (`ccrm.toml`, `ccrm.json`, ...).
/// 2. **Environment Overrides**: variables prefixed with `CCRM__`, nested with `__`
///    (e.g., `CCRM__RECORDS__MAX_CREDITS_PER_STUDENT=18` maps to `records.max_credits_per_student`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, unreadable, or does not
/// deserialize into `T`.
///
/// # Example
/// ```rust
/// use ccrm_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct ShellConfig {
///     verbose: bool,
/// }
///
/// let cfg: ShellConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!(path = %effective_path.display(), "Loading configuration");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
