use arcade_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[arcade_derive::arcade_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads layered configuration: an optional file, then `ARCADE__*` environment overrides.
///
/// 1. **File**: `path` (default `server`). The extension may be omitted; `config` probes
///    `server.toml`, `server.json`, `server.yaml`, ... A missing file is not an error, so
///    the server runs on defaults out of the box.
/// 2. **Environment**: variables prefixed with `ARCADE__`, nested with `__`
///    (`ARCADE__SERVER__PORT=8080` sets `server.port`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when a source is malformed or the merged values do
/// not deserialize into `T`.
///
/// # Example
/// ```rust
/// use arcade_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// # let _ = cfg.port;
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?;

    debug!("Config sources merged");

    config.try_deserialize::<T>().context("Failed to deserialize config")
}
