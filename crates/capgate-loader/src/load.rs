use crate::error::LoadError;
use camino::{Utf8Path, Utf8PathBuf};
use capgate_domain::policy::GateConfig;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "CAPGATE_CONFIG";

/// Default config filename, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "capgate.json";

/// Where a loaded configuration came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// No file at the resolved path; built-in defaults are in effect.
    Default,
    /// Loaded from this file.
    File(Utf8PathBuf),
}

/// A loaded configuration plus its provenance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: GateConfig,
    pub source: ConfigSource,
}

/// Resolve the config source path: explicit argument, else the
/// `CAPGATE_CONFIG` environment variable, else `capgate.json` in the
/// current working directory.
pub fn resolve_config_path(explicit: Option<&Utf8Path>) -> Utf8PathBuf {
    let env_value = std::env::var(CONFIG_PATH_ENV).ok();
    resolve_config_path_from(explicit, env_value.as_deref())
}

/// [`resolve_config_path`] with the environment value injected. Pure.
pub fn resolve_config_path_from(
    explicit: Option<&Utf8Path>,
    env_value: Option<&str>,
) -> Utf8PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match env_value {
        Some(value) if !value.trim().is_empty() => Utf8PathBuf::from(value),
        _ => Utf8PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}

/// Load the configuration for this process.
///
/// A missing file is never an error: the default "everything enabled"
/// configuration is returned. All other failures abort the load; no partial
/// configuration is ever produced.
pub fn load_config(explicit: Option<&Utf8Path>) -> Result<LoadedConfig, LoadError> {
    let path = resolve_config_path(explicit);
    load_config_at(&path)
}

/// Load from an already-resolved path.
///
/// Whitespace-only contents behave like a missing file (defaults apply),
/// keeping a freshly `touch`ed config equivalent to no config.
pub fn load_config_at(path: &Utf8Path) -> Result<LoadedConfig, LoadError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(LoadedConfig {
                config: GateConfig::all_enabled(),
                source: ConfigSource::Default,
            });
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if text.trim().is_empty() {
        return Ok(LoadedConfig {
            config: GateConfig::all_enabled(),
            source: ConfigSource::File(path.to_path_buf()),
        });
    }

    let value = capgate_settings::parse_config_json(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let model =
        capgate_settings::validate_config_value(&value).map_err(|issues| LoadError::Validation {
            path: path.to_path_buf(),
            issues,
        })?;

    Ok(LoadedConfig {
        config: capgate_settings::resolve_config(model),
        source: ConfigSource::File(path.to_path_buf()),
    })
}
