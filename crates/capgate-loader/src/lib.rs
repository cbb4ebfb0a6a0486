//! Config file adapters: resolve the config source, read it, and produce the
//! normalized snapshot.
//!
//! This is the only crate in the workspace allowed to do filesystem IO.
//! Parsing and validation are delegated to `capgate-settings`.

#![forbid(unsafe_code)]

mod error;
mod load;

pub use error::LoadError;
pub use load::{
    CONFIG_PATH_ENV, ConfigSource, DEFAULT_CONFIG_FILE, LoadedConfig, load_config, load_config_at,
    resolve_config_path, resolve_config_path_from,
};
