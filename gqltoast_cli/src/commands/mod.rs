//! CLI subcommand implementations.

pub mod classify;
pub mod diagnose;
pub mod render;

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gqltoast_lib::config::CONFIG_ENV_VAR;
use gqltoast_lib::ToastConfig;

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Flag(PathBuf),
    Env(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(path) => write!(f, "{} (--config)", path.display()),
            Self::Env(path) => write!(f, "{} (${})", path.display(), CONFIG_ENV_VAR),
            Self::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// `--config` first, then the environment variable, then defaults.
pub fn load_config(flag: Option<&Path>) -> Result<(ToastConfig, ConfigSource)> {
    let source = match flag {
        Some(path) => ConfigSource::Flag(path.to_path_buf()),
        None => match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => ConfigSource::Env(PathBuf::from(path)),
            _ => ConfigSource::Defaults,
        },
    };

    let config = match &source {
        ConfigSource::Flag(path) | ConfigSource::Env(path) => ToastConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        ConfigSource::Defaults => ToastConfig::default(),
    };
    Ok((config, source))
}
