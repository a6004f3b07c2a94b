//! User settings loaded from `config.toml`.

use crate::error::{AppError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

/// Where the initial caps-lock state comes from.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CapsLockSource {
    /// Ask the host at startup.
    #[default]
    Host,
    On,
    Off,
}

impl FromStr for CapsLockSource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "host" => Ok(CapsLockSource::Host),
            "on" => Ok(CapsLockSource::On),
            "off" => Ok(CapsLockSource::Off),
            other => Err(AppError::InvalidArgument(format!(
                "invalid caps-lock value '{}' (expected on, off or host)",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input: InputConfig,
    #[cfg_attr(not(feature = "gui"), allow(dead_code))]
    pub window: WindowConfig,
    pub log: LogConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub caps_lock: CapsLockSource,
    /// Terminal host: request modifier and lock key events from the terminal.
    pub keyboard_enhancement: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            caps_lock: CapsLockSource::Host,
            keyboard_enhancement: true,
        }
    }
}

/// Desktop host window size.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 450.0,
            height: 300.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `EnvFilter` directive, overridden by `QWERTYPE_LOG`.
    pub filter: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
        }
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("org", "qwertype", "qwertype")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

fn read_config_file(path: &Path) -> Result<String> {
    let meta = std::fs::metadata(path)?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(AppError::Config {
            path: path.to_path_buf(),
            message: format!(
                "file too large ({} bytes, max {})",
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Load settings.
///
/// An explicit path must exist and parse. The default path is optional;
/// problems with it are returned as warnings and defaults are used.
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, Vec<String>)> {
    if let Some(path) = explicit {
        let content = read_config_file(path).map_err(|e| match e {
            AppError::Io(io) => AppError::Config {
                path: path.to_path_buf(),
                message: io.to_string(),
            },
            other => other,
        })?;
        let config = parse_config(&content).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        return Ok((config, Vec::new()));
    }

    let mut warnings = Vec::new();
    let Some(path) = user_config_path() else {
        return Ok((Config::default(), warnings));
    };
    if !path.exists() {
        return Ok((Config::default(), warnings));
    }
    let config = match read_config_file(&path).and_then(|content| parse_config(&content)) {
        Ok(config) => config,
        Err(err) => {
            warnings.push(format!("Ignoring {}: {}", path.display(), err));
            Config::default()
        }
    };
    Ok((config, warnings))
}
