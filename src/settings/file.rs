//! Settings file persistence.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Settings, SettingsError};

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    Path::new(&home).join(".config/classpass/settings.toml")
}

pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let settings = toml::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    let io_err = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let text = toml::to_string_pretty(settings)?;
    fs::write(path, text).map_err(io_err)?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}
