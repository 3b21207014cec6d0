//! Persisted generation defaults.

mod file;

use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::pass::{CharacterClass, GenerationConfig};

pub use file::default_path;

/// Most passwords one run generates.
pub const MAX_COUNT: usize = 10_000;

/// Largest per-class minimum accepted from the command line.
pub const MAX_MINIMUM: usize = 128;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to encode settings: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("Password length must be at least 1")]
    ZeroLength,
}

/// Which random source generation uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RngKind {
    /// Cycle-counter mixer, not cryptographically secure
    #[default]
    Fast,
    /// Operating system CSPRNG
    Secure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub count: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub enforce_minimums: bool,
    pub min_uppercase: usize,
    pub min_lowercase: usize,
    pub min_digits: usize,
    pub min_symbols: usize,
    pub exclude_ambiguous: bool,
    pub exclude_similar: bool,
    pub exclude: String,
    pub rng: RngKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 16,
            count: 1,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            enforce_minimums: true,
            min_uppercase: 1,
            min_lowercase: 1,
            min_digits: 1,
            min_symbols: 1,
            exclude_ambiguous: false,
            exclude_similar: false,
            exclude: String::new(),
            rng: RngKind::Fast,
        }
    }
}

impl Settings {
    /// Load from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }

    fn enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Digit => self.digits,
            CharacterClass::Symbol => self.symbols,
        }
    }

    fn min(&self, class: CharacterClass) -> usize {
        match class {
            CharacterClass::Uppercase => self.min_uppercase,
            CharacterClass::Lowercase => self.min_lowercase,
            CharacterClass::Digit => self.min_digits,
            CharacterClass::Symbol => self.min_symbols,
        }
    }

    /// Generation config for these settings.
    ///
    /// With `enforce_minimums` off every minimum becomes 0.
    pub fn to_config(&self) -> Result<GenerationConfig, SettingsError> {
        let length = NonZeroUsize::new(self.length).ok_or(SettingsError::ZeroLength)?;

        let classes: BTreeSet<CharacterClass> = CharacterClass::ALL
            .into_iter()
            .filter(|&c| self.enabled(c))
            .collect();

        let mut config = GenerationConfig::new(length)
            .with_classes(classes)
            .with_exclude_ambiguous(self.exclude_ambiguous)
            .with_exclude_similar(self.exclude_similar)
            .with_excluded_chars(&self.exclude);

        if self.enforce_minimums {
            for class in CharacterClass::ALL {
                config = config.with_minimum(class, self.min(class));
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_a_valid_config() {
        let config = Settings::default().to_config().unwrap();
        assert_eq!(config.length(), 16);
        assert_eq!(config.total_minimum(), 4);
        assert!(crate::pass::build(&config).is_ok());
    }

    #[test]
    fn disabled_classes_are_dropped() {
        let settings = Settings {
            digits: false,
            symbols: false,
            ..Default::default()
        };
        let config = settings.to_config().unwrap();
        assert_eq!(
            config.enabled_classes.iter().copied().collect::<Vec<_>>(),
            [CharacterClass::Uppercase, CharacterClass::Lowercase]
        );
        assert_eq!(config.total_minimum(), 2);
    }

    #[test]
    fn unenforced_minimums_are_zero() {
        let settings = Settings {
            length: 4,
            min_uppercase: 9,
            enforce_minimums: false,
            ..Default::default()
        };
        let config = settings.to_config().unwrap();
        assert_eq!(config.total_minimum(), 0);
        assert!(crate::pass::build(&config).is_ok());
    }

    #[test]
    fn oversized_minimum_from_file_fails_validation() {
        let settings = Settings {
            min_uppercase: usize::MAX,
            ..Default::default()
        };
        let config = settings.to_config().unwrap();
        assert_eq!(
            crate::pass::build(&config).unwrap_err(),
            crate::pass::ConfigError::MinimumsExceedLength(usize::MAX, 16)
        );
    }

    #[test]
    fn zero_length_rejected() {
        let settings = Settings {
            length: 0,
            ..Default::default()
        };
        assert!(matches!(settings.to_config(), Err(SettingsError::ZeroLength)));
    }

    #[test]
    fn exclusions_carry_over() {
        let settings = Settings {
            exclude_ambiguous: true,
            exclude: "xyz".into(),
            ..Default::default()
        };
        let config = settings.to_config().unwrap();
        assert!(config.exclude_ambiguous);
        assert!(!config.exclude_similar);
        assert_eq!(config.custom_excluded_chars.len(), 3);
    }
}
