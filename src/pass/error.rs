use super::CharacterClass;

/// Reasons a configuration cannot produce a password.
///
/// All are detected by [`build`](super::pool::build) before any randomness is
/// consumed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Please select at least one character type")]
    NoClassesSelected,

    #[error("No characters available for password generation")]
    EmptyPool,

    #[error("Exclusions remove every {0} character, but at least one is required")]
    ClassExhausted(CharacterClass),

    #[error("Minimum character requirements ({0}) exceed password length ({1})")]
    MinimumsExceedLength(usize, usize),
}
