//! Character pool building for password generation.

use std::collections::BTreeMap;

use tracing::debug;

use super::{CharacterClass, ConfigError, GenerationConfig};

/// Characters that are easy to misread for one another.
pub const AMBIGUOUS: &[char] = &['i', 'l', '1', 'L', 'o', '0', 'O'];

/// Ambiguous characters plus the pipe and backtick.
pub const SIMILAR: &[char] = &['i', 'l', '1', 'L', 'o', '0', 'O', '|', '`'];

/// Allowed characters per enabled class, and their union.
///
/// Exclusions are already applied. The full pool is ordered by class
/// enumeration order, then alphabet order within each class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    sub_pools: BTreeMap<CharacterClass, Vec<char>>,
    full: Vec<char>,
}

impl Pool {
    /// Sub-pool for `class`. Empty for disabled classes.
    pub fn sub_pool(&self, class: CharacterClass) -> &[char] {
        self.sub_pools.get(&class).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn chars(&self) -> &[char] {
        &self.full
    }

    pub fn len(&self) -> usize {
        self.full.len()
    }

    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }

    /// Entropy estimate in bits for a uniformly drawn password of `length`.
    pub fn entropy_bits(&self, length: usize) -> f64 {
        if self.full.is_empty() {
            return 0.0;
        }
        length as f64 * (self.full.len() as f64).log2()
    }
}

/// Build the pool for `config`, validating it in the process.
pub fn build(config: &GenerationConfig) -> Result<Pool, ConfigError> {
    if config.enabled_classes.is_empty() {
        return Err(ConfigError::NoClassesSelected);
    }

    // Each filter tests membership independently, so overlapping sets never
    // remove anything twice.
    let excluded = |c: char| {
        (config.exclude_ambiguous && AMBIGUOUS.contains(&c))
            || (config.exclude_similar && SIMILAR.contains(&c))
            || config.custom_excluded_chars.contains(&c)
    };

    let sub_pools: BTreeMap<CharacterClass, Vec<char>> = config
        .enabled_classes
        .iter()
        .map(|&class| {
            let chars: Vec<char> = class.alphabet().chars().filter(|&c| !excluded(c)).collect();
            (class, chars)
        })
        .collect();

    let full: Vec<char> = sub_pools.values().flatten().copied().collect();

    if full.is_empty() {
        return Err(ConfigError::EmptyPool);
    }

    if let Some((&class, _)) = sub_pools
        .iter()
        .find(|&(&class, chars)| chars.is_empty() && config.minimum(class) > 0)
    {
        return Err(ConfigError::ClassExhausted(class));
    }

    let total = config.total_minimum();
    if total > config.length() {
        return Err(ConfigError::MinimumsExceedLength(total, config.length()));
    }

    for (class, chars) in &sub_pools {
        debug!(%class, size = chars.len(), "sub-pool built");
    }
    debug!(size = full.len(), "pool built");

    Ok(Pool { sub_pools, full })
}
