//! Password generation.

use std::fmt;

use tracing::{debug, trace};
use zeroize::Zeroize;

use super::{GenerationConfig, Pool};
use crate::rand::RandomSource;

/// A generated password. The buffer is wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password({} chars)", self.len())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Generate one password.
///
/// Draws each enabled class's minimum from its sub-pool, fills the rest from
/// the full pool, then shuffles so the guaranteed characters land anywhere.
/// Draws are with replacement. `pool` should come from
/// [`build`](super::pool::build) on the same `config`; a minimum whose
/// sub-pool is empty is skipped and its share comes from the full pool.
pub fn generate<R>(config: &GenerationConfig, pool: &Pool, rng: &mut R) -> Password
where
    R: RandomSource + ?Sized,
{
    let length = config.length();
    let mut working: Vec<char> = Vec::with_capacity(length);

    for &class in &config.enabled_classes {
        let minimum = config.minimum(class);
        if minimum == 0 {
            continue;
        }
        let sub_pool = pool.sub_pool(class);
        if sub_pool.is_empty() {
            debug!(%class, minimum, "no characters left for class minimum, skipping");
            continue;
        }
        working.extend((0..minimum).map(|_| rng.pick(sub_pool)));
        trace!(%class, minimum, "drew class minimum");
    }

    let remaining = length.saturating_sub(working.len());
    if remaining > 0 {
        working.extend((0..remaining).map(|_| rng.pick(pool.chars())));
        trace!(remaining, "filled from full pool");
    }

    rng.shuffle(&mut working);
    working.truncate(length);

    let password = Password(working.iter().collect());
    working.zeroize();
    password
}

/// Generate `count` passwords from one pool.
pub fn generate_batch<R>(
    config: &GenerationConfig,
    pool: &Pool,
    rng: &mut R,
    count: usize,
) -> Vec<Password>
where
    R: RandomSource + ?Sized,
{
    (0..count).map(|_| generate(config, pool, rng)).collect()
}
