//! Random sources for password generation.
//!
//! The generator only ever sees a [`RandomSource`]. Three are provided:
//!
//! - [`Rand`]: fast, non-cryptographic, mixes the CPU cycle counter into a
//!   SplitMix-finalized state on every draw.
//! - [`RngSource::secure`]: the operating system CSPRNG.
//! - [`RngSource::seeded`]: a seeded `StdRng`, reproducible across runs.

mod hw;

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use zeroize::Zeroize;

/// Uniform choice and permutation over characters.
///
/// Implementations need only provide [`below`](RandomSource::below); `pick`
/// and `shuffle` are derived from it. A source is used from one thread at a
/// time; give each thread its own instance.
pub trait RandomSource {
    /// Uniform integer in `0..bound`. `bound` is never zero.
    fn below(&mut self, bound: usize) -> usize;

    /// Uniform element of a non-empty pool.
    fn pick(&mut self, pool: &[char]) -> char {
        pool[self.below(pool.len())]
    }

    /// Uniform permutation in place (Fisher-Yates).
    fn shuffle(&mut self, chars: &mut [char]) {
        for i in (1..chars.len()).rev() {
            let j = self.below(i + 1);
            chars.swap(i, j);
        }
    }

    /// Short name for display.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }

    fn pick(&mut self, pool: &[char]) -> char {
        (**self).pick(pool)
    }

    fn shuffle(&mut self, chars: &mut [char]) {
        (**self).shuffle(chars)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

// =============================================================================
// Fast hardware-entropy mixer
// =============================================================================

const PRIMES: [u64; 11] = [
    6_700_417,
    999_999_937,
    1_000_000_007,
    1_000_000_009,
    2_147_483_647,
    4_294_967_291,
    4_294_967_311,
    998_244_353,
    67_280_421_310_721,
    2_305_843_009_213_693_951,
    18_446_744_073_709_551_557,
];

/// Non-cryptographic generator seeded and re-mixed from the cycle counter.
pub struct Rand {
    state: u64,
}

impl Rand {
    pub fn new() -> Self {
        Self { state: hw::entropy() }
    }

    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        let ent = hw::entropy();

        // Mix entropy into prime selection
        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % PRIMES.len() as u64) as usize;

        // State transition: rotate, multiply by prime, XOR entropy
        self.state = self.state.rotate_left(17).wrapping_mul(PRIMES[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl Default for Rand {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for Rand {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        // Multiply-high maps a u64 onto 0..bound without a modulo.
        ((self.next_u64() as u128 * bound as u128) >> 64) as usize
    }

    fn name(&self) -> &'static str {
        hw::source_name()
    }
}

impl Drop for Rand {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

// =============================================================================
// `rand` crate adapters
// =============================================================================

/// Adapts any [`RngCore`] into a [`RandomSource`].
pub struct RngSource<R> {
    rng: R,
    name: &'static str,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R, name: &'static str) -> Self {
        Self { rng, name }
    }
}

impl RngSource<OsRng> {
    /// Operating system CSPRNG.
    pub fn secure() -> Self {
        Self::new(OsRng, "os csprng")
    }
}

impl RngSource<StdRng> {
    /// Deterministic source: the same seed yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), "seeded")
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn below(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rand_below_stays_in_range() {
        let mut rng = Rand::new();
        for bound in [1, 2, 7, 94, 1000] {
            for _ in 0..200 {
                assert!(rng.below(bound) < bound);
            }
        }
    }

    #[test]
    fn rand_covers_small_range() {
        let mut rng = Rand::new();
        let mut seen = [false; 4];
        for _ in 0..1000 {
            seen[rng.below(4)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn seeded_sources_repeat() {
        let pool: Vec<char> = "abcdefghij".chars().collect();
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        let xs: String = (0..32).map(|_| a.pick(&pool)).collect();
        let ys: String = (0..32).map(|_| b.pick(&pool)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = RngSource::seeded(7);
        let original: Vec<char> = "AAbc12!?".chars().collect();
        let mut chars = original.clone();
        rng.shuffle(&mut chars);

        let mut sorted = chars.clone();
        sorted.sort_unstable();
        let mut expected = original;
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn shuffle_handles_tiny_inputs() {
        let mut rng = Rand::new();
        let mut empty: Vec<char> = Vec::new();
        rng.shuffle(&mut empty);
        let mut one = vec!['x'];
        rng.shuffle(&mut one);
        assert_eq!(one, ['x']);
    }

    #[test]
    fn boxed_source_delegates() {
        let mut boxed: Box<dyn RandomSource> = Box::new(RngSource::seeded(1));
        assert_eq!(boxed.name(), "seeded");
        assert!(boxed.below(3) < 3);
    }

    #[test]
    fn secure_source_picks_from_pool() {
        let pool = ['x', 'y'];
        let mut rng = RngSource::secure();
        for _ in 0..50 {
            assert!(pool.contains(&rng.pick(&pool)));
        }
    }
}
