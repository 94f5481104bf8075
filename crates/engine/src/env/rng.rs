//! Deterministic random number generation.
//!
//! Every apparent source of randomness in a battle (spawn positions, move
//! directions, ability targeting, map choice) flows through a single
//! injectable [`RngSource`]. Implementations must be deterministic: the
//! same seed always yields the same value, which makes whole battles
//! replayable from one base seed.

/// Stateless RNG oracle.
///
/// The oracle derives each value from an explicit seed instead of carrying
/// mutable state, so callers control exactly which draw happens where.
pub trait RngSource: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform value in `[min, max]` inclusive.
    fn range_i32(&self, seed: u64, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (max - min + 1) as u32;
        min + (self.next_u32(seed) % span) as i32
    }

    /// Uniform index into a collection of `len` elements.
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.next_u32(seed) as usize % len
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: a 64-bit LCG step followed by an xorshift and a random
/// rotation. Small state, fast, and good statistical quality, which is all
/// a combat simulator needs.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngSource for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Compute a per-draw seed from battle state components.
///
/// Combines the battle seed, the action counter, the acting unit, and a
/// per-roll context so every random event in a battle gets its own seed.
/// Constants are SplitMix64/FxHash mixers.
pub fn compute_seed(battle_seed: u64, nonce: u64, unit_id: u32, context: u32) -> u64 {
    let mut hash = battle_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (unit_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Roll helper bound to one action.
///
/// Wraps the oracle with the seed components fixed for the current action;
/// abilities only supply a per-roll `context` so multiple draws inside one
/// action stay independent.
pub struct Roll<'a> {
    rng: &'a dyn RngSource,
    battle_seed: u64,
    nonce: u64,
    unit_id: u32,
}

impl<'a> Roll<'a> {
    pub fn new(rng: &'a dyn RngSource, battle_seed: u64, nonce: u64, unit_id: u32) -> Self {
        Self {
            rng,
            battle_seed,
            nonce,
            unit_id,
        }
    }

    fn seed(&self, context: u32) -> u64 {
        compute_seed(self.battle_seed, self.nonce, self.unit_id, context)
    }

    /// Uniform value in `[min, max]` inclusive.
    pub fn range_i32(&self, context: u32, min: i32, max: i32) -> i32 {
        self.rng.range_i32(self.seed(context), min, max)
    }

    /// Uniform direction: -1 or +1.
    pub fn coin(&self, context: u32) -> i32 {
        if self.rng.next_u32(self.seed(context)) % 2 == 0 {
            -1
        } else {
            1
        }
    }

    /// Uniform index into a collection of `len` elements.
    pub fn pick(&self, context: u32, len: usize) -> usize {
        self.rng.pick_index(self.seed(context), len)
    }
}
