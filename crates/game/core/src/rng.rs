//! RNG oracle for seedable random number generation.
//!
//! Level layout, adversary re-targeting and blocked-facing rolls all draw from
//! an [`RngOracle`]. Given the same seed, [`PcgRng`] produces the same
//! sequence, so a session can be replayed from its logged seed and tests can
//! pin down exact outcomes.

/// Source of random draws for the game rules.
pub trait RngOracle {
    /// Generate the next random u32 value.
    fn next_u32(&mut self) -> u32;

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&mut self) -> u32 {
        (self.next_u32() % 100) + 1
    }

    /// Returns true with roughly `percent` in 100 odds.
    fn chance(&mut self, percent: u32) -> bool {
        self.roll_d100() <= percent
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32() % range)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 32-bit output from 64-bit state.
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn seeded(seed: u64) -> Self {
        Self {
            state: mix_seed(seed),
        }
    }

    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// SplitMix64 finalizer so nearby seeds (0, 1, 2, ...) start far apart.
fn mix_seed(seed: u64) -> u64 {
    let mut hash = seed.wrapping_add(0x9e3779b97f4a7c15);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;
    hash
}
