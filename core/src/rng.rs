//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through StreamRng instances derived
//! from the single seed on the GeneratorConfig.
//!
//! Each generation concern gets its own stream, seeded from
//! (seed XOR stream_index * golden ratio). This means:
//!   - Drawing more identity values never shifts usage or label draws.
//!   - Each stream is fully reproducible in isolation.

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single generation concern.
pub struct StreamRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl StreamRng {
    /// Create a stream RNG from the run seed and a stable
    /// stream index. The index must never change once assigned.
    pub fn new(seed: u64, stream_index: u64) -> Self {
        let derived_seed = seed ^ (stream_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.gen_range(0..n)
    }

    /// Roll an integer in [lo, hi], both ends inclusive.
    pub fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        assert!(lo <= hi, "empty range {lo}..={hi}");
        self.inner.gen_range(lo..=hi)
    }

    /// Roll a float in [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Pick an index according to relative weights (cumulative roll).
    /// Falls back to the last index if rounding leaves the roll uncovered.
    pub fn weighted_index(&mut self, weights: &[f64]) -> usize {
        assert!(!weights.is_empty(), "weights must not be empty");
        let total: f64 = weights.iter().sum();
        let roll = self.next_f64() * total;
        let mut cumulative = 0.0;
        for (i, w) in weights.iter().enumerate() {
            cumulative += w;
            if roll < cumulative {
                return i;
            }
        }
        weights.len() - 1
    }

    /// Pick one element uniformly.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_u64_below(items.len() as u64) as usize]
    }
}

/// All stream RNGs for a single run, indexed by stable slot.
pub struct RngBank {
    seed: u64,
}

impl RngBank {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn for_stream(&self, slot: StreamSlot) -> StreamRng {
        log::debug!("seeding stream '{}' from run seed {}", slot.name(), self.seed);
        StreamRng::new(self.seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries, only append.
/// Reordering changes every stream's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Identity = 0,
    Usage = 1,
    Label = 2,
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Usage => "usage",
            Self::Label => "label",
        }
    }
}

/// Seed used when the config does not pin one.
pub fn seed_from_clock() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let bank = RngBank::new(12345);
        let mut a = bank.for_stream(StreamSlot::Usage);
        let mut b = bank.for_stream(StreamSlot::Usage);
        for _ in 0..100 {
            assert_eq!(a.int_inclusive(0, 1000), b.int_inclusive(0, 1000));
        }
    }

    #[test]
    fn slots_are_independent_streams() {
        let bank = RngBank::new(12345);
        let mut usage = bank.for_stream(StreamSlot::Usage);
        let mut label = bank.for_stream(StreamSlot::Label);
        let a: Vec<u32> = (0..16).map(|_| usage.int_inclusive(0, u32::MAX - 1)).collect();
        let b: Vec<u32> = (0..16).map(|_| label.int_inclusive(0, u32::MAX - 1)).collect();
        assert_ne!(a, b, "Different slots should not share a stream");
    }

    #[test]
    fn int_inclusive_hits_both_ends() {
        let mut rng = StreamRng::new(7, 0);
        let draws: Vec<u32> = (0..2000).map(|_| rng.int_inclusive(0, 6)).collect();
        assert!(draws.iter().all(|d| *d <= 6));
        assert!(draws.contains(&0), "lower bound never drawn");
        assert!(draws.contains(&6), "upper bound never drawn");
    }

    #[test]
    fn chance_edges() {
        let mut rng = StreamRng::new(99, 2);
        for _ in 0..1000 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn weighted_index_respects_zero_weight() {
        let mut rng = StreamRng::new(3, 1);
        for _ in 0..1000 {
            assert_ne!(rng.weighted_index(&[0.5, 0.0, 0.5]), 1);
        }
    }
}
