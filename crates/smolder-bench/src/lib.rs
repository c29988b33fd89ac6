//! Benchmark profiles and input builders for the smolder solver.
//!
//! Provides deterministic field constructors shared by the criterion
//! benches:
//!
//! - [`spike_field`]: zeros with a single hot sample at the center
//! - [`noisy_field`]: seeded pseudo-random samples in `[0, 100)`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Build a spike field: all zeros with a single 100-degree sample at
/// the center index.
pub fn spike_field(samples: usize) -> Vec<f32> {
    let mut field = vec![0.0f32; samples];
    if samples > 0 {
        field[samples / 2] = 100.0;
    }
    field
}

/// Build a deterministic pseudo-random field in `[0, 100)`.
///
/// Same seed, same field — benches stay comparable across runs.
pub fn noisy_field(samples: usize, seed: u64) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..samples).map(|_| rng.random_range(0.0..100.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spike_field_has_one_hot_sample() {
        let field = spike_field(101);
        assert_eq!(field.iter().filter(|&&v| v != 0.0).count(), 1);
        assert_eq!(field[50], 100.0);
    }

    #[test]
    fn noisy_field_is_deterministic_per_seed() {
        assert_eq!(noisy_field(64, 42), noisy_field(64, 42));
        assert_ne!(noisy_field(64, 42), noisy_field(64, 43));
    }
}
