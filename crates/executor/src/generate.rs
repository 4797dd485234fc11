//! Random sequence generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracesort_core::Number;

/// Smallest generated value.
pub const MIN_VALUE: i64 = 10;

/// Largest generated value.
pub const MAX_VALUE: i64 = 409;

/// Fill a sequence of `size` integers drawn uniformly from
/// `MIN_VALUE..=MAX_VALUE`.
pub fn random_sequence<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<Number> {
    (0..size)
        .map(|_| Number::Int(rng.gen_range(MIN_VALUE..=MAX_VALUE)))
        .collect()
}

/// Random sequence, reproducible when `seed` is given.
pub fn generate(size: usize, seed: Option<u64>) -> Vec<Number> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    random_sequence(size, &mut rng)
}
