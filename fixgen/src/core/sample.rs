//! Drawing the sample sequence and deriving its sorted copy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build the generator used for a draw.
pub fn rng_from_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Pick a fresh seed from the OS-seeded thread-local generator.
///
/// Unseeded runs go through here so every run is independent while the seed
/// can still be logged and replayed.
pub fn entropy_seed() -> u64 {
    rand::random()
}

/// Draw `count` independent values, each uniform in `[0, max_value]`,
/// in draw order.
pub fn draw_sample<R: Rng + ?Sized>(rng: &mut R, count: usize, max_value: i64) -> Vec<i64> {
    std::iter::repeat_with(|| rng.gen_range(0..=max_value))
        .take(count)
        .collect()
}

/// Return a new sequence with the same values in non-decreasing order.
pub fn sorted_copy(sample: &[i64]) -> Vec<i64> {
    let mut sorted = sample.to_vec();
    sorted.sort_unstable();
    sorted
}
