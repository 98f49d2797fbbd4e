//! Seeded RNG construction shared by the runners.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from an explicit seed.
///
/// Every run owns its own generator instance; nothing in this crate
/// shares generator state across runs.
pub(crate) fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
