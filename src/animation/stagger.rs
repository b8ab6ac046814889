//! Stagger offsets for cascading layer animations.
//!
//! # Invariants
//!
//! 1. `stagger_offsets(0, ..)` returns an empty vec.
//! 2. offset[i] = base + i * delay.

use std::time::Duration;

/// Start offsets for `count` items, the first one starting at `base`.
#[must_use]
pub fn stagger_offsets(count: usize, base: Duration, delay: Duration) -> Vec<Duration> {
    (0..count)
        .map(|i| base.saturating_add(delay.saturating_mul(i as u32)))
        .collect()
}
