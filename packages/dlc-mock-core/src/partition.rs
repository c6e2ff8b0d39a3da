//! Randomized proportional partitioning.
//!
//! One parameterized routine splits a total into k parts at every level of
//! the hierarchy; a deterministic companion splits an already-known
//! `completed` count across those parts without re-randomizing it.

use rand::Rng;

use crate::error::GenError;

/// Half-open fraction range [lo, hi) sampled at each split step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionRange {
    /// Inclusive lower bound
    pub lo: f64,
    /// Exclusive upper bound
    pub hi: f64,
}

impl FractionRange {
    /// Checks `0.0 <= lo < hi <= 1.0`.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.lo.is_finite() && self.hi.is_finite() && 0.0 <= self.lo && self.lo < self.hi && self.hi <= 1.0
        {
            Ok(())
        } else {
            Err(GenError::InvalidFractionRange {
                lo: self.lo,
                hi: self.hi,
            })
        }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.lo..self.hi)
    }
}

/// Splits `total` into exactly `k` non-negative parts summing to `total`.
///
/// Each of the first k-1 parts takes `floor(remaining * f)` for a fraction
/// f drawn from `range`; the last part absorbs the remainder. Fractions are
/// strictly below 1, so no step can overdraw and the final part is never
/// negative.
///
/// `k == 1` returns `[total]` without touching the random source.
pub fn partition<R: Rng>(
    rng: &mut R,
    total: u64,
    k: usize,
    range: FractionRange,
) -> Result<Vec<u64>, GenError> {
    if k == 0 {
        return Err(GenError::InvalidSplitCount);
    }
    range.validate()?;
    if k == 1 {
        return Ok(vec![total]);
    }

    let mut parts = Vec::with_capacity(k);
    let mut remaining = total;
    for _ in 0..k - 1 {
        let share = (remaining as f64 * range.sample(rng)).floor() as u64;
        parts.push(share);
        remaining -= share;
    }
    parts.push(remaining);
    Ok(parts)
}

/// Splits `parent_completed` across sub-totals proportionally.
///
/// Each child starts with `floor(parent_completed * total_i / T)`; leftover
/// units are handed left-to-right to children with spare capacity. The
/// result sums exactly to `parent_completed` and never exceeds any child's
/// total, so `pending = total - completed` stays non-negative everywhere.
pub fn partition_completed(totals: &[u64], parent_completed: u64) -> Result<Vec<u64>, GenError> {
    if totals.is_empty() {
        return Err(GenError::InvalidSplitCount);
    }
    let parent_total: u64 = totals.iter().sum();
    if parent_completed > parent_total {
        return Err(GenError::CompletedExceedsTotal {
            completed: parent_completed,
            total: parent_total,
        });
    }
    if parent_total == 0 {
        return Ok(vec![0; totals.len()]);
    }

    let mut completed: Vec<u64> = totals
        .iter()
        .map(|&t| (parent_completed as u128 * t as u128 / parent_total as u128) as u64)
        .collect();

    let mut leftover = parent_completed - completed.iter().sum::<u64>();
    for (c, &t) in completed.iter_mut().zip(totals) {
        if leftover == 0 {
            break;
        }
        let take = leftover.min(t - *c);
        *c += take;
        leftover -= take;
    }
    // Capacity equals parent_total - parent_completed >= 0, so the loop
    // always places every leftover unit.
    debug_assert_eq!(leftover, 0);

    Ok(completed)
}

/// Derives a completion count from a total: `floor(total * f)`, f ∈ range.
pub fn draw_completed<R: Rng>(rng: &mut R, total: u64, range: FractionRange) -> u64 {
    (total as f64 * range.sample(rng)).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const RANGE: FractionRange = FractionRange { lo: 0.15, hi: 0.55 };

    #[test]
    fn test_partition_sums_exactly() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for total in [0u64, 1, 2, 17, 100, 399, 10_000] {
            for k in 1..=8usize {
                let parts = partition(&mut rng, total, k, RANGE).unwrap();
                assert_eq!(parts.len(), k);
                assert_eq!(parts.iter().sum::<u64>(), total, "total={total} k={k}");
            }
        }
    }

    #[test]
    fn test_partition_zero_total_propagates_zeros() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let parts = partition(&mut rng, 0, 5, RANGE).unwrap();
        assert_eq!(parts, vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_partition_k1_short_circuits_without_randomness() {
        let mut used = ChaCha8Rng::seed_from_u64(42);
        let mut untouched = ChaCha8Rng::seed_from_u64(42);

        let parts = partition(&mut used, 123, 1, RANGE).unwrap();
        assert_eq!(parts, vec![123]);

        // Both streams must still be position-identical.
        assert_eq!(used.gen::<u64>(), untouched.gen::<u64>());
    }

    #[test]
    fn test_partition_rejects_zero_k() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(
            partition(&mut rng, 10, 0, RANGE),
            Err(GenError::InvalidSplitCount)
        );
    }

    #[test]
    fn test_partition_rejects_bad_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for (lo, hi) in [(0.5, 0.5), (-0.1, 0.5), (0.2, 1.5), (f64::NAN, 0.5)] {
            let result = partition(&mut rng, 10, 3, FractionRange { lo, hi });
            assert!(result.is_err(), "range [{lo}, {hi}) accepted");
        }
    }

    #[test]
    fn test_partition_completed_sums_and_caps() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let total = rng.gen_range(0..500u64);
            let k = rng.gen_range(1..7usize);
            let totals = partition(&mut rng, total, k, RANGE).unwrap();
            let parent_completed = if total == 0 { 0 } else { rng.gen_range(0..=total) };

            let completed = partition_completed(&totals, parent_completed).unwrap();
            assert_eq!(completed.iter().sum::<u64>(), parent_completed);
            for (c, t) in completed.iter().zip(&totals) {
                assert!(c <= t, "completed {c} exceeds total {t}");
            }
        }
    }

    #[test]
    fn test_partition_completed_handles_floor_overshoot() {
        // Proportional floors alone would hand the last child 5 completed
        // against a total of 4; the redistribution pass must prevent that.
        let completed = partition_completed(&[3, 3, 4], 9).unwrap();
        assert_eq!(completed.iter().sum::<u64>(), 9);
        assert!(completed.iter().zip(&[3u64, 3, 4]).all(|(c, t)| c <= t));
    }

    #[test]
    fn test_partition_completed_rejects_excess() {
        assert_eq!(
            partition_completed(&[2, 3], 6),
            Err(GenError::CompletedExceedsTotal {
                completed: 6,
                total: 5
            })
        );
    }

    #[test]
    fn test_draw_completed_within_total() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let range = FractionRange { lo: 0.80, hi: 0.95 };
        for _ in 0..100 {
            let total = rng.gen_range(100..400u64);
            let completed = draw_completed(&mut rng, total, range);
            assert!(completed <= total);
            assert!(completed >= (total as f64 * 0.80).floor() as u64);
        }
    }
}
