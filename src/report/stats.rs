use std::cmp::Ordering;

const MICROS_PER_MILLI: u128 = 1_000;

/// Mean and population standard deviation over delay samples (microseconds).
///
/// Kept as exact integer sums; results are rounded to whole milliseconds with ties
/// going to the even neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayStats {
    count: u128,
    sum: u128,
    /// `n * sum(x^2) - sum(x)^2`, which is `n^2` times the population variance.
    spread: u128,
}

impl DelayStats {
    /// Returns `None` for no samples, or when the exact sums do not fit in
    /// 128 bits (logged as a warning).
    #[must_use]
    pub fn from_samples(samples: &[u64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let stats = Self::checked_from_samples(samples);
        if stats.is_none() {
            tracing::warn!(
                "Delay statistics overflow for {} samples; no summary computed",
                samples.len()
            );
        }
        stats
    }

    fn checked_from_samples(samples: &[u64]) -> Option<Self> {
        let mut count: u128 = 0;
        let mut sum: u128 = 0;
        let mut sum_squares: u128 = 0;
        for &sample in samples {
            let value = u128::from(sample);
            count = count.checked_add(1)?;
            sum = sum.checked_add(value)?;
            sum_squares = sum_squares.checked_add(value.checked_mul(value)?)?;
        }
        let spread = count
            .checked_mul(sum_squares)?
            .checked_sub(sum.checked_mul(sum)?)?;
        Some(Self { count, sum, spread })
    }

    #[must_use]
    pub const fn count(&self) -> u128 {
        self.count
    }

    #[must_use]
    pub fn mean_ms(&self) -> u128 {
        div_round_half_even(self.sum, self.count.saturating_mul(MICROS_PER_MILLI))
    }

    #[must_use]
    pub fn stddev_ms(&self) -> u128 {
        // stddev_ms = sqrt(spread) / (n * 1000).
        let scale = self.count.saturating_mul(MICROS_PER_MILLI);
        let floor = self.spread.isqrt().checked_div(scale).unwrap_or(0);

        // Round up when sqrt(spread) / scale - floor >= 1/2, i.e. 4 * spread >= ((2 * floor + 1) * scale)^2.
        let lhs = self.spread.checked_mul(4);
        let rhs = floor
            .checked_mul(2)
            .and_then(|value| value.checked_add(1))
            .and_then(|value| value.checked_mul(scale))
            .and_then(|value| value.checked_mul(value));
        match (lhs, rhs) {
            (Some(lhs), Some(rhs)) => round_by(floor, lhs.cmp(&rhs)),
            // Only 4 * spread exceeds u128, so it is the larger side.
            (None, Some(_)) => round_by(floor, Ordering::Greater),
            (Some(_) | None, None) => floor,
        }
    }
}

fn div_round_half_even(numerator: u128, denominator: u128) -> u128 {
    let quotient = numerator.checked_div(denominator).unwrap_or(0);
    let remainder = numerator.checked_rem(denominator).unwrap_or(0);
    round_by(quotient, remainder.saturating_mul(2).cmp(&denominator))
}

/// Picks `floor` or `floor + 1` given how the fractional part compares with one half.
const fn round_by(floor: u128, fraction_vs_half: Ordering) -> u128 {
    match fraction_vs_half {
        Ordering::Less => floor,
        Ordering::Greater => floor.saturating_add(1),
        Ordering::Equal => {
            if floor % 2 == 0 {
                floor
            } else {
                floor.saturating_add(1)
            }
        }
    }
}
