//! Earning rule for the end of day credit.

use std::num::NonZeroU64;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive as _;

const DEFAULT_CUTOFF: Decimal = Decimal::from_parts(250, 0, 0, false, 0);
const DEFAULT_RATIO_AT_OR_BELOW_CUTOFF: NonZeroU64 = NonZeroU64::new(18).unwrap();
const DEFAULT_RATIO_ABOVE_CUTOFF: NonZeroU64 = NonZeroU64::new(17).unwrap();

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    #[error("spend not convertible to points spend={spend}")]
    UnconvertibleSpend { spend: Decimal },
}

/// How many dollars buy one point, depending on the whole day spend of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardPolicy {
    cutoff: Decimal,
    ratio_at_or_below_cutoff: NonZeroU64,
    ratio_above_cutoff: NonZeroU64,
}

impl Default for RewardPolicy {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            ratio_at_or_below_cutoff: DEFAULT_RATIO_AT_OR_BELOW_CUTOFF,
            ratio_above_cutoff: DEFAULT_RATIO_ABOVE_CUTOFF,
        }
    }
}

impl RewardPolicy {
    pub const fn new(cutoff: Decimal, ratio_at_or_below_cutoff: NonZeroU64, ratio_above_cutoff: NonZeroU64) -> Self {
        Self {
            cutoff,
            ratio_at_or_below_cutoff,
            ratio_above_cutoff,
        }
    }

    pub const fn cutoff(&self) -> Decimal {
        self.cutoff
    }

    /// Dollars per point for a day total of `spend`. The cutoff itself still uses the lower ratio.
    pub fn ratio_for(&self, spend: Decimal) -> NonZeroU64 {
        if spend > self.cutoff {
            self.ratio_above_cutoff
        } else {
            self.ratio_at_or_below_cutoff
        }
    }

    /// Points earned for a day total of `spend`: `floor(spend / ratio)`.
    ///
    /// With an integer ratio this equals `floor(spend) / ratio` in integer arithmetic, so no
    /// decimal division (and no rounding) is involved. Cents below the ratio are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `spend` is negative or its whole part does not fit a `u64` ([`PolicyError::UnconvertibleSpend`]).
    pub fn earned_points(&self, spend: Decimal) -> Result<u64, PolicyError> {
        let whole_dollars = spend
            .floor()
            .to_u64()
            .ok_or(PolicyError::UnconvertibleSpend { spend })?;
        Ok(whole_dollars / self.ratio_for(spend).get())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use assert2::let_assert;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0", 0)]
    #[case("17.99", 0)]
    #[case("18", 1)]
    #[case("150", 8)]
    #[case("249.99", 13)]
    #[case("250", 13)]
    #[case("250.01", 14)]
    #[case("251", 14)]
    #[case("350", 20)]
    #[case("357", 21)]
    fn earned_points_applies_the_cutoff_ratio(#[case] spend: &str, #[case] expected: u64) {
        assert_eq!(RewardPolicy::default().earned_points(dec(spend)), Ok(expected));
    }

    #[test]
    fn ratio_for_exact_cutoff_uses_the_lower_ratio() {
        let policy = RewardPolicy::default();
        assert_eq!(policy.ratio_for(dec("250")).get(), 18);
        assert_eq!(policy.ratio_for(dec("250.001")).get(), 17);
    }

    #[test]
    fn earned_points_with_custom_policy() {
        let policy = RewardPolicy::new(dec("100"), NonZeroU64::new(10).unwrap(), NonZeroU64::new(5).unwrap());
        assert_eq!(policy.cutoff(), dec("100"));
        assert_eq!(policy.earned_points(dec("100")), Ok(10));
        assert_eq!(policy.earned_points(dec("101")), Ok(20));
    }

    #[test]
    fn earned_points_negative_spend_errors() {
        let_assert!(Err(PolicyError::UnconvertibleSpend { spend }) = RewardPolicy::default().earned_points(dec("-18")));
        assert_eq!(spend, dec("-18"));
    }

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }
}
