use soroban_sdk::{ contracttype, Env };

use crate::{ constants::SCALE, error::EazyResult };

use super::{ helpers::mul_div_floor, safe_math::SafeMath };

/// Linear vesting schedule mapping a lock duration to the fraction of the
/// principal paid out at maturity. Ratios are scaled by `SCALE`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingCurve {
    pub min_ratio: i128,
    pub max_ratio: i128,
    pub min_duration: u64,
    pub max_duration: u64,
}

impl VestingCurve {
    pub fn is_valid(&self) -> bool {
        self.min_ratio >= 0 &&
            self.min_ratio <= self.max_ratio &&
            self.max_ratio <= SCALE &&
            self.min_duration < self.max_duration
    }

    /// Ratio applied to a lock of `duration` seconds. Zero below the minimum
    /// duration, capped at `max_ratio` above the maximum.
    pub fn ratio(&self, env: &Env, duration: u64) -> EazyResult<i128> {
        if duration < self.min_duration {
            return Ok(0);
        }
        if duration > self.max_duration {
            return Ok(self.max_ratio);
        }

        let elapsed = i128::from(duration.safe_sub(self.min_duration, env)?);
        let span = i128::from(self.max_duration.safe_sub(self.min_duration, env)?);
        let ratio_span = self.max_ratio.safe_sub(self.min_ratio, env)?;

        self.min_ratio.safe_add(mul_div_floor(env, elapsed, ratio_span, span)?, env)
    }

    /// Amount of base token redeemable for `amount` shares locked for `duration`.
    pub fn redeemable(&self, env: &Env, amount: i128, duration: u64) -> EazyResult<i128> {
        let ratio = self.ratio(env, duration)?;
        mul_div_floor(env, amount, ratio, SCALE)
    }
}
