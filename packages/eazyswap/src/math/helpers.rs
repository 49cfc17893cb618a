use soroban_sdk::{ log, Env };

use crate::{
    constants::BPS_DENOMINATOR,
    error::{ ErrorCode, EazyResult },
};

use super::bn::U256;

/// `value * numerator / denominator`, rounded toward zero.
///
/// Operands must be non-negative. The product is widened to 256 bits when it
/// does not fit in an `i128`; a quotient that does not fit back is an error.
pub fn mul_div_floor(
    env: &Env,
    value: i128,
    numerator: i128,
    denominator: i128
) -> EazyResult<i128> {
    if value < 0 || numerator < 0 || denominator <= 0 {
        log!(env, "Math error: mul_div_floor on invalid operands");
        return Err(ErrorCode::MathError);
    }

    if let Some(product) = value.checked_mul(numerator) {
        return Ok(product / denominator);
    }

    let quotient =
        (U256::from(value as u128) * U256::from(numerator as u128)) /
        U256::from(denominator as u128);

    if quotient > U256::from(i128::MAX as u128) {
        log!(env, "Math error: mul_div_floor result overflows i128");
        return Err(ErrorCode::MathError);
    }

    Ok(quotient.low_u128() as i128)
}

/// Share of `amount` expressed in basis points, rounded down.
pub fn bps_of(env: &Env, amount: i128, bps: u32) -> EazyResult<i128> {
    mul_div_floor(env, amount, i128::from(bps), BPS_DENOMINATOR)
}
