use eazyswap::validate;
use soroban_sdk::{ Address, Env };

use crate::{ errors::ErrorCode, storage::{ AllowanceDataKey, AllowanceValue, DataKey } };

/// An expired allowance reads as zero.
pub fn read_allowance(env: &Env, from: Address, spender: Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceDataKey { from, spender });
    let stored = env.storage().temporary().get::<_, AllowanceValue>(&key);
    match stored {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        other =>
            AllowanceValue {
                amount: 0,
                expiration_ledger: other.map_or(0, |expired| expired.expiration_ledger),
            },
    }
}

pub fn write_allowance(
    env: &Env,
    from: Address,
    spender: Address,
    amount: i128,
    expiration_ledger: u32
) -> Result<(), ErrorCode> {
    validate!(
        env,
        amount == 0 || expiration_ledger >= env.ledger().sequence(),
        ErrorCode::InvalidExpirationLedger,
        "xEazyToken: expiration_ledger is less than ledger seq when amount > 0"
    )?;

    let allowance = AllowanceValue {
        amount,
        expiration_ledger,
    };

    let key = DataKey::Allowance(AllowanceDataKey { from, spender });
    env.storage().temporary().set(&key, &allowance);

    if amount > 0 {
        let live_for = expiration_ledger - env.ledger().sequence();
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }

    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    from: Address,
    spender: Address,
    amount: i128
) -> Result<(), ErrorCode> {
    let allowance = read_allowance(env, from.clone(), spender.clone());
    validate!(
        env,
        allowance.amount >= amount,
        ErrorCode::InsufficientAllowance,
        "xEazyToken: insufficient allowance"
    )?;
    if amount > 0 {
        write_allowance(env, from, spender, allowance.amount - amount, allowance.expiration_ledger)?;
    }
    Ok(())
}
