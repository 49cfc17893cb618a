use eazyswap::validate;
use soroban_sdk::{ Address, Env };

use crate::{ errors::ErrorCode, storage_types::{ AllowanceDataKey, AllowanceValue, DataKey } };

fn allowance_key(from: Address, spender: Address) -> DataKey {
    DataKey::Allowance(AllowanceDataKey { from, spender })
}

/// Current allowance. An expired entry reads as zero but keeps its expiration.
pub fn read_allowance(env: &Env, from: Address, spender: Address) -> AllowanceValue {
    let stored = env.storage().temporary().get::<_, AllowanceValue>(&allowance_key(from, spender));
    match stored {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(expired) =>
            AllowanceValue {
                amount: 0,
                expiration_ledger: expired.expiration_ledger,
            },
        None =>
            AllowanceValue {
                amount: 0,
                expiration_ledger: 0,
            },
    }
}

/// Temporary entries live exactly until `expiration_ledger`.
pub fn write_allowance(
    env: &Env,
    from: Address,
    spender: Address,
    amount: i128,
    expiration_ledger: u32
) -> Result<(), ErrorCode> {
    let sequence = env.ledger().sequence();
    validate!(
        env,
        amount == 0 || expiration_ledger >= sequence,
        ErrorCode::InvalidExpirationLedger,
        "EazyToken: Approve: expiration ledger is in the past"
    )?;

    let key = allowance_key(from, spender);
    env.storage().temporary().set(&key, &(AllowanceValue { amount, expiration_ledger }));

    if amount > 0 {
        let live_for = expiration_ledger - sequence;
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
        "EazyToken: Transfer From: allowance too low"
    )?;

    if amount == 0 {
        return Ok(());
    }
    write_allowance(env, from, spender, allowance.amount - amount, allowance.expiration_ledger)
}
