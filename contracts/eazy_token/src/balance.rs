use eazyswap::{
    constants::{ BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD },
    math::safe_math::SafeMath,
    validate,
};
use soroban_sdk::{ Address, Env };

use crate::{ errors::ErrorCode, storage_types::DataKey };

pub fn read_balance(env: &Env, addr: Address) -> i128 {
    let key = DataKey::Balance(addr);
    let balance = env.storage().persistent().get::<DataKey, i128>(&key);
    if balance.is_some() {
        env.storage().persistent().extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    }
    balance.unwrap_or(0)
}

fn write_balance(env: &Env, addr: Address, amount: i128) {
    let key = DataKey::Balance(addr);
    env.storage().persistent().set(&key, &amount);
    env.storage().persistent().extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn credit(env: &Env, addr: Address, amount: i128) -> Result<(), ErrorCode> {
    let balance = read_balance(env, addr.clone()).safe_add(amount, env)?;
    write_balance(env, addr, balance);
    Ok(())
}

pub fn debit(env: &Env, addr: Address, amount: i128) -> Result<(), ErrorCode> {
    let balance = read_balance(env, addr.clone());
    validate!(
        env,
        balance >= amount,
        ErrorCode::InsufficientBalance,
        "EazyToken: balance too low"
    )?;
    write_balance(env, addr, balance - amount);
    Ok(())
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

/// Applies a signed change to the total supply: positive on mint, negative on burn.
pub fn adjust_total_supply(env: &Env, delta: i128) -> Result<(), ErrorCode> {
    let supply = read_total_supply(env).safe_add(delta, env)?;
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    Ok(())
}
