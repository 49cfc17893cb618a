use eazyswap::{
    constants::{ BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD },
    validate,
};
use soroban_sdk::{ Address, Env };

use crate::{ errors::ErrorCode, storage::DataKey };

pub fn read_balance(env: &Env, addr: Address) -> i128 {
    let key = DataKey::Balance(addr);
    if let Some(balance) = env.storage().persistent().get::<DataKey, i128>(&key) {
        env.storage().persistent().extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        balance
    } else {
        0
    }
}

fn write_balance(env: &Env, addr: Address, amount: i128) {
    let key = DataKey::Balance(addr);
    env.storage().persistent().set(&key, &amount);
    env.storage().persistent().extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(env: &Env, addr: Address, amount: i128) -> Result<(), ErrorCode> {
    let balance = read_balance(env, addr.clone());
    let new_balance = balance.checked_add(amount).ok_or(ErrorCode::MathError)?;
    write_balance(env, addr, new_balance);
    Ok(())
}

pub fn spend_balance(env: &Env, addr: Address, amount: i128) -> Result<(), ErrorCode> {
    let balance = read_balance(env, addr.clone());
    validate!(
        env,
        balance >= amount,
        ErrorCode::InsufficientBalance,
        "xEazyToken: spendable share balance too low"
    )?;
    write_balance(env, addr, balance - amount);
    Ok(())
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}
