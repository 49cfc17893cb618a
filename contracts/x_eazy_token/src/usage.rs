//! Per user and usage contract consent ceilings and live allocations, plus
//! the per usage deallocation fee.

use eazyswap::constants::{ PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD };
use soroban_sdk::{ Address, Env };

use crate::storage::{ DataKey, UsageKey };

fn usage_key(user: &Address, usage: &Address) -> UsageKey {
    UsageKey {
        user: user.clone(),
        usage: usage.clone(),
    }
}

fn read_amount(env: &Env, key: &DataKey) -> i128 {
    match env.storage().persistent().get::<_, i128>(key) {
        Some(amount) => {
            env.storage()
                .persistent()
                .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
            amount
        }
        None => 0,
    }
}

fn write_amount(env: &Env, key: &DataKey, amount: i128) {
    if amount == 0 {
        env.storage().persistent().remove(key);
        return;
    }
    env.storage().persistent().set(key, &amount);
    env.storage().persistent().extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_usage_approval(env: &Env, user: &Address, usage: &Address) -> i128 {
    read_amount(env, &DataKey::UsageApproval(usage_key(user, usage)))
}

pub fn save_usage_approval(env: &Env, user: &Address, usage: &Address, amount: i128) {
    write_amount(env, &DataKey::UsageApproval(usage_key(user, usage)), amount);
}

pub fn get_usage_allocation(env: &Env, user: &Address, usage: &Address) -> i128 {
    read_amount(env, &DataKey::UsageAllocation(usage_key(user, usage)))
}

pub fn save_usage_allocation(env: &Env, user: &Address, usage: &Address, amount: i128) {
    write_amount(env, &DataKey::UsageAllocation(usage_key(user, usage)), amount);
}

pub fn get_deallocation_fee(env: &Env, usage: &Address) -> u32 {
    env.storage().instance().get(&DataKey::DeallocationFee(usage.clone())).unwrap_or(0)
}

pub fn save_deallocation_fee(env: &Env, usage: &Address, fee_bps: u32) {
    env.storage().instance().set(&DataKey::DeallocationFee(usage.clone()), &fee_bps);
}
