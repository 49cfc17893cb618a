use eazyswap::constants::{ PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD };
use soroban_sdk::{ panic_with_error, Address, Env };

use crate::{ errors::ErrorCode, storage_types::DataKey };

pub fn read_administrator(env: &Env) -> Address {
    let key = DataKey::Admin;
    env.storage()
        .instance()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, ErrorCode::AdminNotSet))
}

pub fn write_administrator(env: &Env, id: &Address) {
    let key = DataKey::Admin;
    env.storage().instance().set(&key, id);
}

pub fn read_minter(env: &Env, addr: &Address) -> bool {
    let key = DataKey::Minter(addr.clone());
    let registered = env.storage().persistent().get(&key).unwrap_or(false);
    if registered {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    registered
}

pub fn write_minter(env: &Env, addr: &Address, enabled: bool) {
    let key = DataKey::Minter(addr.clone());
    if enabled {
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    } else {
        env.storage().persistent().remove(&key);
    }
}
