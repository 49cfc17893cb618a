use eazyswap::{
    constants::{ PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD },
    math::safe_math::SafeMath,
};
use soroban_sdk::{ contracttype, vec, Address, Env, Vec };

use crate::errors::ErrorCode;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    NextLockId,
    Lock(u64),
    OwnerLocks(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockInfo {
    pub owner: Address,
    pub token: Address,
    pub amount: i128,
    pub unlock_time: u64,
}

/// Returns the next lock id and advances the counter.
pub fn next_lock_id(env: &Env) -> Result<u64, ErrorCode> {
    let id: u64 = env.storage().instance().get(&DataKey::NextLockId).unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::NextLockId, &id.safe_add(1, env)?);
    Ok(id)
}

pub fn get_lock(env: &Env, id: u64) -> Option<LockInfo> {
    let key = DataKey::Lock(id);
    let lock = env.storage().persistent().get::<_, LockInfo>(&key);
    if lock.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    lock
}

pub fn save_lock(env: &Env, id: u64, lock: &LockInfo) {
    let key = DataKey::Lock(id);
    env.storage().persistent().set(&key, lock);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn remove_lock(env: &Env, id: u64) {
    env.storage().persistent().remove(&DataKey::Lock(id));
}

pub fn get_owner_locks(env: &Env, owner: &Address) -> Vec<u64> {
    let key = DataKey::OwnerLocks(owner.clone());
    match env.storage().persistent().get::<_, Vec<u64>>(&key) {
        Some(ids) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
            ids
        }
        None => vec![env],
    }
}

pub fn save_owner_locks(env: &Env, owner: &Address, ids: &Vec<u64>) {
    let key = DataKey::OwnerLocks(owner.clone());
    if ids.is_empty() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, ids);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
