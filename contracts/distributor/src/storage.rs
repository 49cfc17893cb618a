use eazyswap::constants::{ ONE_DAY, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD };
use soroban_sdk::{ contracttype, log, panic_with_error, Address, Env };

use crate::errors::ErrorCode;

/// 4%
pub const MAX_DEPOSIT_FEE_BPS: u32 = 400;
pub const MAX_HARVEST_INTERVAL: u64 = 14 * ONE_DAY;
pub const MAX_HARVEST_POOLS: u32 = 30;

#[derive(Clone)]
#[contracttype]
pub struct UserKey {
    pub pid: u32,
    pub user: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    PoolLength,
    TotalAllocPoint,
    TotalLockedUpRewards,
    Pool(u32),
    PoolByToken(Address),
    UserInfo(UserKey),
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub eazy_token: Address,
    pub x_eazy_token: Address,
    /// Receives deposit fees
    pub fee_address: Address,
    pub core_address: Address,
    pub ecosystem_address: Address,
    /// EAZY minted per second across all pools
    pub emission_rate: i128,
    pub start_time: u64,
    /// Share of emissions minted to `core_address`, out of 1000
    pub core_percent: u32,
    /// Share of emissions minted to `ecosystem_address`, out of 1000
    pub ecosystem_percent: u32,
    /// Share of harvested rewards paid as xEAZY, in bps
    pub x_eazy_rewards_percent: u32,
    /// Bumped on every administrative change
    pub version: u32,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, ErrorCode::ConfigNotSet))
}

// ################################################################
//                              Pools
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInfo {
    pub lp_token: Address,
    pub alloc_point: u32,
    pub last_reward_time: u64,
    /// Accumulated reward per staked unit, scaled by 1e12
    pub acc_reward_per_share: i128,
    pub deposit_fee_bps: u32,
    pub harvest_interval: u64,
    pub total_deposited: i128,
}

pub fn get_pool_length(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::PoolLength).unwrap_or(0)
}

pub fn get_pool(env: &Env, pid: u32) -> Result<PoolInfo, ErrorCode> {
    let key = DataKey::Pool(pid);
    match env.storage().persistent().get::<_, PoolInfo>(&key) {
        Some(pool) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
            Ok(pool)
        }
        None => {
            log!(env, "Distributor: pool {} does not exist", pid);
            Err(ErrorCode::InvalidPoolId)
        }
    }
}

pub fn save_pool(env: &Env, pid: u32, pool: &PoolInfo) {
    let key = DataKey::Pool(pid);
    env.storage().persistent().set(&key, pool);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Appends a pool and indexes it by staking token. Returns its id.
pub fn push_pool(env: &Env, pool: &PoolInfo) -> u32 {
    let pid = get_pool_length(env);
    save_pool(env, pid, pool);

    let key = DataKey::PoolByToken(pool.lp_token.clone());
    env.storage().persistent().set(&key, &pid);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    env.storage()
        .instance()
        .set(&DataKey::PoolLength, &(pid + 1));
    pid
}

pub fn has_pool_for_token(env: &Env, lp_token: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::PoolByToken(lp_token.clone()))
}

pub fn get_total_alloc_point(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::TotalAllocPoint).unwrap_or(0)
}

pub fn save_total_alloc_point(env: &Env, total: u32) {
    env.storage().instance().set(&DataKey::TotalAllocPoint, &total);
}

pub fn get_total_locked_up_rewards(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalLockedUpRewards).unwrap_or(0)
}

pub fn save_total_locked_up_rewards(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalLockedUpRewards, &total);
}

// ################################################################
//                              Users
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserInfo {
    pub amount: i128,
    pub reward_debt: i128,
    /// Rewards accrued while the harvest lockup was running
    pub reward_locked_up: i128,
    pub next_harvest_until: u64,
}

fn user_key(pid: u32, user: &Address) -> DataKey {
    DataKey::UserInfo(UserKey {
        pid,
        user: user.clone(),
    })
}

pub fn get_user_info(env: &Env, pid: u32, user: &Address) -> UserInfo {
    let key = user_key(pid, user);
    match env.storage().persistent().get::<_, UserInfo>(&key) {
        Some(info) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
            info
        }
        None => UserInfo::default(),
    }
}

pub fn save_user_info(env: &Env, pid: u32, user: &Address, info: &UserInfo) {
    let key = user_key(pid, user);
    if *info == UserInfo::default() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, info);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub mod utils {
    use super::*;

    pub fn get_admin(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| panic_with_error!(env, ErrorCode::AdminNotSet))
    }

    pub fn save_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&DataKey::Admin, admin);
    }
}
