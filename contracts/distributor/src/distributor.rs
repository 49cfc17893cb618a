use soroban_sdk::{ Address, Env, Vec };

use crate::{ errors::ErrorCode, storage::{ Config, PoolInfo, UserInfo } };

pub trait DistributorTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    /// Adds a pool staking `lp_token`. Returns the new pool id.
    fn add(
        env: Env,
        lp_token: Address,
        alloc_point: u32,
        deposit_fee_bps: u32,
        harvest_interval: u64
    ) -> Result<u32, ErrorCode>;

    fn set(
        env: Env,
        pid: u32,
        alloc_point: u32,
        deposit_fee_bps: u32,
        harvest_interval: u64
    ) -> Result<(), ErrorCode>;

    /// EAZY emitted per second across all pools.
    fn update_emission_rate(env: Env, emission_rate: i128) -> Result<(), ErrorCode>;

    /// Out of 1000. Core and ecosystem together cannot exceed 1000.
    fn set_core_percent(env: Env, percent: u32) -> Result<(), ErrorCode>;

    fn set_ecosystem_percent(env: Env, percent: u32) -> Result<(), ErrorCode>;

    /// Share of harvested rewards paid as xEAZY, in bps.
    fn set_x_eazy_rewards_percent(env: Env, percent: u32) -> Result<(), ErrorCode>;

    fn set_fee_address(env: Env, fee_address: Address) -> Result<(), ErrorCode>;

    fn set_core_address(env: Env, core_address: Address) -> Result<(), ErrorCode>;

    fn set_ecosystem_address(env: Env, ecosystem_address: Address) -> Result<(), ErrorCode>;

    fn set_admin(env: Env, new_admin: Address);

    // ################################################################
    //                             USER
    // ################################################################

    /// Accrues a single pool. Anyone may call it.
    fn update_pool(env: Env, pid: u32) -> Result<(), ErrorCode>;

    fn mass_update_pools(env: Env) -> Result<(), ErrorCode>;

    fn deposit(env: Env, user: Address, pid: u32, amount: i128) -> Result<(), ErrorCode>;

    fn withdraw(env: Env, user: Address, pid: u32, amount: i128) -> Result<(), ErrorCode>;

    fn emergency_withdraw(env: Env, user: Address, pid: u32) -> Result<(), ErrorCode>;

    /// Harvests up to 30 pools in one call.
    fn harvest_many(env: Env, user: Address, pids: Vec<u32>) -> Result<(), ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_config(env: Env) -> Config;

    fn query_admin(env: Env) -> Address;

    fn query_pool(env: Env, pid: u32) -> Result<PoolInfo, ErrorCode>;

    fn query_pool_length(env: Env) -> u32;

    fn query_user_info(env: Env, pid: u32, user: Address) -> UserInfo;

    /// Reward the user would settle now, including locked-up rewards.
    fn pending_tokens(env: Env, pid: u32, user: Address) -> Result<i128, ErrorCode>;

    fn can_harvest(env: Env, pid: u32, user: Address) -> bool;

    fn query_total_alloc_point(env: Env) -> u32;

    fn query_total_locked_up_rewards(env: Env) -> i128;
}
