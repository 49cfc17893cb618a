use eazyswap::{
    constants::{ ACC_PRECISION, PERCENT_DENOMINATOR },
    interfaces::token::MintableTokenClient,
    math::{ helpers::mul_div_floor, safe_math::SafeMath },
    safe_increment,
    validate,
};
use soroban_sdk::{ Address, Env };

use crate::{
    errors::ErrorCode,
    events::DistributorEvents,
    storage::{
        get_config,
        get_pool,
        get_pool_length,
        get_total_alloc_point,
        has_pool_for_token,
        push_pool,
        save_pool,
        save_total_alloc_point,
        Config,
        PoolInfo,
        MAX_DEPOSIT_FEE_BPS,
        MAX_HARVEST_INTERVAL,
    },
};

/// Emissions a pool accrued since its last update, split between the core
/// team, the ecosystem fund and the stakers.
pub struct Emission {
    pub core: i128,
    pub ecosystem: i128,
    pub pool: i128,
}

/// `None` when the pool accrues nothing for the elapsed period. Only the
/// clock then moves forward.
pub fn pending_emission(
    env: &Env,
    config: &Config,
    pool: &PoolInfo,
    total_alloc_point: u32,
    now: u64
) -> Result<Option<Emission>, ErrorCode> {
    if pool.total_deposited == 0 || pool.alloc_point == 0 || total_alloc_point == 0 {
        return Ok(None);
    }

    let elapsed = i128::from(now.safe_sub(pool.last_reward_time, env)?);
    let reward = mul_div_floor(
        env,
        elapsed.safe_mul(config.emission_rate, env)?,
        i128::from(pool.alloc_point),
        i128::from(total_alloc_point)
    )?;

    let core = mul_div_floor(env, reward, i128::from(config.core_percent), PERCENT_DENOMINATOR)?;
    let ecosystem = mul_div_floor(
        env,
        reward,
        i128::from(config.ecosystem_percent),
        PERCENT_DENOMINATOR
    )?;
    let pool_reward = reward.safe_sub(core, env)?.safe_sub(ecosystem, env)?;

    Ok(Some(Emission { core, ecosystem, pool: pool_reward }))
}

/// Accrues the pool up to now, minting its emissions. Calling it twice in the
/// same ledger leaves the pool unchanged.
pub fn update_pool(env: &Env, pid: u32) -> Result<PoolInfo, ErrorCode> {
    let mut pool = get_pool(env, pid)?;
    let now = env.ledger().timestamp();
    if now <= pool.last_reward_time {
        return Ok(pool);
    }

    let config = get_config(env);
    let emission = pending_emission(env, &config, &pool, get_total_alloc_point(env), now)?;

    if let Some(emission) = emission {
        let eazy = MintableTokenClient::new(env, &config.eazy_token);
        let distributor = env.current_contract_address();
        if emission.core > 0 {
            eazy.mint(&distributor, &config.core_address, &emission.core);
        }
        if emission.ecosystem > 0 {
            eazy.mint(&distributor, &config.ecosystem_address, &emission.ecosystem);
        }
        if emission.pool > 0 {
            eazy.mint(&distributor, &distributor, &emission.pool);
        }

        let increment = mul_div_floor(env, emission.pool, ACC_PRECISION, pool.total_deposited)?;
        safe_increment!(pool.acc_reward_per_share, increment);
    }

    pool.last_reward_time = now;
    save_pool(env, pid, &pool);

    DistributorEvents::update_pool(
        env,
        pid,
        pool.last_reward_time,
        pool.total_deposited,
        pool.acc_reward_per_share
    );
    Ok(pool)
}

pub fn mass_update_pools(env: &Env) -> Result<(), ErrorCode> {
    for pid in 0..get_pool_length(env) {
        update_pool(env, pid)?;
    }
    Ok(())
}

fn validate_pool_params(
    env: &Env,
    deposit_fee_bps: u32,
    harvest_interval: u64
) -> Result<(), ErrorCode> {
    validate!(
        env,
        deposit_fee_bps <= MAX_DEPOSIT_FEE_BPS,
        ErrorCode::DepositFeeTooHigh,
        "Distributor: deposit fee above 4%"
    )?;
    validate!(
        env,
        harvest_interval <= MAX_HARVEST_INTERVAL,
        ErrorCode::HarvestIntervalTooHigh,
        "Distributor: harvest interval above 14 days"
    )
}

/// Registers a new pool. Pools must be flushed beforehand since the total
/// allocation changes.
pub fn add_pool(
    env: &Env,
    config: &Config,
    lp_token: &Address,
    alloc_point: u32,
    deposit_fee_bps: u32,
    harvest_interval: u64
) -> Result<u32, ErrorCode> {
    validate_pool_params(env, deposit_fee_bps, harvest_interval)?;
    validate!(
        env,
        !has_pool_for_token(env, lp_token),
        ErrorCode::PoolAlreadyExists,
        "Distributor: Add: token already has a pool"
    )?;

    let total_alloc_point = get_total_alloc_point(env).safe_add(alloc_point, env)?;
    save_total_alloc_point(env, total_alloc_point);

    let now = env.ledger().timestamp();
    let pid = push_pool(
        env,
        &(PoolInfo {
            lp_token: lp_token.clone(),
            alloc_point,
            last_reward_time: now.max(config.start_time),
            acc_reward_per_share: 0,
            deposit_fee_bps,
            harvest_interval,
            total_deposited: 0,
        })
    );

    DistributorEvents::add_pool(
        env,
        pid,
        lp_token.clone(),
        alloc_point,
        deposit_fee_bps,
        harvest_interval
    );
    Ok(pid)
}

pub fn set_pool(
    env: &Env,
    pid: u32,
    alloc_point: u32,
    deposit_fee_bps: u32,
    harvest_interval: u64
) -> Result<(), ErrorCode> {
    validate_pool_params(env, deposit_fee_bps, harvest_interval)?;

    let mut pool = get_pool(env, pid)?;
    let total_alloc_point = get_total_alloc_point(env)
        .safe_sub(pool.alloc_point, env)?
        .safe_add(alloc_point, env)?;
    save_total_alloc_point(env, total_alloc_point);

    pool.alloc_point = alloc_point;
    pool.deposit_fee_bps = deposit_fee_bps;
    pool.harvest_interval = harvest_interval;
    save_pool(env, pid, &pool);

    DistributorEvents::set_pool(env, pid, alloc_point, deposit_fee_bps, harvest_interval);
    Ok(())
}

/// Principal staked in pools whose staking token is EAZY itself. Rewards may
/// never be paid out of it.
pub fn base_token_principal(env: &Env, eazy_token: &Address) -> Result<i128, ErrorCode> {
    let mut principal: i128 = 0;
    for pid in 0..get_pool_length(env) {
        let pool = get_pool(env, pid)?;
        if pool.lp_token == *eazy_token {
            safe_increment!(principal, pool.total_deposited);
        }
    }
    Ok(principal)
}
