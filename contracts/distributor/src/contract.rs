use eazyswap::{
    constants::{
        ACC_PRECISION,
        BPS_DENOMINATOR,
        INSTANCE_BUMP_AMOUNT,
        INSTANCE_LIFETIME_THRESHOLD,
        PERCENT_DENOMINATOR,
    },
    math::{ helpers::mul_div_floor, safe_math::SafeMath },
    validate,
};
use soroban_sdk::{
    contract,
    contractimpl,
    contractmeta,
    log,
    panic_with_error,
    Address,
    Env,
    Symbol,
    Vec,
};

use crate::{
    controller,
    distributor::DistributorTrait,
    errors::ErrorCode,
    events::DistributorEvents,
    storage::{
        get_config,
        get_pool,
        get_pool_length,
        get_total_alloc_point,
        get_total_locked_up_rewards,
        get_user_info,
        save_config,
        utils::{ get_admin, save_admin },
        Config,
        PoolInfo,
        UserInfo,
    },
};

contractmeta!(
    key = "Description",
    val = "Multi-pool EAZY emission distributor with harvest lockups"
);

#[contract]
pub struct Distributor;

fn bump_instance(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Flushes every pool under the current configuration, then applies an
/// administrative change and bumps the configuration version.
fn update_config<F>(env: &Env, mutate: F) -> Result<Config, ErrorCode>
    where F: FnOnce(&mut Config) -> Result<(), ErrorCode>
{
    let admin = get_admin(env);
    admin.require_auth();
    bump_instance(env);

    controller::pool::mass_update_pools(env)?;

    let mut config = get_config(env);
    mutate(&mut config)?;
    config.version = config.version.safe_add(1, env)?;
    save_config(env, &config);

    Ok(config)
}

fn validate_split(env: &Env, core_percent: u32, ecosystem_percent: u32) -> Result<(), ErrorCode> {
    validate!(
        env,
        i128::from(core_percent) + i128::from(ecosystem_percent) <= PERCENT_DENOMINATOR,
        ErrorCode::InvalidPercent,
        "Distributor: core and ecosystem shares exceed 100%"
    )
}

#[contractimpl]
impl Distributor {
    pub fn __constructor(
        env: Env,
        admin: Address,
        eazy_token: Address,
        x_eazy_token: Address,
        fee_address: Address,
        core_address: Address,
        ecosystem_address: Address,
        emission_rate: i128,
        start_time: u64
    ) {
        if emission_rate < 0 {
            log!(&env, "Distributor: Constructor: emission rate cannot be negative");
            panic_with_error!(&env, ErrorCode::NegativeAmount);
        }

        save_admin(&env, &admin);
        save_config(
            &env,
            &(Config {
                eazy_token,
                x_eazy_token,
                fee_address,
                core_address,
                ecosystem_address,
                emission_rate,
                start_time,
                core_percent: 0,
                ecosystem_percent: 0,
                x_eazy_rewards_percent: 0,
                version: 0,
            })
        );
    }
}

#[contractimpl]
impl DistributorTrait for Distributor {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn add(
        env: Env,
        lp_token: Address,
        alloc_point: u32,
        deposit_fee_bps: u32,
        harvest_interval: u64
    ) -> Result<u32, ErrorCode> {
        let mut pid = 0;
        update_config(&env, |config| {
            pid = controller::pool::add_pool(
                &env,
                config,
                &lp_token,
                alloc_point,
                deposit_fee_bps,
                harvest_interval
            )?;
            Ok(())
        })?;
        Ok(pid)
    }

    fn set(
        env: Env,
        pid: u32,
        alloc_point: u32,
        deposit_fee_bps: u32,
        harvest_interval: u64
    ) -> Result<(), ErrorCode> {
        update_config(&env, |_| {
            controller::pool::set_pool(&env, pid, alloc_point, deposit_fee_bps, harvest_interval)
        })?;
        Ok(())
    }

    fn update_emission_rate(env: Env, emission_rate: i128) -> Result<(), ErrorCode> {
        let mut previous = 0;
        update_config(&env, |config| {
            validate!(
                &env,
                emission_rate >= 0,
                ErrorCode::NegativeAmount,
                "Distributor: Update Emission Rate: negative rate"
            )?;
            previous = config.emission_rate;
            config.emission_rate = emission_rate;
            Ok(())
        })?;

        DistributorEvents::update_emission_rate(&env, get_admin(&env), previous, emission_rate);
        Ok(())
    }

    fn set_core_percent(env: Env, percent: u32) -> Result<(), ErrorCode> {
        update_config(&env, |config| {
            validate_split(&env, percent, config.ecosystem_percent)?;
            config.core_percent = percent;
            Ok(())
        })?;

        DistributorEvents::set_percent(&env, Symbol::new(&env, "core"), percent);
        Ok(())
    }

    fn set_ecosystem_percent(env: Env, percent: u32) -> Result<(), ErrorCode> {
        update_config(&env, |config| {
            validate_split(&env, config.core_percent, percent)?;
            config.ecosystem_percent = percent;
            Ok(())
        })?;

        DistributorEvents::set_percent(&env, Symbol::new(&env, "ecosystem"), percent);
        Ok(())
    }

    fn set_x_eazy_rewards_percent(env: Env, percent: u32) -> Result<(), ErrorCode> {
        update_config(&env, |config| {
            validate!(
                &env,
                i128::from(percent) <= BPS_DENOMINATOR,
                ErrorCode::InvalidPercent,
                "Distributor: xEAZY rewards share above 100%"
            )?;
            config.x_eazy_rewards_percent = percent;
            Ok(())
        })?;

        DistributorEvents::set_percent(&env, Symbol::new(&env, "x_eazy"), percent);
        Ok(())
    }

    fn set_fee_address(env: Env, fee_address: Address) -> Result<(), ErrorCode> {
        update_config(&env, |config| {
            config.fee_address = fee_address.clone();
            Ok(())
        })?;

        DistributorEvents::set_address(&env, Symbol::new(&env, "fee"), fee_address);
        Ok(())
    }

    fn set_core_address(env: Env, core_address: Address) -> Result<(), ErrorCode> {
        update_config(&env, |config| {
            config.core_address = core_address.clone();
            Ok(())
        })?;

        DistributorEvents::set_address(&env, Symbol::new(&env, "core"), core_address);
        Ok(())
    }

    fn set_ecosystem_address(env: Env, ecosystem_address: Address) -> Result<(), ErrorCode> {
        update_config(&env, |config| {
            config.ecosystem_address = ecosystem_address.clone();
            Ok(())
        })?;

        DistributorEvents::set_address(&env, Symbol::new(&env, "ecosystem"), ecosystem_address);
        Ok(())
    }

    fn set_admin(env: Env, new_admin: Address) {
        let admin = get_admin(&env);
        admin.require_auth();
        bump_instance(&env);

        save_admin(&env, &new_admin);
        env.events().publish((Symbol::new(&env, "set_admin"), admin), new_admin);
    }

    // ################################################################
    //                             USER
    // ################################################################

    fn update_pool(env: Env, pid: u32) -> Result<(), ErrorCode> {
        bump_instance(&env);
        controller::pool::update_pool(&env, pid)?;
        Ok(())
    }

    fn mass_update_pools(env: Env) -> Result<(), ErrorCode> {
        bump_instance(&env);
        controller::pool::mass_update_pools(&env)
    }

    fn deposit(env: Env, user: Address, pid: u32, amount: i128) -> Result<(), ErrorCode> {
        user.require_auth();
        bump_instance(&env);

        controller::stake::deposit(&env, &user, pid, amount)
    }

    fn withdraw(env: Env, user: Address, pid: u32, amount: i128) -> Result<(), ErrorCode> {
        user.require_auth();
        bump_instance(&env);

        controller::stake::withdraw(&env, &user, pid, amount)
    }

    fn emergency_withdraw(env: Env, user: Address, pid: u32) -> Result<(), ErrorCode> {
        user.require_auth();
        bump_instance(&env);

        controller::stake::emergency_withdraw(&env, &user, pid)
    }

    fn harvest_many(env: Env, user: Address, pids: Vec<u32>) -> Result<(), ErrorCode> {
        user.require_auth();
        bump_instance(&env);

        controller::stake::harvest_many(&env, &user, &pids)
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_config(env: Env) -> Config {
        bump_instance(&env);
        get_config(&env)
    }

    fn query_admin(env: Env) -> Address {
        get_admin(&env)
    }

    fn query_pool(env: Env, pid: u32) -> Result<PoolInfo, ErrorCode> {
        get_pool(&env, pid)
    }

    fn query_pool_length(env: Env) -> u32 {
        get_pool_length(&env)
    }

    fn query_user_info(env: Env, pid: u32, user: Address) -> UserInfo {
        get_user_info(&env, pid, &user)
    }

    fn pending_tokens(env: Env, pid: u32, user: Address) -> Result<i128, ErrorCode> {
        let config = get_config(&env);
        let pool = get_pool(&env, pid)?;
        let info = get_user_info(&env, pid, &user);

        let now = env.ledger().timestamp();
        let mut acc_reward_per_share = pool.acc_reward_per_share;
        if now > pool.last_reward_time {
            let emission = controller::pool::pending_emission(
                &env,
                &config,
                &pool,
                get_total_alloc_point(&env),
                now
            )?;
            if let Some(emission) = emission {
                acc_reward_per_share = acc_reward_per_share.safe_add(
                    mul_div_floor(&env, emission.pool, ACC_PRECISION, pool.total_deposited)?,
                    &env
                )?;
            }
        }

        let pending = mul_div_floor(&env, info.amount, acc_reward_per_share, ACC_PRECISION)?
            .safe_sub(info.reward_debt, &env)?;
        Ok(pending.safe_add(info.reward_locked_up, &env)?)
    }

    fn can_harvest(env: Env, pid: u32, user: Address) -> bool {
        controller::stake::can_harvest(&env, &get_config(&env), &get_user_info(&env, pid, &user))
    }

    fn query_total_alloc_point(env: Env) -> u32 {
        get_total_alloc_point(&env)
    }

    fn query_total_locked_up_rewards(env: Env) -> i128 {
        get_total_locked_up_rewards(&env)
    }
}
