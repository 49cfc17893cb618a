use eazyswap::{
    constants::ACC_PRECISION,
    interfaces::escrow::EscrowClient,
    math::{ helpers::{ bps_of, mul_div_floor }, safe_math::SafeMath },
    safe_decrement,
    safe_increment,
    validate,
};
use soroban_sdk::{
    auth::{ ContractContext, InvokerContractAuthEntry, SubContractInvocation },
    token,
    vec,
    Address,
    Env,
    IntoVal,
    Symbol,
    Vec,
};

use crate::{
    controller::pool::{ base_token_principal, update_pool },
    errors::ErrorCode,
    events::DistributorEvents,
    storage::{
        get_config,
        get_pool,
        get_total_locked_up_rewards,
        get_user_info,
        save_pool,
        save_total_locked_up_rewards,
        save_user_info,
        Config,
        PoolInfo,
        UserInfo,
        MAX_HARVEST_POOLS,
    },
};

/// Stakes `amount` of the pool's token. A zero amount only harvests.
pub fn deposit(env: &Env, user: &Address, pid: u32, amount: i128) -> Result<(), ErrorCode> {
    validate!(env, amount >= 0, ErrorCode::NegativeAmount, "Distributor: Deposit: negative amount")?;

    let config = get_config(env);
    let mut pool = update_pool(env, pid)?;
    let mut info = get_user_info(env, pid, user);

    pay_or_lockup_pending(env, &config, pid, &pool, user, &mut info)?;

    let mut fee = 0;
    if amount > 0 {
        let distributor = env.current_contract_address();
        let lp_token = token::Client::new(env, &pool.lp_token);
        lp_token.transfer(user, &distributor, &amount);

        fee = bps_of(env, amount, pool.deposit_fee_bps)?;
        if fee > 0 {
            lp_token.transfer(&distributor, &config.fee_address, &fee);
        }

        let staked = amount.safe_sub(fee, env)?;
        safe_increment!(info.amount, staked);
        safe_increment!(pool.total_deposited, staked);
        save_pool(env, pid, &pool);
    }

    info.reward_debt = mul_div_floor(env, info.amount, pool.acc_reward_per_share, ACC_PRECISION)?;
    save_user_info(env, pid, user, &info);

    DistributorEvents::deposit(env, user.clone(), pid, amount, fee);
    Ok(())
}

pub fn withdraw(env: &Env, user: &Address, pid: u32, amount: i128) -> Result<(), ErrorCode> {
    validate!(env, amount >= 0, ErrorCode::NegativeAmount, "Distributor: Withdraw: negative amount")?;

    let config = get_config(env);
    let mut pool = update_pool(env, pid)?;
    let mut info = get_user_info(env, pid, user);

    validate!(
        env,
        info.amount >= amount && pool.total_deposited >= amount,
        ErrorCode::WithdrawTooLarge,
        "Distributor: Withdraw: amount exceeds the stake"
    )?;

    pay_or_lockup_pending(env, &config, pid, &pool, user, &mut info)?;

    if amount > 0 {
        safe_decrement!(info.amount, amount);
        safe_decrement!(pool.total_deposited, amount);
        save_pool(env, pid, &pool);
    }

    info.reward_debt = mul_div_floor(env, info.amount, pool.acc_reward_per_share, ACC_PRECISION)?;
    save_user_info(env, pid, user, &info);

    if amount > 0 {
        token::Client::new(env, &pool.lp_token).transfer(
            &env.current_contract_address(),
            user,
            &amount
        );
    }

    DistributorEvents::withdraw(env, user.clone(), pid, amount);
    Ok(())
}

/// Returns the principal without settling rewards. Pending and locked-up
/// rewards are forfeited.
pub fn emergency_withdraw(env: &Env, user: &Address, pid: u32) -> Result<(), ErrorCode> {
    let mut pool = get_pool(env, pid)?;
    let info = get_user_info(env, pid, user);

    safe_decrement!(pool.total_deposited, info.amount);
    save_pool(env, pid, &pool);

    let total_locked = get_total_locked_up_rewards(env).safe_sub(info.reward_locked_up, env)?;
    save_total_locked_up_rewards(env, total_locked);

    save_user_info(env, pid, user, &UserInfo::default());

    if info.amount > 0 {
        token::Client::new(env, &pool.lp_token).transfer(
            &env.current_contract_address(),
            user,
            &info.amount
        );
    }

    DistributorEvents::emergency_withdraw(env, user.clone(), pid, info.amount, info.reward_locked_up);
    Ok(())
}

pub fn harvest_many(env: &Env, user: &Address, pids: &Vec<u32>) -> Result<(), ErrorCode> {
    validate!(
        env,
        pids.len() <= MAX_HARVEST_POOLS,
        ErrorCode::TooManyPools,
        "Distributor: Harvest Many: at most 30 pools per call"
    )?;

    for pid in pids.iter() {
        deposit(env, user, pid, 0)?;
    }
    Ok(())
}

pub fn can_harvest(env: &Env, config: &Config, info: &UserInfo) -> bool {
    let now = env.ledger().timestamp();
    now >= config.start_time && now >= info.next_harvest_until
}

/// Settles the user's pending reward: paid out when the harvest lockup is
/// over, otherwise added to the locked-up balance.
fn pay_or_lockup_pending(
    env: &Env,
    config: &Config,
    pid: u32,
    pool: &PoolInfo,
    user: &Address,
    info: &mut UserInfo
) -> Result<(), ErrorCode> {
    let now = env.ledger().timestamp();

    if pool.harvest_interval == 0 {
        info.next_harvest_until = 0;
    } else if info.next_harvest_until == 0 && now >= config.start_time {
        info.next_harvest_until = now.safe_add(pool.harvest_interval, env)?;
    }

    let pending = mul_div_floor(env, info.amount, pool.acc_reward_per_share, ACC_PRECISION)?
        .safe_sub(info.reward_debt, env)?;

    if can_harvest(env, config, info) {
        if pending <= 0 && info.reward_locked_up <= 0 {
            return Ok(());
        }

        let released = pending.safe_add(info.reward_locked_up, env)?;
        let total_locked = get_total_locked_up_rewards(env).safe_sub(info.reward_locked_up, env)?;
        save_total_locked_up_rewards(env, total_locked);

        info.reward_locked_up = 0;
        info.next_harvest_until = if pool.harvest_interval == 0 {
            0
        } else {
            now.safe_add(pool.harvest_interval, env)?
        };

        let paid = pay_rewards(env, config, user, released)?;
        DistributorEvents::harvest(env, user.clone(), pid, released, paid);
    } else if pending > 0 {
        safe_increment!(info.reward_locked_up, pending);
        let total_locked = get_total_locked_up_rewards(env).safe_add(pending, env)?;
        save_total_locked_up_rewards(env, total_locked);

        DistributorEvents::reward_locked_up(env, user.clone(), pid, pending);
    }

    Ok(())
}

/// Pays up to `amount` EAZY, never touching staked EAZY principal. The
/// configured share is locked into xEAZY for the user. Returns the amount paid.
///
/// Only pools staking EAZY itself count toward the protected principal. Other
/// pools hold different tokens, so their deposits never sit in the EAZY balance.
fn pay_rewards(env: &Env, config: &Config, user: &Address, amount: i128) -> Result<i128, ErrorCode> {
    let distributor = env.current_contract_address();
    let eazy = token::Client::new(env, &config.eazy_token);

    let surplus = eazy
        .balance(&distributor)
        .safe_sub(base_token_principal(env, &config.eazy_token)?, env)?;
    let paid = amount.min(surplus);
    if paid <= 0 {
        return Ok(0);
    }

    let x_amount = bps_of(env, paid, config.x_eazy_rewards_percent)?;
    let eazy_amount = paid.safe_sub(x_amount, env)?;

    if x_amount > 0 {
        // the escrow pulls the EAZY from the distributor while converting
        env.authorize_as_current_contract(
            vec![
                env,
                InvokerContractAuthEntry::Contract(SubContractInvocation {
                    context: ContractContext {
                        contract: config.eazy_token.clone(),
                        fn_name: Symbol::new(env, "transfer"),
                        args: (
                            distributor.clone(),
                            config.x_eazy_token.clone(),
                            x_amount,
                        ).into_val(env),
                    },
                    sub_invocations: vec![env],
                })
            ]
        );
        EscrowClient::new(env, &config.x_eazy_token).convert(&distributor, &x_amount, user);
    }

    if eazy_amount > 0 {
        eazy.transfer(&distributor, user, &eazy_amount);
    }

    Ok(paid)
}
