use eazyswap::{
    interfaces::usage::UsageClient,
    math::{ helpers::bps_of, safe_math::SafeMath },
    safe_decrement,
    safe_increment,
    validate,
};
use soroban_sdk::{ token, Address, Bytes, Env };

use crate::{
    controller::shares::{ burn_shares, move_shares },
    errors::ErrorCode,
    events::XEazyTokenEvents,
    storage::{ get_config, get_escrow_balance, save_escrow_balance },
    usage::{
        get_deallocation_fee,
        get_usage_allocation,
        get_usage_approval,
        save_usage_allocation,
        save_usage_approval,
    },
};

pub fn approve_usage(env: &Env, user: &Address, usage: &Address, amount: i128) -> Result<(), ErrorCode> {
    validate!(
        env,
        amount >= 0,
        ErrorCode::NegativeAmount,
        "xEazyToken: Approve Usage: negative amount"
    )?;

    save_usage_approval(env, user, usage, amount);

    XEazyTokenEvents::approve_usage(env, user.clone(), usage.clone(), amount);
    Ok(())
}

/// Allocates and notifies the usage contract.
pub fn allocate_with_hook(
    env: &Env,
    user: &Address,
    usage: &Address,
    amount: i128,
    data: &Bytes
) -> Result<(), ErrorCode> {
    allocate(env, user, usage, amount)?;
    UsageClient::new(env, usage).allocate(user, &amount, data);
    Ok(())
}

/// Deallocates and notifies the usage contract.
pub fn deallocate_with_hook(
    env: &Env,
    user: &Address,
    usage: &Address,
    amount: i128,
    data: &Bytes
) -> Result<(), ErrorCode> {
    deallocate(env, user, usage, amount)?;
    UsageClient::new(env, usage).deallocate(user, &amount, data);
    Ok(())
}

/// Consumes `amount` of the user's approval for `usage` and moves the
/// shares into escrow custody.
pub fn allocate(env: &Env, user: &Address, usage: &Address, amount: i128) -> Result<(), ErrorCode> {
    validate!(env, amount > 0, ErrorCode::ZeroAmount, "xEazyToken: Allocate: amount cannot be null")?;

    let approval = get_usage_approval(env, user, usage);
    validate!(
        env,
        approval >= amount,
        ErrorCode::UnauthorizedAmount,
        "xEazyToken: Allocate: non authorized amount"
    )?;

    save_usage_approval(env, user, usage, approval - amount);

    let allocation = get_usage_allocation(env, user, usage).safe_add(amount, env)?;
    save_usage_allocation(env, user, usage, allocation);

    let mut balance = get_escrow_balance(env, user);
    safe_increment!(balance.allocated_amount, amount);
    save_escrow_balance(env, user, &balance);

    move_shares(env, user, &env.current_contract_address(), amount)?;

    XEazyTokenEvents::allocate(env, user.clone(), usage.clone(), amount);
    Ok(())
}

/// Releases `amount` of the user's allocation to `usage`. The usage's
/// deallocation fee is burned as both shares and base token; the rest is
/// returned to the user.
pub fn deallocate(env: &Env, user: &Address, usage: &Address, amount: i128) -> Result<(), ErrorCode> {
    validate!(env, amount > 0, ErrorCode::ZeroAmount, "xEazyToken: Deallocate: amount cannot be null")?;

    let allocation = get_usage_allocation(env, user, usage);
    validate!(
        env,
        allocation >= amount,
        ErrorCode::UnauthorizedAmount,
        "xEazyToken: Deallocate: non authorized amount"
    )?;

    save_usage_allocation(env, user, usage, allocation - amount);

    let mut balance = get_escrow_balance(env, user);
    safe_decrement!(balance.allocated_amount, amount);
    save_escrow_balance(env, user, &balance);

    let fee = bps_of(env, amount, get_deallocation_fee(env, usage))?;
    let escrow = env.current_contract_address();

    move_shares(env, &escrow, user, amount.safe_sub(fee, env)?)?;

    if fee > 0 {
        burn_shares(env, &escrow, fee)?;
        token::Client::new(env, &get_config(env).base_token).burn(&escrow, &fee);
    }

    XEazyTokenEvents::deallocate(env, user.clone(), usage.clone(), amount, fee);
    Ok(())
}
