use eazyswap::{
    constants::SCALE,
    interfaces::usage::UsageClient,
    math::{ helpers::mul_div_floor, safe_math::SafeMath },
    safe_decrement,
    safe_increment,
    validate,
};
use soroban_sdk::{ log, token, Address, Bytes, Env };

use crate::{
    controller::shares::{ burn_shares, mint_shares, move_shares },
    errors::ErrorCode,
    events::XEazyTokenEvents,
    storage::{
        get_config,
        get_escrow_balance,
        get_redeems,
        remove_redeem,
        save_escrow_balance,
        save_redeems,
        Config,
        RedeemInfo,
    },
};

pub fn convert(env: &Env, from: &Address, amount: i128, to: &Address) -> Result<(), ErrorCode> {
    validate!(env, amount > 0, ErrorCode::ZeroAmount, "xEazyToken: Convert: amount cannot be null")?;

    let config = get_config(env);
    token::Client::new(env, &config.base_token).transfer(
        from,
        &env.current_contract_address(),
        &amount
    );

    mint_shares(env, to, amount)?;

    XEazyTokenEvents::convert(env, from.clone(), to.clone(), amount);
    Ok(())
}

pub fn redeem(env: &Env, user: &Address, share_amount: i128, duration: u64) -> Result<(), ErrorCode> {
    validate!(env, share_amount > 0, ErrorCode::ZeroAmount, "xEazyToken: Redeem: amount cannot be null")?;

    let config = get_config(env);
    validate!(
        env,
        duration >= config.redeem_curve.min_duration,
        ErrorCode::DurationTooLow,
        "xEazyToken: Redeem: duration too low"
    )?;

    let escrow = env.current_contract_address();
    move_shares(env, user, &escrow, share_amount)?;

    let base_amount = config.redeem_curve.redeemable(env, share_amount, duration)?;
    XEazyTokenEvents::redeem(env, user.clone(), share_amount, base_amount, duration);

    if duration == 0 {
        // only reachable with a zero minimum duration; pays the curve at zero elapsed time
        return pay_out_redeem(env, &config, user, share_amount, base_amount);
    }

    let mut balance = get_escrow_balance(env, user);
    safe_increment!(balance.redeeming_amount, share_amount);
    save_escrow_balance(env, user, &balance);

    let mut dividends_address = None;
    let mut dividends_allocation = 0;
    if base_amount > 0 {
        if let Some(dividends) = config.dividends_address.clone() {
            dividends_allocation = mul_div_floor(
                env,
                share_amount,
                config.dividends_adjustment,
                SCALE
            )?;
            dividends_address = Some(dividends);
        }
    }

    let start_time = env.ledger().timestamp();
    let mut redeems = get_redeems(env, user);
    redeems.push_back(RedeemInfo {
        share_amount,
        base_amount_at_maturity: base_amount,
        start_time,
        end_time: start_time.safe_add(duration, env)?,
        dividends_address: dividends_address.clone(),
        dividends_allocation,
    });
    save_redeems(env, user, &redeems);

    if let Some(dividends) = dividends_address {
        if dividends_allocation > 0 {
            UsageClient::new(env, &dividends).allocate(
                user,
                &dividends_allocation,
                &Bytes::new(env)
            );
        }
    }

    Ok(())
}

/// Pays a matured redeem using the time actually elapsed since it started.
pub fn finalize_redeem(env: &Env, user: &Address, index: u32) -> Result<(), ErrorCode> {
    let config = get_config(env);
    let mut redeems = get_redeems(env, user);
    let redeem = redeems.get(index).ok_or_else(|| {
        log!(env, "xEazyToken: Finalize Redeem: redeem entry does not exist");
        ErrorCode::RedeemNotFound
    })?;

    let elapsed = env.ledger().timestamp().safe_sub(redeem.start_time, env)?;
    validate!(
        env,
        elapsed >= config.redeem_curve.min_duration,
        ErrorCode::RedeemTooEarly,
        "xEazyToken: Finalize Redeem: minimum duration has not elapsed"
    )?;

    let base_amount = config.redeem_curve.redeemable(env, redeem.share_amount, elapsed)?;

    let mut balance = get_escrow_balance(env, user);
    safe_decrement!(balance.redeeming_amount, redeem.share_amount);
    save_escrow_balance(env, user, &balance);

    remove_redeem(&mut redeems, index);
    save_redeems(env, user, &redeems);

    pay_out_redeem(env, &config, user, redeem.share_amount, base_amount)?;
    release_dividends_allocation(env, user, &redeem);

    Ok(())
}

/// Returns the full escrowed shares of a pending redeem to the user.
pub fn cancel_redeem(env: &Env, user: &Address, index: u32) -> Result<(), ErrorCode> {
    let mut redeems = get_redeems(env, user);
    let redeem = redeems.get(index).ok_or_else(|| {
        log!(env, "xEazyToken: Cancel Redeem: redeem entry does not exist");
        ErrorCode::RedeemNotFound
    })?;

    let mut balance = get_escrow_balance(env, user);
    safe_decrement!(balance.redeeming_amount, redeem.share_amount);
    save_escrow_balance(env, user, &balance);

    remove_redeem(&mut redeems, index);
    save_redeems(env, user, &redeems);

    move_shares(env, &env.current_contract_address(), user, redeem.share_amount)?;
    release_dividends_allocation(env, user, &redeem);

    XEazyTokenEvents::cancel_redeem(env, user.clone(), redeem.share_amount);
    Ok(())
}

/// Moves a pending redeem's dividends allocation to the currently configured
/// dividends contract. No-op when none is configured or it is unchanged.
pub fn update_redeem_dividends_address(
    env: &Env,
    user: &Address,
    index: u32
) -> Result<(), ErrorCode> {
    let config = get_config(env);
    let mut redeems = get_redeems(env, user);
    let mut redeem = redeems.get(index).ok_or_else(|| {
        log!(env, "xEazyToken: Update Redeem Dividends Address: redeem entry does not exist");
        ErrorCode::RedeemNotFound
    })?;

    let new_dividends = match config.dividends_address {
        Some(dividends) if redeem.dividends_address.as_ref() != Some(&dividends) => dividends,
        _ => {
            return Ok(());
        }
    };

    let previous = redeem.dividends_address.clone();
    redeem.dividends_address = Some(new_dividends.clone());
    redeems.set(index, redeem.clone());
    save_redeems(env, user, &redeems);

    if redeem.dividends_allocation > 0 {
        if let Some(previous) = previous.clone() {
            UsageClient::new(env, &previous).deallocate(
                user,
                &redeem.dividends_allocation,
                &Bytes::new(env)
            );
        }
        UsageClient::new(env, &new_dividends).allocate(
            user,
            &redeem.dividends_allocation,
            &Bytes::new(env)
        );
    }

    XEazyTokenEvents::update_redeem_dividends_address(
        env,
        user.clone(),
        index,
        previous,
        new_dividends
    );
    Ok(())
}

/// Burns the redeemed shares, pays `base_amount` and burns the base excess.
fn pay_out_redeem(
    env: &Env,
    config: &Config,
    user: &Address,
    share_amount: i128,
    base_amount: i128
) -> Result<(), ErrorCode> {
    let escrow = env.current_contract_address();
    let excess = share_amount.safe_sub(base_amount, env)?;

    burn_shares(env, &escrow, share_amount)?;

    let base_token = token::Client::new(env, &config.base_token);
    if base_amount > 0 {
        base_token.transfer(&escrow, user, &base_amount);
    }
    if excess > 0 {
        base_token.burn(&escrow, &excess);
    }

    XEazyTokenEvents::finalize_redeem(env, user.clone(), share_amount, base_amount);
    Ok(())
}

fn release_dividends_allocation(env: &Env, user: &Address, redeem: &RedeemInfo) {
    if redeem.dividends_allocation <= 0 {
        return;
    }
    if let Some(dividends) = redeem.dividends_address.clone() {
        UsageClient::new(env, &dividends).deallocate(
            user,
            &redeem.dividends_allocation,
            &Bytes::new(env)
        );
    }
}
