use eazyswap::{ math::safe_math::SafeMath, validate };
use soroban_sdk::{ Address, Env };
use soroban_token_sdk::TokenUtils;

use crate::{
    balance::{ read_total_supply, receive_balance, spend_balance, write_total_supply },
    errors::ErrorCode,
    storage::is_transfer_whitelisted,
};

pub fn mint_shares(env: &Env, to: &Address, amount: i128) -> Result<(), ErrorCode> {
    receive_balance(env, to.clone(), amount)?;
    write_total_supply(env, read_total_supply(env).safe_add(amount, env)?);

    TokenUtils::new(env).events().mint(env.current_contract_address(), to.clone(), amount);
    Ok(())
}

pub fn burn_shares(env: &Env, from: &Address, amount: i128) -> Result<(), ErrorCode> {
    spend_balance(env, from.clone(), amount)?;
    write_total_supply(env, read_total_supply(env).safe_sub(amount, env)?);

    TokenUtils::new(env).events().burn(from.clone(), amount);
    Ok(())
}

/// Every share movement between two accounts goes through here. Shares are
/// non-transferable unless one side is whitelisted.
pub fn move_shares(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), ErrorCode> {
    validate!(
        env,
        is_transfer_whitelisted(env, from) || is_transfer_whitelisted(env, to),
        ErrorCode::TransferNotAllowed,
        "xEazyToken: transfer not allowed"
    )?;

    spend_balance(env, from.clone(), amount)?;
    receive_balance(env, to.clone(), amount)?;

    TokenUtils::new(env).events().transfer(from.clone(), to.clone(), amount);
    Ok(())
}
