use eazyswap::{ constants::{ INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD }, validate };
use soroban_sdk::token::TokenInterface;
use soroban_sdk::{ contract, contractimpl, contractmeta, log, panic_with_error, Address, Env, String };
use soroban_token_sdk::{ metadata::TokenMetadata, TokenUtils };

use crate::{
    admin::{ read_administrator, read_minter, write_administrator, write_minter },
    allowance::{ read_allowance, spend_allowance, write_allowance },
    balance::{ adjust_total_supply, credit, debit, read_balance, read_total_supply },
    errors::ErrorCode,
    events::EazyTokenEvents,
};

contractmeta!(key = "Description", val = "EazySwap governance and utility token");

#[contract]
pub struct EazyToken;

fn bump_instance(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn check_nonnegative_amount(env: &Env, amount: i128) {
    if amount < 0 {
        log!(env, "EazyToken: negative amount is not allowed: {}", amount);
        panic_with_error!(env, ErrorCode::NegativeAmount);
    }
}

/// Token interface calls cannot return errors, so they abort with the code.
fn unwrap_or_abort(env: &Env, result: Result<(), ErrorCode>) {
    if let Err(error) = result {
        panic_with_error!(env, error);
    }
}

fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), ErrorCode> {
    debit(env, from.clone(), amount)?;
    credit(env, to.clone(), amount)?;
    TokenUtils::new(env).events().transfer(from.clone(), to.clone(), amount);
    Ok(())
}

fn burn_balance(env: &Env, from: &Address, amount: i128) -> Result<(), ErrorCode> {
    debit(env, from.clone(), amount)?;
    adjust_total_supply(env, -amount)?;
    TokenUtils::new(env).events().burn(from.clone(), amount);
    Ok(())
}

/// Only the admin manages the minter registry.
fn set_minter(env: &Env, minter: Address, enabled: bool) {
    read_administrator(env).require_auth();
    bump_instance(env);

    write_minter(env, &minter, enabled);
    EazyTokenEvents::minter_updated(env, minter, enabled);
}

#[contractimpl]
impl EazyToken {
    pub fn __constructor(env: Env, admin: Address, decimal: u32, name: String, symbol: String) {
        if decimal > 18 {
            log!(&env, "EazyToken: Constructor: decimal must not be greater than 18");
            panic_with_error!(&env, ErrorCode::DecimalTooLarge);
        }

        write_administrator(&env, &admin);
        TokenUtils::new(&env).metadata().set_metadata(&(TokenMetadata { decimal, name, symbol }));
    }

    /// Mints `amount` to `to`. Only registered minters may mint.
    pub fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), ErrorCode> {
        check_nonnegative_amount(&env, amount);
        minter.require_auth();
        bump_instance(&env);

        validate!(
            &env,
            read_minter(&env, &minter),
            ErrorCode::NotMinter,
            "EazyToken: Mint: caller is not a registered minter"
        )?;

        credit(&env, to.clone(), amount)?;
        adjust_total_supply(&env, amount)?;
        TokenUtils::new(&env).events().mint(minter, to, amount);
        Ok(())
    }

    pub fn add_minter(env: Env, minter: Address) {
        set_minter(&env, minter, true);
    }

    pub fn remove_minter(env: Env, minter: Address) {
        set_minter(&env, minter, false);
    }

    pub fn set_admin(env: Env, new_admin: Address) {
        let admin = read_administrator(&env);
        admin.require_auth();
        bump_instance(&env);

        write_administrator(&env, &new_admin);
        TokenUtils::new(&env).events().set_admin(admin, new_admin);
    }

    pub fn is_minter(env: Env, minter: Address) -> bool {
        read_minter(&env, &minter)
    }

    pub fn query_admin(env: Env) -> Address {
        read_administrator(&env)
    }

    pub fn total_supply(env: Env) -> i128 {
        bump_instance(&env);
        read_total_supply(&env)
    }
}

#[contractimpl]
impl TokenInterface for EazyToken {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&env);
        read_allowance(&env, from, spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        check_nonnegative_amount(&env, amount);
        from.require_auth();
        bump_instance(&env);

        unwrap_or_abort(
            &env,
            write_allowance(&env, from.clone(), spender.clone(), amount, expiration_ledger)
        );
        TokenUtils::new(&env).events().approve(from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        bump_instance(&env);
        read_balance(&env, id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        check_nonnegative_amount(&env, amount);
        from.require_auth();
        bump_instance(&env);

        unwrap_or_abort(&env, move_balance(&env, &from, &to, amount));
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        check_nonnegative_amount(&env, amount);
        spender.require_auth();
        bump_instance(&env);

        unwrap_or_abort(&env, spend_allowance(&env, from.clone(), spender, amount));
        unwrap_or_abort(&env, move_balance(&env, &from, &to, amount));
    }

    fn burn(env: Env, from: Address, amount: i128) {
        check_nonnegative_amount(&env, amount);
        from.require_auth();
        bump_instance(&env);

        unwrap_or_abort(&env, burn_balance(&env, &from, amount));
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        check_nonnegative_amount(&env, amount);
        spender.require_auth();
        bump_instance(&env);

        unwrap_or_abort(&env, spend_allowance(&env, from.clone(), spender, amount));
        unwrap_or_abort(&env, burn_balance(&env, &from, amount));
    }

    fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }

    fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }
}
