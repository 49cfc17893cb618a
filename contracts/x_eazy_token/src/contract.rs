use eazyswap::{
    constants::{ INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, SCALE },
    math::vesting::VestingCurve,
    validate,
};
use soroban_sdk::token::TokenInterface;
use soroban_sdk::{
    contract,
    contractimpl,
    contractmeta,
    log,
    panic_with_error,
    vec,
    Address,
    Bytes,
    Env,
    String,
    Vec,
};
use soroban_token_sdk::{ metadata::TokenMetadata, TokenUtils };

use crate::{
    allowance::{ read_allowance, spend_allowance, write_allowance },
    balance::{ read_balance, read_total_supply },
    controller,
    errors::ErrorCode,
    events::XEazyTokenEvents,
    storage::{
        self,
        get_config,
        get_escrow_balance,
        get_redeems,
        get_transfer_whitelist,
        save_config,
        save_transfer_whitelist,
        utils::{ get_admin, save_admin },
        Config,
        EscrowBalance,
        RedeemInfo,
        DEFAULT_DIVIDENDS_ADJUSTMENT,
        DEFAULT_MAX_REDEEM_DURATION,
        DEFAULT_MAX_REDEEM_RATIO,
        DEFAULT_MIN_REDEEM_DURATION,
        DEFAULT_MIN_REDEEM_RATIO,
        MAX_DEALLOCATION_FEE_BPS,
    },
    usage::{
        get_deallocation_fee,
        get_usage_allocation,
        get_usage_approval,
        save_deallocation_fee,
    },
    x_eazy_token::XEazyTokenTrait,
};

contractmeta!(
    key = "Description",
    val = "Non-transferable escrow share token redeemable for EAZY along a vesting curve"
);

#[contract]
pub struct XEazyToken;

fn bump_instance(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn check_nonnegative_amount(env: &Env, amount: i128) {
    if amount < 0 {
        log!(env, "xEazyToken: negative amount is not allowed: {}", amount);
        panic_with_error!(env, ErrorCode::NegativeAmount);
    }
}

/// Token interface calls cannot return errors, so they abort with the code.
fn unwrap_or_abort(env: &Env, result: Result<(), ErrorCode>) {
    if let Err(error) = result {
        panic_with_error!(env, error);
    }
}

/// Applies an administrative change to the configuration and bumps its version.
fn update_config<F>(env: &Env, mutate: F) -> Result<Config, ErrorCode>
    where F: FnOnce(&mut Config) -> Result<(), ErrorCode>
{
    let admin = get_admin(env);
    admin.require_auth();
    bump_instance(env);

    let mut config = get_config(env);
    mutate(&mut config)?;
    config.version = config.version.checked_add(1).ok_or(ErrorCode::MathError)?;
    save_config(env, &config);

    Ok(config)
}

#[contractimpl]
impl XEazyToken {
    pub fn __constructor(
        env: Env,
        admin: Address,
        base_token: Address,
        decimal: u32,
        name: String,
        symbol: String
    ) {
        if decimal > 18 {
            log!(&env, "xEazyToken: Constructor: decimal must not be greater than 18");
            panic_with_error!(&env, ErrorCode::DecimalTooLarge);
        }

        save_admin(&env, &admin);
        save_config(
            &env,
            &(Config {
                base_token,
                redeem_curve: VestingCurve {
                    min_ratio: DEFAULT_MIN_REDEEM_RATIO,
                    max_ratio: DEFAULT_MAX_REDEEM_RATIO,
                    min_duration: DEFAULT_MIN_REDEEM_DURATION,
                    max_duration: DEFAULT_MAX_REDEEM_DURATION,
                },
                dividends_adjustment: DEFAULT_DIVIDENDS_ADJUSTMENT,
                dividends_address: None,
                version: 0,
            })
        );
        save_transfer_whitelist(&env, &vec![&env, env.current_contract_address()]);

        TokenUtils::new(&env).metadata().set_metadata(
            &(TokenMetadata {
                decimal,
                name,
                symbol,
            })
        );
    }
}

#[contractimpl]
impl XEazyTokenTrait for XEazyToken {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn update_redeem_settings(
        env: Env,
        min_ratio: i128,
        max_ratio: i128,
        min_duration: u64,
        max_duration: u64,
        dividends_adjustment: i128
    ) -> Result<(), ErrorCode> {
        let curve = VestingCurve {
            min_ratio,
            max_ratio,
            min_duration,
            max_duration,
        };

        let config = update_config(&env, |config| {
            validate!(
                &env,
                curve.is_valid() && (0..=SCALE).contains(&dividends_adjustment),
                ErrorCode::InvalidRedeemSettings,
                "xEazyToken: Update Redeem Settings: invalid ratio or duration"
            )?;
            config.redeem_curve = curve.clone();
            config.dividends_adjustment = dividends_adjustment;
            Ok(())
        })?;

        XEazyTokenEvents::update_redeem_settings(
            &env,
            get_admin(&env),
            config.redeem_curve,
            config.dividends_adjustment
        );
        Ok(())
    }

    fn update_dividends_address(env: Env, dividends: Option<Address>) -> Result<(), ErrorCode> {
        let mut previous = None;
        update_config(&env, |config| {
            let mut whitelist = get_transfer_whitelist(&env);
            if let Some(old) = config.dividends_address.clone() {
                if old != env.current_contract_address() {
                    if let Some(index) = whitelist.first_index_of(&old) {
                        whitelist.remove(index);
                    }
                }
            }
            if let Some(new) = dividends.clone() {
                if !whitelist.contains(&new) {
                    whitelist.push_back(new);
                }
            }
            save_transfer_whitelist(&env, &whitelist);

            previous = config.dividends_address.clone();
            config.dividends_address = dividends.clone();
            Ok(())
        })?;

        XEazyTokenEvents::update_dividends_address(&env, get_admin(&env), previous, dividends);
        Ok(())
    }

    fn update_deallocation_fee(env: Env, usage: Address, fee_bps: u32) -> Result<(), ErrorCode> {
        update_config(&env, |_| {
            validate!(
                &env,
                fee_bps <= MAX_DEALLOCATION_FEE_BPS,
                ErrorCode::DeallocationFeeTooHigh,
                "xEazyToken: Update Deallocation Fee: fee above 2%"
            )?;
            save_deallocation_fee(&env, &usage, fee_bps);
            Ok(())
        })?;

        XEazyTokenEvents::update_deallocation_fee(&env, usage, fee_bps);
        Ok(())
    }

    fn update_transfer_whitelist(env: Env, account: Address, add: bool) -> Result<(), ErrorCode> {
        update_config(&env, |_| {
            validate!(
                &env,
                add || account != env.current_contract_address(),
                ErrorCode::CannotRemoveSelf,
                "xEazyToken: Update Transfer Whitelist: cannot remove the escrow itself"
            )?;

            let mut whitelist = get_transfer_whitelist(&env);
            match (add, whitelist.first_index_of(&account)) {
                (true, None) => whitelist.push_back(account.clone()),
                (false, Some(index)) => {
                    whitelist.remove(index);
                }
                _ => {}
            }
            save_transfer_whitelist(&env, &whitelist);
            Ok(())
        })?;

        XEazyTokenEvents::set_transfer_whitelist(&env, account, add);
        Ok(())
    }

    fn set_admin(env: Env, new_admin: Address) {
        let admin = get_admin(&env);
        admin.require_auth();
        bump_instance(&env);

        save_admin(&env, &new_admin);
        TokenUtils::new(&env).events().set_admin(admin, new_admin);
    }

    // ################################################################
    //                             USER
    // ################################################################

    fn convert(env: Env, from: Address, amount: i128, to: Address) -> Result<(), ErrorCode> {
        from.require_auth();
        bump_instance(&env);

        controller::redeem::convert(&env, &from, amount, &to)
    }

    fn redeem(env: Env, user: Address, share_amount: i128, duration: u64) -> Result<(), ErrorCode> {
        user.require_auth();
        bump_instance(&env);

        controller::redeem::redeem(&env, &user, share_amount, duration)
    }

    fn finalize_redeem(env: Env, user: Address, index: u32) -> Result<(), ErrorCode> {
        user.require_auth();
        bump_instance(&env);

        controller::redeem::finalize_redeem(&env, &user, index)
    }

    fn cancel_redeem(env: Env, user: Address, index: u32) -> Result<(), ErrorCode> {
        user.require_auth();
        bump_instance(&env);

        controller::redeem::cancel_redeem(&env, &user, index)
    }

    fn update_redeem_dividends_address(env: Env, user: Address, index: u32) -> Result<(), ErrorCode> {
        user.require_auth();
        bump_instance(&env);

        controller::redeem::update_redeem_dividends_address(&env, &user, index)
    }

    fn approve_usage(env: Env, user: Address, usage: Address, amount: i128) -> Result<(), ErrorCode> {
        user.require_auth();
        bump_instance(&env);

        controller::allocation::approve_usage(&env, &user, &usage, amount)
    }

    fn allocate(
        env: Env,
        user: Address,
        usage: Address,
        amount: i128,
        data: Bytes
    ) -> Result<(), ErrorCode> {
        user.require_auth();
        bump_instance(&env);

        controller::allocation::allocate_with_hook(&env, &user, &usage, amount, &data)
    }

    fn allocate_from_usage(
        env: Env,
        usage: Address,
        user: Address,
        amount: i128
    ) -> Result<(), ErrorCode> {
        usage.require_auth();
        bump_instance(&env);

        controller::allocation::allocate(&env, &user, &usage, amount)
    }

    fn deallocate(
        env: Env,
        user: Address,
        usage: Address,
        amount: i128,
        data: Bytes
    ) -> Result<(), ErrorCode> {
        user.require_auth();
        bump_instance(&env);

        controller::allocation::deallocate_with_hook(&env, &user, &usage, amount, &data)
    }

    fn deallocate_from_usage(
        env: Env,
        usage: Address,
        user: Address,
        amount: i128
    ) -> Result<(), ErrorCode> {
        usage.require_auth();
        bump_instance(&env);

        controller::allocation::deallocate(&env, &user, &usage, amount)
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

    fn query_escrow_balance(env: Env, user: Address) -> EscrowBalance {
        get_escrow_balance(&env, &user)
    }

    fn query_redeems_length(env: Env, user: Address) -> u32 {
        get_redeems(&env, &user).len()
    }

    fn query_redeem(env: Env, user: Address, index: u32) -> Result<RedeemInfo, ErrorCode> {
        get_redeems(&env, &user).get(index).ok_or(ErrorCode::RedeemNotFound)
    }

    fn query_redeems(env: Env, user: Address) -> Vec<RedeemInfo> {
        get_redeems(&env, &user)
    }

    fn query_redeemable(env: Env, amount: i128, duration: u64) -> Result<i128, ErrorCode> {
        Ok(get_config(&env).redeem_curve.redeemable(&env, amount, duration)?)
    }

    fn query_usage_approval(env: Env, user: Address, usage: Address) -> i128 {
        get_usage_approval(&env, &user, &usage)
    }

    fn query_usage_allocation(env: Env, user: Address, usage: Address) -> i128 {
        get_usage_allocation(&env, &user, &usage)
    }

    fn query_deallocation_fee(env: Env, usage: Address) -> u32 {
        get_deallocation_fee(&env, &usage)
    }

    fn query_transfer_whitelist(env: Env) -> Vec<Address> {
        get_transfer_whitelist(&env)
    }

    fn is_transfer_whitelisted(env: Env, account: Address) -> bool {
        storage::is_transfer_whitelisted(&env, &account)
    }

    fn total_supply(env: Env) -> i128 {
        bump_instance(&env);
        read_total_supply(&env)
    }
}

#[contractimpl]
impl TokenInterface for XEazyToken {
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

        unwrap_or_abort(&env, controller::shares::move_shares(&env, &from, &to, amount));
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        check_nonnegative_amount(&env, amount);
        spender.require_auth();
        bump_instance(&env);

        unwrap_or_abort(&env, spend_allowance(&env, from.clone(), spender, amount));
        unwrap_or_abort(&env, controller::shares::move_shares(&env, &from, &to, amount));
    }

    /// Shares only leave circulation through redeems and deallocation fees,
    /// which burn the matching base token.
    fn burn(env: Env, _from: Address, _amount: i128) {
        log!(&env, "xEazyToken: Burn: shares cannot be burned directly");
        panic_with_error!(&env, ErrorCode::TransferNotAllowed);
    }

    fn burn_from(env: Env, _spender: Address, _from: Address, _amount: i128) {
        log!(&env, "xEazyToken: Burn From: shares cannot be burned directly");
        panic_with_error!(&env, ErrorCode::TransferNotAllowed);
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
