use soroban_sdk::{ Address, Bytes, Env, Vec };

use crate::{ errors::ErrorCode, storage::{ Config, EscrowBalance, RedeemInfo } };

pub trait XEazyTokenTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    /// Replaces the redeem vesting curve and the dividends adjustment.
    /// Ratios and the adjustment are scaled by 1e18.
    fn update_redeem_settings(
        env: Env,
        min_ratio: i128,
        max_ratio: i128,
        min_duration: u64,
        max_duration: u64,
        dividends_adjustment: i128
    ) -> Result<(), ErrorCode>;

    /// Sets (or clears) the dividends contract and keeps it whitelisted.
    fn update_dividends_address(env: Env, dividends: Option<Address>) -> Result<(), ErrorCode>;

    /// Fee in bps burned on deallocation from `usage`, at most 2%.
    fn update_deallocation_fee(env: Env, usage: Address, fee_bps: u32) -> Result<(), ErrorCode>;

    fn update_transfer_whitelist(env: Env, account: Address, add: bool) -> Result<(), ErrorCode>;

    fn set_admin(env: Env, new_admin: Address);

    // ################################################################
    //                             USER
    // ################################################################

    /// Locks `amount` base token from `from` and mints shares to `to`.
    fn convert(env: Env, from: Address, amount: i128, to: Address) -> Result<(), ErrorCode>;

    /// Starts redeeming `share_amount` shares over `duration` seconds.
    fn redeem(env: Env, user: Address, share_amount: i128, duration: u64) -> Result<(), ErrorCode>;

    fn finalize_redeem(env: Env, user: Address, index: u32) -> Result<(), ErrorCode>;

    fn cancel_redeem(env: Env, user: Address, index: u32) -> Result<(), ErrorCode>;

    fn update_redeem_dividends_address(env: Env, user: Address, index: u32) -> Result<(), ErrorCode>;

    /// Sets the ceiling `usage` may allocate from the user. Absolute, not additive.
    fn approve_usage(env: Env, user: Address, usage: Address, amount: i128) -> Result<(), ErrorCode>;

    fn allocate(
        env: Env,
        user: Address,
        usage: Address,
        amount: i128,
        data: Bytes
    ) -> Result<(), ErrorCode>;

    /// Called by a usage contract to allocate on behalf of `user`, within approval.
    fn allocate_from_usage(env: Env, usage: Address, user: Address, amount: i128) -> Result<(), ErrorCode>;

    fn deallocate(
        env: Env,
        user: Address,
        usage: Address,
        amount: i128,
        data: Bytes
    ) -> Result<(), ErrorCode>;

    fn deallocate_from_usage(
        env: Env,
        usage: Address,
        user: Address,
        amount: i128
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_config(env: Env) -> Config;

    fn query_admin(env: Env) -> Address;

    fn query_escrow_balance(env: Env, user: Address) -> EscrowBalance;

    fn query_redeems_length(env: Env, user: Address) -> u32;

    fn query_redeem(env: Env, user: Address, index: u32) -> Result<RedeemInfo, ErrorCode>;

    fn query_redeems(env: Env, user: Address) -> Vec<RedeemInfo>;

    /// Base token paid for `amount` shares redeemed over `duration`.
    fn query_redeemable(env: Env, amount: i128, duration: u64) -> Result<i128, ErrorCode>;

    fn query_usage_approval(env: Env, user: Address, usage: Address) -> i128;

    fn query_usage_allocation(env: Env, user: Address, usage: Address) -> i128;

    fn query_deallocation_fee(env: Env, usage: Address) -> u32;

    fn query_transfer_whitelist(env: Env) -> Vec<Address>;

    fn is_transfer_whitelisted(env: Env, account: Address) -> bool;

    fn total_supply(env: Env) -> i128;
}
