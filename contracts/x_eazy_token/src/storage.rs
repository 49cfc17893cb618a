use eazyswap::{
    constants::{
        ONE_DAY,
        PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
        SCALE,
    },
    math::vesting::VestingCurve,
};
use soroban_sdk::{ contracttype, panic_with_error, vec, Address, Env, Vec };

use crate::errors::ErrorCode;

pub const DEFAULT_MIN_REDEEM_RATIO: i128 = SCALE / 2;
pub const DEFAULT_MAX_REDEEM_RATIO: i128 = SCALE;
pub const DEFAULT_MIN_REDEEM_DURATION: u64 = 15 * ONE_DAY;
pub const DEFAULT_MAX_REDEEM_DURATION: u64 = 90 * ONE_DAY;
pub const DEFAULT_DIVIDENDS_ADJUSTMENT: i128 = SCALE / 2;

/// 2%
pub const MAX_DEALLOCATION_FEE_BPS: u32 = 200;

#[derive(Clone)]
#[contracttype]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[derive(Clone)]
#[contracttype]
pub struct UsageKey {
    pub user: Address,
    pub usage: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    TotalSupply,
    TransferWhitelist,
    Allowance(AllowanceDataKey),
    Balance(Address),
    EscrowBalance(Address),
    Redeems(Address),
    UsageApproval(UsageKey),
    UsageAllocation(UsageKey),
    DeallocationFee(Address),
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub base_token: Address,
    pub redeem_curve: VestingCurve,
    /// Share of a pending redeem allocated to the dividends contract, scaled by 1e18
    pub dividends_adjustment: i128,
    pub dividends_address: Option<Address>,
    /// Bumped on every administrative change
    pub version: u32,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, ErrorCode::ConfigNotSet))
}

// ################################################################
//                          Escrow balance
// ################################################################

/// Shares a user owns but cannot spend: allocated to usages or locked in
/// pending redeems. Both are held in the escrow's own custody.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EscrowBalance {
    pub allocated_amount: i128,
    pub redeeming_amount: i128,
}

pub fn get_escrow_balance(env: &Env, user: &Address) -> EscrowBalance {
    let key = DataKey::EscrowBalance(user.clone());
    match env.storage().persistent().get::<_, EscrowBalance>(&key) {
        Some(balance) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
            balance
        }
        None => EscrowBalance::default(),
    }
}

pub fn save_escrow_balance(env: &Env, user: &Address, balance: &EscrowBalance) {
    let key = DataKey::EscrowBalance(user.clone());
    env.storage().persistent().set(&key, balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################
//                             Redeems
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RedeemInfo {
    pub share_amount: i128,
    /// Base token paid if finalized at `end_time`
    pub base_amount_at_maturity: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub dividends_address: Option<Address>,
    pub dividends_allocation: i128,
}

/// Pending redeems form a dense list. Removal swaps the last entry into the
/// removed slot, so indices are only valid until the next removal.
pub fn get_redeems(env: &Env, user: &Address) -> Vec<RedeemInfo> {
    let key = DataKey::Redeems(user.clone());
    match env.storage().persistent().get::<_, Vec<RedeemInfo>>(&key) {
        Some(redeems) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
            redeems
        }
        None => vec![env],
    }
}

pub fn save_redeems(env: &Env, user: &Address, redeems: &Vec<RedeemInfo>) {
    let key = DataKey::Redeems(user.clone());
    if redeems.is_empty() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, redeems);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Swap-and-pop removal of `index`.
pub fn remove_redeem(redeems: &mut Vec<RedeemInfo>, index: u32) {
    let last = redeems.len() - 1;
    if index != last {
        if let Some(moved) = redeems.get(last) {
            redeems.set(index, moved);
        }
    }
    redeems.pop_back();
}

// ################################################################
//                        Transfer whitelist
// ################################################################

pub fn get_transfer_whitelist(env: &Env) -> Vec<Address> {
    env.storage().instance().get(&DataKey::TransferWhitelist).unwrap_or(vec![env])
}

pub fn save_transfer_whitelist(env: &Env, whitelist: &Vec<Address>) {
    env.storage().instance().set(&DataKey::TransferWhitelist, whitelist);
}

pub fn is_transfer_whitelisted(env: &Env, account: &Address) -> bool {
    get_transfer_whitelist(env).contains(account)
}

pub mod utils {
    use super::*;

    pub fn get_admin(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| panic_with_error!(env, ErrorCode::AdminNotSet))
    }

    pub fn save_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&DataKey::Admin, admin);
    }
}
