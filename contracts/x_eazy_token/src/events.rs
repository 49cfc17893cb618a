use eazyswap::math::vesting::VestingCurve;
use soroban_sdk::{ Address, Env, Symbol };

pub struct XEazyTokenEvents {}

impl XEazyTokenEvents {
    // Escrow Events

    /// Emitted when base token is locked for shares
    ///
    /// - topics - `["convert", from: Address]`
    /// - data - `[to: Address, amount: i128]`
    pub fn convert(env: &Env, from: Address, to: Address, amount: i128) {
        let topics = (Symbol::new(env, "convert"), from);
        env.events().publish(topics, (to, amount));
    }

    /// Emitted when a user starts redeeming shares
    ///
    /// - topics - `["redeem", user: Address]`
    /// - data - `[share_amount: i128, base_amount: i128, duration: u64]`
    pub fn redeem(env: &Env, user: Address, share_amount: i128, base_amount: i128, duration: u64) {
        let topics = (Symbol::new(env, "redeem"), user);
        env.events().publish(topics, (share_amount, base_amount, duration));
    }

    /// Emitted when a redeem pays out
    ///
    /// - topics - `["finalize_redeem", user: Address]`
    /// - data - `[share_amount: i128, base_amount: i128]`
    pub fn finalize_redeem(env: &Env, user: Address, share_amount: i128, base_amount: i128) {
        let topics = (Symbol::new(env, "finalize_redeem"), user);
        env.events().publish(topics, (share_amount, base_amount));
    }

    /// - topics - `["cancel_redeem", user: Address]`
    /// - data - `[share_amount: i128]`
    pub fn cancel_redeem(env: &Env, user: Address, share_amount: i128) {
        let topics = (Symbol::new(env, "cancel_redeem"), user);
        env.events().publish(topics, share_amount);
    }

    /// Emitted when a pending redeem's dividends allocation moves to the
    /// currently configured dividends contract
    ///
    /// - topics - `["update_redeem_dividends_address", user: Address]`
    /// - data - `[index: u32, previous: Option<Address>, new: Address]`
    pub fn update_redeem_dividends_address(
        env: &Env,
        user: Address,
        index: u32,
        previous: Option<Address>,
        new: Address
    ) {
        let topics = (Symbol::new(env, "update_redeem_dividends_address"), user);
        env.events().publish(topics, (index, previous, new));
    }

    // Usage Events

    /// - topics - `["approve_usage", user: Address]`
    /// - data - `[usage: Address, amount: i128]`
    pub fn approve_usage(env: &Env, user: Address, usage: Address, amount: i128) {
        let topics = (Symbol::new(env, "approve_usage"), user);
        env.events().publish(topics, (usage, amount));
    }

    /// - topics - `["allocate", user: Address]`
    /// - data - `[usage: Address, amount: i128]`
    pub fn allocate(env: &Env, user: Address, usage: Address, amount: i128) {
        let topics = (Symbol::new(env, "allocate"), user);
        env.events().publish(topics, (usage, amount));
    }

    /// Emitted on deallocation; `fee` shares and base token were burned
    ///
    /// - topics - `["deallocate", user: Address]`
    /// - data - `[usage: Address, amount: i128, fee: i128]`
    pub fn deallocate(env: &Env, user: Address, usage: Address, amount: i128, fee: i128) {
        let topics = (Symbol::new(env, "deallocate"), user);
        env.events().publish(topics, (usage, amount, fee));
    }

    // Admin Events

    /// - topics - `["update_redeem_settings", admin: Address]`
    /// - data - `[curve: VestingCurve, dividends_adjustment: i128]`
    pub fn update_redeem_settings(
        env: &Env,
        admin: Address,
        curve: VestingCurve,
        dividends_adjustment: i128
    ) {
        let topics = (Symbol::new(env, "update_redeem_settings"), admin);
        env.events().publish(topics, (curve, dividends_adjustment));
    }

    /// - topics - `["update_dividends_address", admin: Address]`
    /// - data - `[previous: Option<Address>, new: Option<Address>]`
    pub fn update_dividends_address(
        env: &Env,
        admin: Address,
        previous: Option<Address>,
        new: Option<Address>
    ) {
        let topics = (Symbol::new(env, "update_dividends_address"), admin);
        env.events().publish(topics, (previous, new));
    }

    /// - topics - `["update_deallocation_fee", usage: Address]`
    /// - data - `[fee_bps: u32]`
    pub fn update_deallocation_fee(env: &Env, usage: Address, fee_bps: u32) {
        let topics = (Symbol::new(env, "update_deallocation_fee"), usage);
        env.events().publish(topics, fee_bps);
    }

    /// - topics - `["set_transfer_whitelist", account: Address]`
    /// - data - `[whitelisted: bool]`
    pub fn set_transfer_whitelist(env: &Env, account: Address, whitelisted: bool) {
        let topics = (Symbol::new(env, "set_transfer_whitelist"), account);
        env.events().publish(topics, whitelisted);
    }
}
