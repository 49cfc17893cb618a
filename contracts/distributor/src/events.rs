use soroban_sdk::{ Address, Env, Symbol };

pub struct DistributorEvents {}

impl DistributorEvents {
    // Pool Events

    /// - topics - `["add_pool", pid: u32]`
    /// - data - `[lp_token: Address, alloc_point: u32, deposit_fee_bps: u32, harvest_interval: u64]`
    pub fn add_pool(
        env: &Env,
        pid: u32,
        lp_token: Address,
        alloc_point: u32,
        deposit_fee_bps: u32,
        harvest_interval: u64
    ) {
        let topics = (Symbol::new(env, "add_pool"), pid);
        env.events().publish(topics, (lp_token, alloc_point, deposit_fee_bps, harvest_interval));
    }

    /// - topics - `["set_pool", pid: u32]`
    /// - data - `[alloc_point: u32, deposit_fee_bps: u32, harvest_interval: u64]`
    pub fn set_pool(
        env: &Env,
        pid: u32,
        alloc_point: u32,
        deposit_fee_bps: u32,
        harvest_interval: u64
    ) {
        let topics = (Symbol::new(env, "set_pool"), pid);
        env.events().publish(topics, (alloc_point, deposit_fee_bps, harvest_interval));
    }

    /// Emitted when a pool accrues emissions
    ///
    /// - topics - `["update_pool", pid: u32]`
    /// - data - `[last_reward_time: u64, total_deposited: i128, acc_reward_per_share: i128]`
    pub fn update_pool(
        env: &Env,
        pid: u32,
        last_reward_time: u64,
        total_deposited: i128,
        acc_reward_per_share: i128
    ) {
        let topics = (Symbol::new(env, "update_pool"), pid);
        env.events().publish(topics, (last_reward_time, total_deposited, acc_reward_per_share));
    }

    // Stake Events

    /// - topics - `["deposit", user: Address]`
    /// - data - `[pid: u32, amount: i128, fee: i128]`
    pub fn deposit(env: &Env, user: Address, pid: u32, amount: i128, fee: i128) {
        let topics = (Symbol::new(env, "deposit"), user);
        env.events().publish(topics, (pid, amount, fee));
    }

    /// - topics - `["withdraw", user: Address]`
    /// - data - `[pid: u32, amount: i128]`
    pub fn withdraw(env: &Env, user: Address, pid: u32, amount: i128) {
        let topics = (Symbol::new(env, "withdraw"), user);
        env.events().publish(topics, (pid, amount));
    }

    /// Emitted when a user leaves a pool without settling rewards
    ///
    /// - topics - `["emergency_withdraw", user: Address]`
    /// - data - `[pid: u32, amount: i128, forfeited: i128]`
    pub fn emergency_withdraw(env: &Env, user: Address, pid: u32, amount: i128, forfeited: i128) {
        let topics = (Symbol::new(env, "emergency_withdraw"), user);
        env.events().publish(topics, (pid, amount, forfeited));
    }

    /// - topics - `["harvest", user: Address]`
    /// - data - `[pid: u32, released: i128, paid: i128]`
    pub fn harvest(env: &Env, user: Address, pid: u32, released: i128, paid: i128) {
        let topics = (Symbol::new(env, "harvest"), user);
        env.events().publish(topics, (pid, released, paid));
    }

    /// - topics - `["reward_locked_up", user: Address]`
    /// - data - `[pid: u32, amount: i128]`
    pub fn reward_locked_up(env: &Env, user: Address, pid: u32, amount: i128) {
        let topics = (Symbol::new(env, "reward_locked_up"), user);
        env.events().publish(topics, (pid, amount));
    }

    // Admin Events

    /// - topics - `["update_emission_rate", admin: Address]`
    /// - data - `[previous: i128, new: i128]`
    pub fn update_emission_rate(env: &Env, admin: Address, previous: i128, new: i128) {
        let topics = (Symbol::new(env, "update_emission_rate"), admin);
        env.events().publish(topics, (previous, new));
    }

    /// `kind` is one of `core`, `ecosystem` or `x_eazy`
    ///
    /// - topics - `["set_percent", kind: Symbol]`
    /// - data - `[percent: u32]`
    pub fn set_percent(env: &Env, kind: Symbol, percent: u32) {
        let topics = (Symbol::new(env, "set_percent"), kind);
        env.events().publish(topics, percent);
    }

    /// `kind` is one of `fee`, `core` or `ecosystem`
    ///
    /// - topics - `["set_address", kind: Symbol]`
    /// - data - `[address: Address]`
    pub fn set_address(env: &Env, kind: Symbol, address: Address) {
        let topics = (Symbol::new(env, "set_address"), kind);
        env.events().publish(topics, address);
    }
}
