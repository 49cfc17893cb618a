use soroban_sdk::{ Address, Env, Symbol };

pub struct LpLockEvents {}

impl LpLockEvents {
    /// - topics - `["lock", owner: Address, id: u64]`
    /// - data - `[token: Address, amount: i128, unlock_time: u64]`
    pub fn lock(env: &Env, owner: Address, id: u64, token: Address, amount: i128, unlock_time: u64) {
        let topics = (Symbol::new(env, "lock"), owner, id);
        env.events().publish(topics, (token, amount, unlock_time));
    }

    /// - topics - `["extend_lock", owner: Address, id: u64]`
    /// - data - `[previous: u64, unlock_time: u64]`
    pub fn extend_lock(env: &Env, owner: Address, id: u64, previous: u64, unlock_time: u64) {
        let topics = (Symbol::new(env, "extend_lock"), owner, id);
        env.events().publish(topics, (previous, unlock_time));
    }

    /// - topics - `["withdraw", owner: Address, id: u64]`
    /// - data - `[token: Address, amount: i128]`
    pub fn withdraw(env: &Env, owner: Address, id: u64, token: Address, amount: i128) {
        let topics = (Symbol::new(env, "withdraw"), owner, id);
        env.events().publish(topics, (token, amount));
    }
}
