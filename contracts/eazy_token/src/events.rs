use soroban_sdk::{ Address, Env, Symbol };

pub struct EazyTokenEvents {}

impl EazyTokenEvents {
    /// Emitted when the admin grants or revokes minting rights
    ///
    /// - topics - `["minter_updated", minter: Address]`
    /// - data - `[enabled: bool]`
    pub fn minter_updated(env: &Env, minter: Address, enabled: bool) {
        let topics = (Symbol::new(env, "minter_updated"), minter);
        env.events().publish(topics, enabled);
    }
}
