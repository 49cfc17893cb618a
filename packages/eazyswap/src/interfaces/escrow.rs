use soroban_sdk::{ contractclient, Address, Env };

/// Share-token escrow able to lock base token on behalf of a payer.
#[allow(dead_code)]
#[contractclient(name = "EscrowClient")]
pub trait EscrowInterface {
    /// Pulls `amount` base token from `from` and mints the same amount of
    /// escrow shares to `to`.
    fn convert(env: Env, from: Address, amount: i128, to: Address);
}
