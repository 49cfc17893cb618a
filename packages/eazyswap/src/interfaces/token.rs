use soroban_sdk::{ contractclient, Address, Env };

/// Token exposing a minting capability to registered minters.
#[allow(dead_code)]
#[contractclient(name = "MintableTokenClient")]
pub trait MintableTokenInterface {
    fn mint(env: Env, minter: Address, to: Address, amount: i128);
}
