use soroban_sdk::{ contractclient, Address, Bytes, Env };

/// Contract that accepts escrowed share allocations from the xEAZY escrow,
/// such as a dividends or yield-boost plugin.
///
/// A failing hook aborts the allocation (or deallocation) that triggered it.
#[allow(dead_code)]
#[contractclient(name = "UsageClient")]
pub trait UsageInterface {
    fn allocate(env: Env, user: Address, amount: i128, data: Bytes);

    fn deallocate(env: Env, user: Address, amount: i128, data: Bytes);
}
