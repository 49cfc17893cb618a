use soroban_sdk::{ contract, contractimpl, contracttype, Address, Bytes, Env };

use crate::contract::XEazyTokenClient;

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Escrow,
    Reenter,
    Allocation(Address),
}

/// Usage contract recording the allocations the escrow reports to it.
/// With `reenter` set it calls back into the escrow from its hook.
#[contract]
pub struct MockUsage;

#[contractimpl]
impl MockUsage {
    pub fn __constructor(env: Env, escrow: Address, reenter: bool) {
        env.storage().instance().set(&MockKey::Escrow, &escrow);
        env.storage().instance().set(&MockKey::Reenter, &reenter);
    }

    pub fn allocate(env: Env, user: Address, amount: i128, _data: Bytes) {
        let reenter: bool = env.storage().instance().get(&MockKey::Reenter).unwrap();
        if reenter {
            let escrow: Address = env.storage().instance().get(&MockKey::Escrow).unwrap();
            XEazyTokenClient::new(&env, &escrow).allocate_from_usage(
                &env.current_contract_address(),
                &user,
                &amount
            );
        }

        let allocation = Self::allocation(env.clone(), user.clone());
        env.storage().instance().set(&MockKey::Allocation(user), &(allocation + amount));
    }

    pub fn deallocate(env: Env, user: Address, amount: i128, _data: Bytes) {
        let allocation = Self::allocation(env.clone(), user.clone());
        if allocation < amount {
            panic!("deallocating more than allocated");
        }
        env.storage().instance().set(&MockKey::Allocation(user), &(allocation - amount));
    }

    pub fn allocation(env: Env, user: Address) -> i128 {
        env.storage().instance().get(&MockKey::Allocation(user)).unwrap_or(0)
    }
}
