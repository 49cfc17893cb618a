use eazyswap::{ constants::{ INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD }, validate };
use soroban_sdk::{ contract, contractimpl, contractmeta, log, token, Address, Env, Vec };

use crate::{
    errors::ErrorCode,
    events::LpLockEvents,
    lp_lock::LpLockTrait,
    storage::{
        get_lock,
        get_owner_locks,
        next_lock_id,
        remove_lock,
        save_lock,
        save_owner_locks,
        LockInfo,
    },
};

contractmeta!(key = "Description", val = "Timelock vault for EazySwap liquidity tokens");

#[contract]
pub struct LpLock;

fn bump_instance(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Loads a lock and checks that `owner` holds it.
fn owned_lock(env: &Env, owner: &Address, id: u64) -> Result<LockInfo, ErrorCode> {
    let lock = get_lock(env, id).ok_or_else(|| {
        log!(env, "LpLock: lock {} does not exist", id);
        ErrorCode::LockNotFound
    })?;
    validate!(env, lock.owner == *owner, ErrorCode::NotLockOwner, "LpLock: caller does not own the lock")?;
    Ok(lock)
}

#[contractimpl]
impl LpLockTrait for LpLock {
    fn lock(
        env: Env,
        owner: Address,
        token: Address,
        amount: i128,
        unlock_time: u64
    ) -> Result<u64, ErrorCode> {
        owner.require_auth();
        bump_instance(&env);

        validate!(&env, amount > 0, ErrorCode::ZeroAmount, "LpLock: Lock: amount must be positive")?;
        validate!(
            &env,
            unlock_time > env.ledger().timestamp(),
            ErrorCode::InvalidUnlockTime,
            "LpLock: Lock: unlock time must be in the future"
        )?;

        let id = next_lock_id(&env)?;
        save_lock(
            &env,
            id,
            &(LockInfo {
                owner: owner.clone(),
                token: token.clone(),
                amount,
                unlock_time,
            })
        );

        let mut ids = get_owner_locks(&env, &owner);
        ids.push_back(id);
        save_owner_locks(&env, &owner, &ids);

        token::Client::new(&env, &token).transfer(&owner, &env.current_contract_address(), &amount);

        LpLockEvents::lock(&env, owner, id, token, amount, unlock_time);
        Ok(id)
    }

    fn extend_lock(env: Env, owner: Address, id: u64, unlock_time: u64) -> Result<(), ErrorCode> {
        owner.require_auth();
        bump_instance(&env);

        let mut lock = owned_lock(&env, &owner, id)?;
        validate!(
            &env,
            unlock_time > lock.unlock_time,
            ErrorCode::InvalidUnlockTime,
            "LpLock: Extend Lock: unlock time can only move forward"
        )?;

        let previous = lock.unlock_time;
        lock.unlock_time = unlock_time;
        save_lock(&env, id, &lock);

        LpLockEvents::extend_lock(&env, owner, id, previous, unlock_time);
        Ok(())
    }

    fn withdraw(env: Env, owner: Address, id: u64) -> Result<(), ErrorCode> {
        owner.require_auth();
        bump_instance(&env);

        let lock = owned_lock(&env, &owner, id)?;
        validate!(
            &env,
            env.ledger().timestamp() >= lock.unlock_time,
            ErrorCode::StillLocked,
            "LpLock: Withdraw: lock has not expired"
        )?;

        remove_lock(&env, id);
        let mut ids = get_owner_locks(&env, &owner);
        if let Some(index) = ids.first_index_of(id) {
            ids.remove(index);
        }
        save_owner_locks(&env, &owner, &ids);

        token::Client::new(&env, &lock.token).transfer(
            &env.current_contract_address(),
            &owner,
            &lock.amount
        );

        LpLockEvents::withdraw(&env, owner, id, lock.token, lock.amount);
        Ok(())
    }

    fn query_lock(env: Env, id: u64) -> Result<LockInfo, ErrorCode> {
        get_lock(&env, id).ok_or(ErrorCode::LockNotFound)
    }

    fn query_locks_by_owner(env: Env, owner: Address) -> Vec<LockInfo> {
        let mut locks = Vec::new(&env);
        for id in get_owner_locks(&env, &owner).iter() {
            if let Some(lock) = get_lock(&env, id) {
                locks.push_back(lock);
            }
        }
        locks
    }
}
