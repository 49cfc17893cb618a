use soroban_sdk::{ Address, Env, Vec };

use crate::{ errors::ErrorCode, storage::LockInfo };

pub trait LpLockTrait {
    /// Locks `amount` of `token` from `owner` until `unlock_time`. Returns the lock id.
    fn lock(
        env: Env,
        owner: Address,
        token: Address,
        amount: i128,
        unlock_time: u64
    ) -> Result<u64, ErrorCode>;

    /// Pushes the unlock time of a lock further out. It can never be brought forward.
    fn extend_lock(env: Env, owner: Address, id: u64, unlock_time: u64) -> Result<(), ErrorCode>;

    fn withdraw(env: Env, owner: Address, id: u64) -> Result<(), ErrorCode>;

    fn query_lock(env: Env, id: u64) -> Result<LockInfo, ErrorCode>;

    fn query_locks_by_owner(env: Env, owner: Address) -> Vec<LockInfo>;
}
