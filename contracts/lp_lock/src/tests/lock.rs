extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, vec, Address };

use super::setup::{ Setup, NOW };
use crate::{ errors::ErrorCode, storage::LockInfo };

#[test]
fn lock_holds_tokens_until_unlock_time() {
    let setup = Setup::new();
    let owner = setup.user_with_lp(1_000);

    let id = setup.lp_lock.lock(&owner, &setup.lp.address, &600, &(NOW + 100));

    assert_eq!(id, 0);
    assert_eq!(
        setup.lp_lock.query_lock(&id),
        LockInfo {
            owner: owner.clone(),
            token: setup.lp.address.clone(),
            amount: 600,
            unlock_time: NOW + 100,
        }
    );
    assert_eq!(setup.lp.balance(&owner), 400);
    assert_eq!(setup.lp.balance(&setup.lp_lock.address), 600);

    setup.jump(99);
    assert_eq!(setup.lp_lock.try_withdraw(&owner, &id), Err(Ok(ErrorCode::StillLocked)));

    setup.jump(1);
    setup.lp_lock.withdraw(&owner, &id);

    assert_eq!(setup.lp.balance(&owner), 1_000);
    assert_eq!(setup.lp_lock.try_query_lock(&id), Err(Ok(ErrorCode::LockNotFound)));
    assert_eq!(setup.lp_lock.query_locks_by_owner(&owner), vec![&setup.env]);
    assert_eq!(setup.lp_lock.try_withdraw(&owner, &id), Err(Ok(ErrorCode::LockNotFound)));
}

#[test]
fn lock_rejects_bad_parameters() {
    let setup = Setup::new();
    let owner = setup.user_with_lp(1_000);

    assert_eq!(
        setup.lp_lock.try_lock(&owner, &setup.lp.address, &0, &(NOW + 100)),
        Err(Ok(ErrorCode::ZeroAmount))
    );
    assert_eq!(
        setup.lp_lock.try_lock(&owner, &setup.lp.address, &100, &NOW),
        Err(Ok(ErrorCode::InvalidUnlockTime))
    );
}

#[test]
fn extend_only_moves_forward() {
    let setup = Setup::new();
    let owner = setup.user_with_lp(1_000);
    let id = setup.lp_lock.lock(&owner, &setup.lp.address, &1_000, &(NOW + 100));

    assert_eq!(
        setup.lp_lock.try_extend_lock(&owner, &id, &(NOW + 100)),
        Err(Ok(ErrorCode::InvalidUnlockTime))
    );
    assert_eq!(
        setup.lp_lock.try_extend_lock(&owner, &id, &(NOW + 50)),
        Err(Ok(ErrorCode::InvalidUnlockTime))
    );

    setup.lp_lock.extend_lock(&owner, &id, &(NOW + 500));
    assert_eq!(setup.lp_lock.query_lock(&id).unlock_time, NOW + 500);

    setup.jump(100);
    assert_eq!(setup.lp_lock.try_withdraw(&owner, &id), Err(Ok(ErrorCode::StillLocked)));
}

#[test]
fn only_the_owner_can_touch_a_lock() {
    let setup = Setup::new();
    let owner = setup.user_with_lp(1_000);
    let stranger = Address::generate(&setup.env);
    let id = setup.lp_lock.lock(&owner, &setup.lp.address, &1_000, &(NOW + 100));

    setup.jump(100);
    assert_eq!(setup.lp_lock.try_withdraw(&stranger, &id), Err(Ok(ErrorCode::NotLockOwner)));
    assert_eq!(
        setup.lp_lock.try_extend_lock(&stranger, &id, &(NOW + 500)),
        Err(Ok(ErrorCode::NotLockOwner))
    );
    assert_eq!(setup.lp.balance(&setup.lp_lock.address), 1_000);
}

#[test]
fn locks_are_listed_per_owner() {
    let setup = Setup::new();
    let owner = setup.user_with_lp(1_000);
    let other = setup.user_with_lp(1_000);

    let first = setup.lp_lock.lock(&owner, &setup.lp.address, &100, &(NOW + 10));
    let second = setup.lp_lock.lock(&other, &setup.lp.address, &200, &(NOW + 20));
    let third = setup.lp_lock.lock(&owner, &setup.lp.address, &300, &(NOW + 30));
    assert_eq!((first, second, third), (0, 1, 2));

    let amounts: std::vec::Vec<i128> = setup.lp_lock
        .query_locks_by_owner(&owner)
        .iter()
        .map(|lock| lock.amount)
        .collect();
    assert_eq!(amounts, std::vec![100, 300]);

    setup.jump(10);
    setup.lp_lock.withdraw(&owner, &first);

    let remaining = setup.lp_lock.query_locks_by_owner(&owner);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining.get(0).map(|lock| lock.amount), Some(300));
    assert_eq!(setup.lp_lock.query_locks_by_owner(&other).len(), 1);
}
