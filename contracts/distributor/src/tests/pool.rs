use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::{ Address as _, Ledger }, Address };

use super::setup::{ Setup, ONE_DAY, START_TIME };
use crate::errors::ErrorCode;

#[test]
fn emissions_split_between_core_ecosystem_and_pool() {
    let setup = Setup::new();
    setup.distributor.set_core_percent(&200);
    setup.distributor.set_ecosystem_percent(&200);
    let pid = setup.distributor.add(&setup.lp.address, &100, &0, &0);

    let user = setup.user_with_lp(1_000);
    setup.distributor.deposit(&user, &pid, &1_000);

    setup.jump(10);
    setup.distributor.update_pool(&pid);

    assert_eq!(setup.eazy.balance(&setup.core), 20);
    assert_eq!(setup.eazy.balance(&setup.ecosystem), 20);
    assert_eq!(setup.eazy.balance(&setup.distributor.address), 60);

    let pool = setup.distributor.query_pool(&pid);
    // 60 * 1e12 / 1000
    assert_eq!(pool.acc_reward_per_share, 60_000_000_000_i128);
    assert_eq!(pool.last_reward_time, START_TIME + 10);
    assert_eq!(setup.distributor.pending_tokens(&pid, &user), 60);
}

#[test]
fn update_pool_twice_in_same_ledger_is_a_no_op() {
    let setup = Setup::new();
    let pid = setup.distributor.add(&setup.lp.address, &100, &0, &0);
    let user = setup.user_with_lp(1_000);
    setup.distributor.deposit(&user, &pid, &1_000);

    setup.jump(10);
    setup.distributor.update_pool(&pid);
    let pool = setup.distributor.query_pool(&pid);
    let supply = setup.eazy.total_supply();

    setup.distributor.update_pool(&pid);
    setup.distributor.mass_update_pools();

    assert_eq!(setup.distributor.query_pool(&pid), pool);
    assert_eq!(setup.eazy.total_supply(), supply);
}

#[test]
fn pending_tokens_matches_a_later_update() {
    let setup = Setup::new();
    let pid = setup.distributor.add(&setup.lp.address, &100, &0, &0);
    let user = setup.user_with_lp(1_000);
    setup.distributor.deposit(&user, &pid, &1_000);

    setup.jump(37);
    let quoted = setup.distributor.pending_tokens(&pid, &user);
    setup.distributor.update_pool(&pid);

    assert_eq!(quoted, 370);
    assert_eq!(setup.distributor.pending_tokens(&pid, &user), quoted);
}

#[test]
fn empty_pool_only_advances_its_clock() {
    let setup = Setup::new();
    let pid = setup.distributor.add(&setup.lp.address, &100, &0, &0);

    setup.jump(100);
    setup.distributor.update_pool(&pid);

    let pool = setup.distributor.query_pool(&pid);
    assert_eq!(pool.last_reward_time, START_TIME + 100);
    assert_eq!(pool.acc_reward_per_share, 0);
    assert_eq!(setup.eazy.total_supply(), 0);

    // the idle period is not credited once someone deposits
    let user = setup.user_with_lp(1_000);
    setup.distributor.deposit(&user, &pid, &1_000);
    assert_eq!(setup.distributor.pending_tokens(&pid, &user), 0);
}

#[test]
fn nothing_accrues_before_the_farm_starts() {
    let setup = Setup::new();
    setup.env.ledger().set_timestamp(START_TIME - 500);
    let pid = setup.distributor.add(&setup.lp.address, &100, &0, &0);
    assert_eq!(setup.distributor.query_pool(&pid).last_reward_time, START_TIME);

    let user = setup.user_with_lp(1_000);
    setup.distributor.deposit(&user, &pid, &1_000);

    setup.jump(400);
    setup.distributor.update_pool(&pid);
    assert_eq!(setup.distributor.pending_tokens(&pid, &user), 0);
    assert_eq!(setup.eazy.total_supply(), 0);

    setup.jump(110);
    assert_eq!(setup.distributor.pending_tokens(&pid, &user), 100);
}

#[test]
fn alloc_points_weight_the_pools() {
    let setup = Setup::new();
    let other_lp = super::setup::deploy_token(&setup.env, &setup.admin, "EAZY-LP2");
    let first = setup.distributor.add(&setup.lp.address, &100, &0, &0);
    let second = setup.distributor.add(&other_lp.address, &300, &0, &0);
    assert_eq!(setup.distributor.query_total_alloc_point(), 400);
    assert_eq!(setup.distributor.query_pool_length(), 2);

    let alice = setup.user_with_lp(1_000);
    let bob = Address::generate(&setup.env);
    other_lp.mint(&setup.admin, &bob, &500);
    setup.distributor.deposit(&alice, &first, &1_000);
    setup.distributor.deposit(&bob, &second, &500);

    setup.jump(10);

    assert_eq!(setup.distributor.pending_tokens(&first, &alice), 25);
    assert_eq!(setup.distributor.pending_tokens(&second, &bob), 75);
}

#[test]
fn set_settles_rewards_under_the_old_allocation() {
    let setup = Setup::new();
    let pid = setup.distributor.add(&setup.lp.address, &100, &0, &0);
    let user = setup.user_with_lp(1_000);
    setup.distributor.deposit(&user, &pid, &1_000);

    setup.jump(10);
    setup.distributor.set(&pid, &0, &0, &0);

    assert_eq!(setup.distributor.query_total_alloc_point(), 0);
    assert_eq!(setup.distributor.pending_tokens(&pid, &user), 100);

    setup.jump(10);
    assert_eq!(setup.distributor.pending_tokens(&pid, &user), 100);
}

#[test]
fn emission_rate_change_is_not_retroactive() {
    let setup = Setup::new();
    let pid = setup.distributor.add(&setup.lp.address, &100, &0, &0);
    let user = setup.user_with_lp(1_000);
    setup.distributor.deposit(&user, &pid, &1_000);

    setup.jump(10);
    setup.distributor.update_emission_rate(&100);
    setup.jump(10);

    assert_eq!(setup.distributor.pending_tokens(&pid, &user), 100 + 1_000);
}

#[test]
fn add_validates_its_parameters() {
    let setup = Setup::new();

    assert_eq!(
        setup.distributor.try_add(&setup.lp.address, &100, &401, &0),
        Err(Ok(ErrorCode::DepositFeeTooHigh))
    );
    assert_eq!(
        setup.distributor.try_add(&setup.lp.address, &100, &0, &(14 * ONE_DAY + 1)),
        Err(Ok(ErrorCode::HarvestIntervalTooHigh))
    );

    setup.distributor.add(&setup.lp.address, &100, &400, &(14 * ONE_DAY));
    assert_eq!(
        setup.distributor.try_add(&setup.lp.address, &50, &0, &0),
        Err(Ok(ErrorCode::PoolAlreadyExists))
    );
    assert_eq!(setup.distributor.query_pool_length(), 1);
    assert_eq!(setup.distributor.query_total_alloc_point(), 100);
}

#[test]
fn unknown_pool_is_rejected() {
    let setup = Setup::new();
    let user = setup.user_with_lp(1_000);

    assert_eq!(setup.distributor.try_query_pool(&0), Err(Ok(ErrorCode::InvalidPoolId)));
    assert_eq!(setup.distributor.try_update_pool(&0), Err(Ok(ErrorCode::InvalidPoolId)));
    assert_eq!(setup.distributor.try_deposit(&user, &0, &100), Err(Ok(ErrorCode::InvalidPoolId)));
    assert_eq!(setup.distributor.try_set(&0, &10, &0, &0), Err(Ok(ErrorCode::InvalidPoolId)));
}
