use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, Address, Error };

use super::setup::{ deploy_usage, Setup, ONE_DAY, SCALE };
use crate::{ errors::ErrorCode, storage::RedeemInfo };

#[test]
fn convert_mints_shares_one_to_one() {
    let setup = Setup::new();
    let user = Address::generate(&setup.env);
    let other = Address::generate(&setup.env);
    setup.base.mint(&setup.admin, &user, &1_000);

    setup.x_token.convert(&user, &600, &user);
    setup.x_token.convert(&user, &400, &other);

    assert_eq!(setup.x_token.balance(&user), 600);
    assert_eq!(setup.x_token.balance(&other), 400);
    assert_eq!(setup.base.balance(&user), 0);
    assert_eq!(setup.x_token.total_supply(), 1_000);
    setup.assert_fully_backed();
}

#[test]
fn convert_zero_fails() {
    let setup = Setup::new();
    let user = Address::generate(&setup.env);

    assert_eq!(setup.x_token.try_convert(&user, &0, &user), Err(Ok(ErrorCode::ZeroAmount)));
}

#[test]
fn shares_are_not_transferable() {
    let setup = Setup::new();
    let user = setup.user_with_shares(1_000);
    let other = Address::generate(&setup.env);

    let not_allowed = Error::from_contract_error(ErrorCode::TransferNotAllowed as u32);
    assert_eq!(setup.x_token.try_transfer(&user, &other, &100), Err(Ok(not_allowed)));
    assert_eq!(setup.x_token.try_burn(&user, &100), Err(Ok(not_allowed)));
    assert_eq!(setup.x_token.balance(&user), 1_000);
}

#[test]
fn redeem_rejects_zero_amount_and_short_duration() {
    let setup = Setup::new();
    let user = setup.user_with_shares(1_000);

    assert_eq!(
        setup.x_token.try_redeem(&user, &0, &(30 * ONE_DAY)),
        Err(Ok(ErrorCode::ZeroAmount))
    );
    assert_eq!(
        setup.x_token.try_redeem(&user, &1_000, &(15 * ONE_DAY - 1)),
        Err(Ok(ErrorCode::DurationTooLow))
    );
    assert_eq!(
        setup.x_token.try_redeem(&user, &1_001, &(30 * ONE_DAY)),
        Err(Ok(ErrorCode::InsufficientBalance))
    );
}

#[test]
fn redeem_at_max_duration_pays_full_amount() {
    let setup = Setup::new();
    let user = setup.user_with_shares(1_000);

    setup.x_token.redeem(&user, &1_000, &(90 * ONE_DAY));

    assert_eq!(
        setup.x_token.query_redeem(&user, &0),
        RedeemInfo {
            share_amount: 1_000,
            base_amount_at_maturity: 1_000,
            start_time: 0,
            end_time: 90 * ONE_DAY,
            dividends_address: None,
            dividends_allocation: 0,
        }
    );
    assert_eq!(setup.x_token.balance(&user), 0);
    assert_eq!(setup.x_token.query_escrow_balance(&user).redeeming_amount, 1_000);
    setup.assert_redeeming_matches(&user);

    setup.jump(90 * ONE_DAY);
    setup.x_token.finalize_redeem(&user, &0);

    assert_eq!(setup.base.balance(&user), 1_000);
    assert_eq!(setup.x_token.total_supply(), 0);
    assert_eq!(setup.x_token.query_redeems_length(&user), 0);
    assert_eq!(setup.x_token.query_escrow_balance(&user).redeeming_amount, 0);
    setup.assert_fully_backed();
}

#[test]
fn redeem_past_max_duration_is_capped() {
    let setup = Setup::new();
    let user = setup.user_with_shares(1_000);

    assert_eq!(setup.x_token.query_redeemable(&1_000, &(90 * ONE_DAY)), 1_000);
    assert_eq!(setup.x_token.query_redeemable(&1_000, &(90 * ONE_DAY + 1)), 1_000);

    setup.x_token.redeem(&user, &1_000, &(90 * ONE_DAY + 1));
    assert_eq!(setup.x_token.query_redeem(&user, &0).base_amount_at_maturity, 1_000);
}

#[test]
fn finalize_before_min_duration_fails() {
    let setup = Setup::new();
    let user = setup.user_with_shares(1_000);

    setup.x_token.redeem(&user, &1_000, &(30 * ONE_DAY));
    setup.jump(15 * ONE_DAY - 1);

    assert_eq!(setup.x_token.try_finalize_redeem(&user, &0), Err(Ok(ErrorCode::RedeemTooEarly)));
    assert_eq!(setup.x_token.try_finalize_redeem(&user, &1), Err(Ok(ErrorCode::RedeemNotFound)));
}

#[test]
fn early_finalize_uses_elapsed_time() {
    let setup = Setup::new();
    let user = setup.user_with_shares(1_000);

    setup.x_token.redeem(&user, &1_000, &(90 * ONE_DAY));
    setup.jump(15 * ONE_DAY);
    setup.x_token.finalize_redeem(&user, &0);

    // half paid out, the other half burned
    assert_eq!(setup.base.balance(&user), 500);
    assert_eq!(setup.base.total_supply(), 500);
    assert_eq!(setup.x_token.total_supply(), 0);
    setup.assert_fully_backed();
}

#[test]
fn cancel_returns_full_shares() {
    let setup = Setup::new();
    let user = setup.user_with_shares(1_000);

    setup.x_token.redeem(&user, &600, &(30 * ONE_DAY));
    assert_eq!(setup.x_token.balance(&user), 400);

    setup.jump(20 * ONE_DAY);
    setup.x_token.cancel_redeem(&user, &0);

    assert_eq!(setup.x_token.balance(&user), 1_000);
    assert_eq!(setup.x_token.query_escrow_balance(&user).redeeming_amount, 0);
    assert_eq!(setup.x_token.query_redeems_length(&user), 0);
    assert_eq!(setup.x_token.try_cancel_redeem(&user, &0), Err(Ok(ErrorCode::RedeemNotFound)));
    setup.assert_fully_backed();
}

#[test]
fn removal_swaps_last_redeem_into_place() {
    let setup = Setup::new();
    let user = setup.user_with_shares(600);

    setup.x_token.redeem(&user, &100, &(20 * ONE_DAY));
    setup.x_token.redeem(&user, &200, &(30 * ONE_DAY));
    setup.x_token.redeem(&user, &300, &(40 * ONE_DAY));
    setup.assert_redeeming_matches(&user);

    setup.x_token.cancel_redeem(&user, &0);
    assert_eq!(setup.x_token.query_redeem(&user, &0).share_amount, 300);
    assert_eq!(setup.x_token.query_redeem(&user, &1).share_amount, 200);
    setup.assert_redeeming_matches(&user);

    setup.jump(40 * ONE_DAY);
    setup.x_token.finalize_redeem(&user, &1);

    // 200 shares after 40 days: ratio 0.5 + 0.5 * 25 / 75
    assert_eq!(setup.base.balance(&user), 133);
    assert_eq!(setup.x_token.query_redeems_length(&user), 1);
    assert_eq!(setup.x_token.query_redeem(&user, &0).share_amount, 300);
    setup.assert_redeeming_matches(&user);
    setup.assert_fully_backed();
}

#[test]
fn immediate_redeem_with_zero_min_duration() {
    let setup = Setup::new();
    setup.x_token.update_redeem_settings(&(SCALE / 2), &SCALE, &0, &(90 * ONE_DAY), &(SCALE / 2));
    let user = setup.user_with_shares(1_000);

    setup.x_token.redeem(&user, &1_000, &0);

    // every share is accounted for: 500 paid, 500 burned
    assert_eq!(setup.base.balance(&user), 500);
    assert_eq!(setup.base.total_supply(), 500);
    assert_eq!(setup.x_token.total_supply(), 0);
    assert_eq!(setup.x_token.query_redeems_length(&user), 0);
    assert_eq!(setup.x_token.query_escrow_balance(&user).redeeming_amount, 0);
    setup.assert_fully_backed();
}

#[test]
fn dividends_allocation_follows_redeem() {
    let setup = Setup::new();
    let dividends = deploy_usage(&setup.env, &setup.x_token.address, false);
    setup.x_token.update_dividends_address(&Some(dividends.address.clone()));
    let user = setup.user_with_shares(1_000);

    setup.x_token.redeem(&user, &1_000, &(90 * ONE_DAY));

    let redeem = setup.x_token.query_redeem(&user, &0);
    assert_eq!(redeem.dividends_address, Some(dividends.address.clone()));
    assert_eq!(redeem.dividends_allocation, 500);
    assert_eq!(dividends.allocation(&user), 500);

    setup.jump(90 * ONE_DAY);
    setup.x_token.finalize_redeem(&user, &0);
    assert_eq!(dividends.allocation(&user), 0);
}

#[test]
fn cancel_releases_dividends_allocation() {
    let setup = Setup::new();
    let dividends = deploy_usage(&setup.env, &setup.x_token.address, false);
    setup.x_token.update_dividends_address(&Some(dividends.address.clone()));
    let user = setup.user_with_shares(1_000);

    setup.x_token.redeem(&user, &400, &(30 * ONE_DAY));
    assert_eq!(dividends.allocation(&user), 200);

    setup.x_token.cancel_redeem(&user, &0);
    assert_eq!(dividends.allocation(&user), 0);
    assert_eq!(setup.x_token.balance(&user), 1_000);
}

#[test]
fn redeem_dividends_allocation_migrates_to_new_address() {
    let setup = Setup::new();
    let first = deploy_usage(&setup.env, &setup.x_token.address, false);
    let second = deploy_usage(&setup.env, &setup.x_token.address, false);
    setup.x_token.update_dividends_address(&Some(first.address.clone()));
    let user = setup.user_with_shares(1_000);

    setup.x_token.redeem(&user, &1_000, &(60 * ONE_DAY));
    assert_eq!(first.allocation(&user), 500);

    // unchanged address is a no-op
    setup.x_token.update_redeem_dividends_address(&user, &0);
    assert_eq!(first.allocation(&user), 500);

    setup.x_token.update_dividends_address(&Some(second.address.clone()));
    setup.x_token.update_redeem_dividends_address(&user, &0);

    assert_eq!(first.allocation(&user), 0);
    assert_eq!(second.allocation(&user), 500);
    assert_eq!(
        setup.x_token.query_redeem(&user, &0).dividends_address,
        Some(second.address.clone())
    );

    // clearing the dividends address leaves pending redeems untouched
    setup.x_token.update_dividends_address(&None);
    setup.x_token.update_redeem_dividends_address(&user, &0);
    assert_eq!(second.allocation(&user), 500);

    setup.jump(60 * ONE_DAY);
    setup.x_token.finalize_redeem(&user, &0);
    assert_eq!(second.allocation(&user), 0);
}
