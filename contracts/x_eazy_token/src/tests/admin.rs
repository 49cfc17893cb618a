extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{ Address as _, AuthorizedFunction, AuthorizedInvocation },
    vec,
    Address,
    Error,
    IntoVal,
    String,
    Symbol,
};

use super::setup::{ Setup, ONE_DAY, SCALE };
use crate::{ errors::ErrorCode, storage::Config };
use eazyswap::math::vesting::VestingCurve;

#[test]
fn constructor_sets_defaults() {
    let setup = Setup::new();

    assert_eq!(
        setup.x_token.query_config(),
        Config {
            base_token: setup.base.address.clone(),
            redeem_curve: VestingCurve {
                min_ratio: SCALE / 2,
                max_ratio: SCALE,
                min_duration: 15 * ONE_DAY,
                max_duration: 90 * ONE_DAY,
            },
            dividends_adjustment: SCALE / 2,
            dividends_address: None,
            version: 0,
        }
    );
    assert_eq!(setup.x_token.query_admin(), setup.admin);
    assert_eq!(
        setup.x_token.query_transfer_whitelist(),
        vec![&setup.env, setup.x_token.address.clone()]
    );
    assert_eq!(setup.x_token.symbol(), String::from_str(&setup.env, "xEAZY"));
    assert_eq!(setup.x_token.decimals(), 7);
}

#[test]
fn redeem_settings_are_validated() {
    let setup = Setup::new();

    assert_eq!(
        setup.x_token.try_update_redeem_settings(&SCALE, &(SCALE / 2), &0, &ONE_DAY, &0),
        Err(Ok(ErrorCode::InvalidRedeemSettings))
    );
    assert_eq!(
        setup.x_token.try_update_redeem_settings(&0, &(SCALE + 1), &0, &ONE_DAY, &0),
        Err(Ok(ErrorCode::InvalidRedeemSettings))
    );
    assert_eq!(
        setup.x_token.try_update_redeem_settings(&0, &SCALE, &ONE_DAY, &ONE_DAY, &0),
        Err(Ok(ErrorCode::InvalidRedeemSettings))
    );
    assert_eq!(
        setup.x_token.try_update_redeem_settings(&0, &SCALE, &0, &ONE_DAY, &(SCALE + 1)),
        Err(Ok(ErrorCode::InvalidRedeemSettings))
    );

    setup.x_token.update_redeem_settings(&(SCALE / 4), &SCALE, &ONE_DAY, &(30 * ONE_DAY), &0);

    let config = setup.x_token.query_config();
    assert_eq!(config.redeem_curve.min_ratio, SCALE / 4);
    assert_eq!(config.redeem_curve.max_duration, 30 * ONE_DAY);
    assert_eq!(config.dividends_adjustment, 0);
    assert_eq!(config.version, 1);
}

#[test]
fn dividends_address_stays_whitelisted() {
    let setup = Setup::new();
    let first = Address::generate(&setup.env);
    let second = Address::generate(&setup.env);

    setup.x_token.update_dividends_address(&Some(first.clone()));
    assert!(setup.x_token.is_transfer_whitelisted(&first));

    setup.x_token.update_dividends_address(&Some(second.clone()));
    assert!(!setup.x_token.is_transfer_whitelisted(&first));
    assert!(setup.x_token.is_transfer_whitelisted(&second));

    setup.x_token.update_dividends_address(&None);
    assert!(!setup.x_token.is_transfer_whitelisted(&second));
    assert!(setup.x_token.is_transfer_whitelisted(&setup.x_token.address));

    let config = setup.x_token.query_config();
    assert_eq!(config.dividends_address, None);
    assert_eq!(config.version, 3);
}

#[test]
fn deallocation_fee_is_capped() {
    let setup = Setup::new();
    let usage = Address::generate(&setup.env);

    assert_eq!(
        setup.x_token.try_update_deallocation_fee(&usage, &201),
        Err(Ok(ErrorCode::DeallocationFeeTooHigh))
    );

    setup.x_token.update_deallocation_fee(&usage, &200);
    assert_eq!(
        setup.env.auths(),
        std::vec![
            (
                setup.admin.clone(),
                AuthorizedInvocation {
                    function: AuthorizedFunction::Contract((
                        setup.x_token.address.clone(),
                        Symbol::new(&setup.env, "update_deallocation_fee"),
                        (&usage, 200_u32).into_val(&setup.env),
                    )),
                    sub_invocations: std::vec![],
                },
            )
        ]
    );
    assert_eq!(setup.x_token.query_deallocation_fee(&usage), 200);
}

#[test]
fn whitelisted_accounts_can_move_shares() {
    let setup = Setup::new();
    let user = setup.user_with_shares(1_000);
    let pool = Address::generate(&setup.env);

    assert_eq!(
        setup.x_token.try_update_transfer_whitelist(&setup.x_token.address, &false),
        Err(Ok(ErrorCode::CannotRemoveSelf))
    );

    setup.x_token.update_transfer_whitelist(&pool, &true);
    setup.x_token.transfer(&user, &pool, &300);
    assert_eq!(setup.x_token.balance(&pool), 300);

    setup.x_token.update_transfer_whitelist(&pool, &false);
    assert_eq!(
        setup.x_token.try_transfer(&pool, &user, &300),
        Err(Ok(Error::from_contract_error(ErrorCode::TransferNotAllowed as u32)))
    );
}

#[test]
fn set_admin_hands_over_control() {
    let setup = Setup::new();
    let new_admin = Address::generate(&setup.env);

    setup.x_token.set_admin(&new_admin);
    assert_eq!(setup.x_token.query_admin(), new_admin);
}
