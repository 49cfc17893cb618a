use eazyswap_token::{ EazyToken, EazyTokenClient };
use eazyswap_x_token::{ XEazyToken, XEazyTokenClient };
use soroban_sdk::{ testutils::{ Address as _, Ledger }, Address, Env, String };

use crate::contract::{ Distributor, DistributorClient };

pub const ONE_DAY: u64 = 86_400;
pub const START_TIME: u64 = 1_000;
/// EAZY per second
pub const EMISSION_RATE: i128 = 10;

pub fn deploy_token<'a>(env: &Env, admin: &Address, symbol: &str) -> EazyTokenClient<'a> {
    let address = env.register(EazyToken, (
        admin.clone(),
        7_u32,
        String::from_str(env, symbol),
        String::from_str(env, symbol),
    ));
    let token = EazyTokenClient::new(env, &address);
    token.add_minter(admin);
    token
}

pub fn deploy_x_eazy_token<'a>(env: &Env, admin: &Address, eazy: &Address) -> XEazyTokenClient<'a> {
    let address = env.register(XEazyToken, (
        admin.clone(),
        eazy.clone(),
        7_u32,
        String::from_str(env, "Escrowed EazySwap Token"),
        String::from_str(env, "xEAZY"),
    ));
    XEazyTokenClient::new(env, &address)
}

pub struct Setup<'a> {
    pub env: Env,
    pub admin: Address,
    pub fee: Address,
    pub core: Address,
    pub ecosystem: Address,
    pub eazy: EazyTokenClient<'a>,
    pub x_eazy: XEazyTokenClient<'a>,
    pub lp: EazyTokenClient<'a>,
    pub distributor: DistributorClient<'a>,
}

impl<'a> Setup<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();
        env.ledger().set_timestamp(START_TIME);

        let admin = Address::generate(&env);
        let fee = Address::generate(&env);
        let core = Address::generate(&env);
        let ecosystem = Address::generate(&env);

        let eazy = deploy_token(&env, &admin, "EAZY");
        let x_eazy = deploy_x_eazy_token(&env, &admin, &eazy.address);
        let lp = deploy_token(&env, &admin, "EAZY-LP");

        let address = env.register(Distributor, (
            admin.clone(),
            eazy.address.clone(),
            x_eazy.address.clone(),
            fee.clone(),
            core.clone(),
            ecosystem.clone(),
            EMISSION_RATE,
            START_TIME,
        ));
        let distributor = DistributorClient::new(&env, &address);
        eazy.add_minter(&distributor.address);

        Setup { env, admin, fee, core, ecosystem, eazy, x_eazy, lp, distributor }
    }

    /// A fresh user holding `amount` LP tokens.
    pub fn user_with_lp(&self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        self.lp.mint(&self.admin, &user, &amount);
        user
    }

    pub fn jump(&self, seconds: u64) {
        let now = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(now + seconds);
    }
}
