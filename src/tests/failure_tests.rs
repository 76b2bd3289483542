extern crate std;
use crate::tests::{
    faulty_pair_contract::{FaultyPairContract, FaultyPairContractClient},
    swap_test_context::{setup, SwapTestContext, AB_RESERVES, BC_RESERVES, PAIR_FEE},
};
use soroban_sdk::{Address, BytesN, Vec};

const INPUT: i128 = 723623623623623;

fn faulty_pair(ctx: &SwapTestContext) -> Address {
    let pool = ctx.env.register(FaultyPairContract, ());
    FaultyPairContractClient::new(&ctx.env, &pool).init(&BC_RESERVES);
    ctx.router_client.register_pool(&pool);
    pool
}

#[test]
fn failing_pool_reverts_whole_route() {
    let ctx = setup();
    ctx.fund_trader(&ctx.a, INPUT);
    let faulty = faulty_pair(&ctx);

    let path = ctx.path(&[(&ctx.ab_pool, true, PAIR_FEE), (&faulty, true, PAIR_FEE)]);
    let res = ctx
        .router_client
        .try_execute(&ctx.trader, &ctx.a, &INPUT, &path);
    assert!(res.is_err());

    //first hop has been executed before the failure, nothing should survive it
    ctx.check_trader_balance(&ctx.a, INPUT);
    ctx.check_trader_balance(&ctx.b, 0);
    ctx.check_no_router_leftovers();
    assert_eq!(ctx.reserves(&ctx.ab_pool), AB_RESERVES);
    assert_eq!(ctx.balance(&ctx.a, &ctx.ab_pool), AB_RESERVES.0);
    assert_eq!(ctx.balance(&ctx.b, &ctx.ab_pool), AB_RESERVES.1);
    assert_eq!(ctx.balance(&ctx.b, &faulty), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #32713)")]
fn failing_pool_reports_external_call_failure() {
    let ctx = setup();
    ctx.fund_trader(&ctx.a, INPUT);
    let faulty = faulty_pair(&ctx);

    let path = ctx.path(&[(&ctx.ab_pool, true, PAIR_FEE), (&faulty, true, PAIR_FEE)]);
    ctx.router_client.execute(&ctx.trader, &ctx.a, &INPUT, &path);
}

#[test]
#[should_panic(expected = "Error(Contract, #32713)")]
fn trader_without_balance() {
    let ctx = setup();
    ctx.fund_trader(&ctx.a, INPUT - 1);

    let path = ctx.path(&[(&ctx.ab_pool, true, PAIR_FEE)]);
    ctx.router_client.execute(&ctx.trader, &ctx.a, &INPUT, &path);
}

#[test]
#[should_panic(expected = "Error(Contract, #32712)")]
fn empty_reserve_in() {
    let ctx = setup();
    let pool = ctx.create_pair(&ctx.a, &ctx.c, (0, 1_000_000_000_000), PAIR_FEE);
    ctx.fund_trader(&ctx.a, 1_000_000);

    let path = ctx.path(&[(&pool, true, PAIR_FEE)]);
    ctx.router_client.execute(&ctx.trader, &ctx.a, &1_000_000, &path);
}

#[test]
#[should_panic(expected = "Error(Contract, #32712)")]
fn empty_reserve_out_on_second_hop() {
    let ctx = setup();
    let pool = ctx.create_pair(&ctx.c, &ctx.b, (0, 1_000_000_000_000), PAIR_FEE);
    ctx.fund_trader(&ctx.a, INPUT);

    //B -> C on the second hop, the C reserve is empty
    let path = ctx.path(&[(&ctx.ab_pool, true, PAIR_FEE), (&pool, false, PAIR_FEE)]);
    ctx.router_client.execute(&ctx.trader, &ctx.a, &INPUT, &path);
}

#[test]
#[should_panic(expected = "Error(Contract, #32710)")]
fn execute_empty_path() {
    let ctx = setup();
    ctx.fund_trader(&ctx.a, INPUT);
    ctx.router_client
        .execute(&ctx.trader, &ctx.a, &INPUT, &Vec::new(&ctx.env));
}

#[test]
#[should_panic(expected = "Error(Contract, #32711)")]
fn execute_zero_amount() {
    let ctx = setup();
    let path = ctx.path(&[(&ctx.ab_pool, true, PAIR_FEE)]);
    ctx.router_client.execute(&ctx.trader, &ctx.a, &0, &path);
}

#[test]
#[should_panic(expected = "Error(Contract, #32711)")]
fn execute_negative_amount() {
    let ctx = setup();
    let path = ctx.path(&[(&ctx.ab_pool, true, PAIR_FEE)]);
    ctx.router_client.execute(&ctx.trader, &ctx.a, &-1, &path);
}

#[test]
#[should_panic(expected = "Error(Contract, #32711)")]
fn intermediate_hop_yields_nothing() {
    let ctx = setup();
    ctx.fund_trader(&ctx.c, 1_000_000_000_000_000);

    //C -> B -> A, the B amount is far too small for the deep B side of the AB pool
    let path = ctx.path(&[(&ctx.bc_pool, false, PAIR_FEE), (&ctx.ab_pool, false, PAIR_FEE)]);
    ctx.router_client
        .execute(&ctx.trader, &ctx.c, &1_000_000_000_000_000, &path);
}

#[test]
#[should_panic(expected = "Error(Contract, #32714)")]
fn unknown_pool() {
    let ctx = setup();
    ctx.fund_trader(&ctx.a, INPUT);

    let path = ctx.router_client.encode(
        &Vec::from_array(&ctx.env, [BytesN::from_array(&ctx.env, &[7u8; 20])]),
        &Vec::from_array(&ctx.env, [true]),
        &Vec::from_array(&ctx.env, [PAIR_FEE]),
    );
    ctx.router_client.execute(&ctx.trader, &ctx.a, &INPUT, &path);
}

#[test]
#[should_panic(expected = "Error(Contract, #32714)")]
fn unregistered_pool() {
    let ctx = setup();
    ctx.fund_trader(&ctx.a, INPUT);
    let path = ctx.path(&[(&ctx.ab_pool, true, PAIR_FEE)]);

    ctx.router_client.unregister_pool(&ctx.ab_pool);
    ctx.router_client.execute(&ctx.trader, &ctx.a, &INPUT, &path);
}

#[test]
#[should_panic(expected = "Error(Contract, #32710)")]
fn consecutive_hops_on_same_pool() {
    let ctx = setup();
    ctx.fund_trader(&ctx.a, INPUT);

    let path = ctx.path(&[(&ctx.ab_pool, true, PAIR_FEE), (&ctx.ab_pool, false, PAIR_FEE)]);
    ctx.router_client.execute(&ctx.trader, &ctx.a, &INPUT, &path);
}

#[test]
#[should_panic(expected = "Error(Contract, #32710)")]
fn malformed_path_word() {
    let ctx = setup();
    ctx.fund_trader(&ctx.a, INPUT);

    let mut word = ctx
        .path(&[(&ctx.ab_pool, true, PAIR_FEE)])
        .get_unchecked(0)
        .to_array();
    word[20] = 0xff;
    let path = Vec::from_array(&ctx.env, [BytesN::from_array(&ctx.env, &word)]);
    ctx.router_client.execute(&ctx.trader, &ctx.a, &INPUT, &path);
}

#[test]
fn quote_rejects_invalid_input() {
    let ctx = setup();
    let path = ctx.path(&[(&ctx.ab_pool, true, PAIR_FEE)]);

    assert!(ctx.router_client.try_quote(&0, &path).is_err());
    assert!(ctx.router_client.try_quote(&INPUT, &Vec::new(&ctx.env)).is_err());
    assert_eq!(ctx.reserves(&ctx.ab_pool), AB_RESERVES);
}
