use soroban_sdk::{log, Address, BytesN, Env, Map, Vec};

use crate::codec::decode_path;
use crate::events::{Events, RouterEvents};
use crate::extensions::env_extensions::EnvExtensions;
use crate::pair::{fund_pool, get_amount_out, oriented_reserves, PairAdapter};
use crate::types::{error::RouterError, swapinfo::HopSwap};

// Price every hop of the encoded route without touching pool state
//
// Reserves of a pool visited more than once are taken from the local overlay
// that already reflects the planned effect of the earlier visit.
//
// # Arguments
//
// * `e` - The environment
// * `amount_in` - Amount of selling tokens entering the first hop
// * `path` - Encoded route
//
// # Returns
//
// * Priced hops in route order
pub fn plan_route(
    e: &Env,
    amount_in: i128,
    path: &Vec<BytesN<32>>,
) -> Result<Vec<HopSwap>, RouterError> {
    if path.is_empty() {
        return Err(RouterError::InvalidInput);
    }
    if amount_in <= 0 {
        return Err(RouterError::InsufficientInput);
    }
    let hops = decode_path(e, path)?;

    let mut plan: Vec<HopSwap> = Vec::new(e);
    let mut reserves: Map<Address, (i128, i128)> = Map::new(e);
    let mut amount = amount_in;
    let mut previous: Option<Address> = None;

    for hop in hops.iter() {
        let pool = e.get_pool(&hop.pool).ok_or(RouterError::UnknownPool)?;
        //output sent to the pool itself would never be seen as input
        if previous.as_ref() == Some(&pool) {
            return Err(RouterError::InvalidInput);
        }
        let pool_reserves = match reserves.get(pool.clone()) {
            Some(r) => r,
            None => PairAdapter::new(e, &pool).reserves()?,
        };
        let (reserve_in, reserve_out) = oriented_reserves(pool_reserves, hop.direction);
        let amount_out = get_amount_out(e, amount, reserve_in, reserve_out, hop.fee)?;

        let updated = oriented_reserves(
            (
                reserve_in.checked_add(amount).ok_or(RouterError::MathOverflow)?,
                reserve_out - amount_out,
            ),
            hop.direction,
        );
        reserves.set(pool.clone(), updated);

        plan.push_back(HopSwap {
            pool: pool.clone(),
            direction: hop.direction,
            fee: hop.fee,
            amount_in: amount,
            amount_out,
        });
        amount = amount_out;
        previous = Some(pool);
    }
    Ok(plan)
}

// Move funds through every planned hop and deliver the result to the trader
//
// # Arguments
//
// * `e` - The environment
// * `trader` - Address funding the route and receiving the bought tokens
// * `selling` - Selling token address
// * `plan` - Priced hops returned by `plan_route`
//
// # Returns
//
// * Amount of tokens received by the trader
pub fn commit_route(
    e: &Env,
    trader: &Address,
    selling: &Address,
    plan: &Vec<HopSwap>,
) -> Result<i128, RouterError> {
    let first = plan.first().ok_or(RouterError::InvalidInput)?;
    let events = Events::new(e);

    //fund the first pool directly, the router never holds route tokens
    fund_pool(e, selling, trader, &first.pool, first.amount_in)?;

    let mut amount_out = 0i128;
    for i in 0..plan.len() {
        let swap = plan.get_unchecked(i);
        //intermediate output goes straight to the next pool
        let to = match plan.get(i + 1) {
            Some(next) => next.pool,
            None => trader.clone(),
        };
        PairAdapter::new(e, &swap.pool).swap(&swap, &to)?;
        log!(e, "hop {}: {} -> {}", i, swap.amount_in, swap.amount_out);
        events.hop(swap.pool.clone(), to, swap.amount_in, swap.amount_out);
        amount_out = swap.amount_out;
    }

    events.route(
        trader.clone(),
        selling.clone(),
        first.amount_in,
        amount_out,
        plan.len(),
    );
    Ok(amount_out)
}

// Execute the encoded route: plan all hops first, mutate pools only once every hop is priced
pub fn execute_route(
    e: &Env,
    trader: &Address,
    selling: &Address,
    amount_in: i128,
    path: &Vec<BytesN<32>>,
) -> Result<i128, RouterError> {
    let plan = plan_route(e, amount_in, path)?;
    commit_route(e, trader, selling, &plan)
}

// Per-hop amounts of the route: [amount_in, out_1, ..., out_n]
pub fn quote_route(
    e: &Env,
    amount_in: i128,
    path: &Vec<BytesN<32>>,
) -> Result<Vec<i128>, RouterError> {
    let plan = plan_route(e, amount_in, path)?;
    let mut amounts = Vec::from_array(e, [amount_in]);
    for swap in plan.iter() {
        amounts.push_back(swap.amount_out);
    }
    Ok(amounts)
}
