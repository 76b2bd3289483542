use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{contractclient, token::TokenClient, Address, Bytes, Env, Error};

use crate::codec::MAX_FEE;
use crate::types::{error::RouterError, swapinfo::HopSwap};

// Fee denominator, fees are specified in bps
pub const FEE_DENOMINATOR: i128 = 10_000;

#[contractclient(name = "PairClient")]
#[allow(dead_code)]
pub trait ConstantProductPairTrait {
    fn get_reserves(e: Env) -> (i128, i128);
    fn swap(
        e: Env,
        amount_0_out: i128,
        amount_1_out: i128,
        to: Address,
        data: Bytes,
    ) -> Result<(), Error>;
}

// Estimate amount_out for a constant-product pool charging `fee` bps from the input
//
// # Arguments
//
// * `e` - The environment
// * `amount_in` - Amount of tokens sold to the pool
// * `reserve_in` - Pool reserve of the selling token
// * `reserve_out` - Pool reserve of the buying token
// * `fee` - Fee in bps
//
// # Returns
//
// * floor(amount_in * (10000 - fee) * reserve_out / (reserve_in * 10000 + amount_in * (10000 - fee)))
pub fn get_amount_out(
    e: &Env,
    amount_in: i128,
    reserve_in: i128,
    reserve_out: i128,
    fee: u32,
) -> Result<i128, RouterError> {
    if amount_in <= 0 {
        return Err(RouterError::InsufficientInput);
    }
    if reserve_in <= 0 || reserve_out <= 0 {
        return Err(RouterError::InsufficientLiquidity);
    }
    if fee > MAX_FEE {
        return Err(RouterError::InvalidInput);
    }
    let amount_in_with_fee = amount_in
        .checked_mul(FEE_DENOMINATOR - fee as i128)
        .ok_or(RouterError::MathOverflow)?;
    let denominator = reserve_in
        .checked_mul(FEE_DENOMINATOR)
        .and_then(|d| d.checked_add(amount_in_with_fee))
        .ok_or(RouterError::MathOverflow)?;
    //numerator may exceed i128, the product is carried in 256 bits
    let amount_out = amount_in_with_fee.fixed_mul_floor(e, &reserve_out, &denominator);
    if amount_out <= 0 {
        return Err(RouterError::InsufficientInput);
    }
    Ok(amount_out)
}

// Resolve (reserve_in, reserve_out) from the pool reserves
pub fn oriented_reserves(reserves: (i128, i128), direction: bool) -> (i128, i128) {
    if direction {
        reserves
    } else {
        (reserves.1, reserves.0)
    }
}

// Thin wrapper around pair/token clients translating failed invocations into router errors
pub struct PairAdapter<'a> {
    env: &'a Env,
    client: PairClient<'a>,
}

impl<'a> PairAdapter<'a> {
    pub fn new(env: &'a Env, pool: &Address) -> Self {
        PairAdapter {
            env,
            client: PairClient::new(env, pool),
        }
    }

    // Read pool reserves in (token0, token1) order
    pub fn reserves(&self) -> Result<(i128, i128), RouterError> {
        match self.client.try_get_reserves() {
            Ok(Ok(reserves)) => Ok(reserves),
            _ => Err(RouterError::ExternalCallFailure),
        }
    }

    // Release the priced hop output from the pool to the destination
    pub fn swap(&self, swap: &HopSwap, to: &Address) -> Result<(), RouterError> {
        let (amount_0_out, amount_1_out) = swap.amounts_out();
        match self.client.try_swap(
            &amount_0_out,
            &amount_1_out,
            to,
            &Bytes::new(self.env),
        ) {
            Ok(Ok(())) => Ok(()),
            _ => Err(RouterError::ExternalCallFailure),
        }
    }
}

// Transfer selling tokens from the trader directly to the first pool of the route
pub fn fund_pool(
    e: &Env,
    token: &Address,
    from: &Address,
    pool: &Address,
    amount: i128,
) -> Result<(), RouterError> {
    match TokenClient::new(e, token).try_transfer(from, pool, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(RouterError::ExternalCallFailure),
    }
}
