#![no_std]

mod codec;
mod events;
mod executor;
mod extensions;
mod pair;
mod tests;
mod types;

use events::{Events, RouterEvents};
use extensions::env_extensions::EnvExtensions;
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, BytesN, Env, Vec};
use types::{error::RouterError, hop::Hop};

#[contract]
pub struct HopRouter;

#[contractimpl]
impl HopRouter {
    // Initialize contract
    //
    // # Arguments
    //
    // * `admin` - Admin account address
    //
    // # Panics
    //
    // Panics if the contract is already initialized
    pub fn init(e: Env, admin: Address) {
        if e.is_initialized() {
            panic_with_error!(&e, RouterError::AlreadyInitialized);
        }
        admin.require_auth();
        e.set_admin(&admin);
        e.bump_instance();
    }

    // Register constant-product pool so it can be referenced from encoded paths
    //
    // # Arguments
    //
    // * `pool` - Pool contract address
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the caller is not the admin
    //
    // # Returns
    //
    // * 20-byte pool identifier
    pub fn register_pool(e: Env, pool: Address) -> BytesN<20> {
        e.panic_if_not_initialized();
        e.panic_if_not_admin();
        let key = codec::pool_key(&e, &pool);
        e.set_pool(&key, &pool);
        e.bump_instance();
        Events::new(&e).register_pool(key.clone(), pool);
        key
    }

    // Remove pool from the registry
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the caller is not the admin
    pub fn unregister_pool(e: Env, pool: Address) {
        e.panic_if_not_initialized();
        e.panic_if_not_admin();
        let key = codec::pool_key(&e, &pool);
        e.remove_pool(&key);
        e.bump_instance();
        Events::new(&e).unregister_pool(key, pool);
    }

    // Resolve registered pool address by its identifier
    pub fn get_pool(e: Env, key: BytesN<20>) -> Option<Address> {
        e.get_pool(&key)
    }

    // Derive 20-byte identifier for the pool address
    pub fn pool_key(e: Env, pool: Address) -> BytesN<20> {
        codec::pool_key(&e, &pool)
    }

    // Update the contract's WASM hash
    //
    // # Arguments
    //
    // * `wasm_hash` - New WASM hash
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the caller is not the admin
    pub fn update_contract(e: Env, wasm_hash: BytesN<32>) {
        e.panic_if_not_initialized();
        e.panic_if_not_admin();
        e.deployer().update_current_contract_wasm(wasm_hash)
    }

    // Encode swap route into fixed-width words
    //
    // # Arguments
    //
    // * `pools` - Pool identifiers in route order
    // * `directions` - true if the selling asset of the hop is the pool's token0
    // * `fees` - Per-hop fees (in bps, 0-255)
    //
    // # Panics
    //
    // Panics if the argument lengths differ or any fee exceeds 255
    pub fn encode(
        e: Env,
        pools: Vec<BytesN<20>>,
        directions: Vec<bool>,
        fees: Vec<u32>,
    ) -> Vec<BytesN<32>> {
        codec::encode_path(&e, &pools, &directions, &fees)
            .unwrap_or_else(|err| panic_with_error!(&e, err))
    }

    // Decode a single encoded hop
    //
    // # Panics
    //
    // Panics if the word is malformed
    pub fn decode(e: Env, word: BytesN<32>) -> Hop {
        codec::decode_hop(&e, &word).unwrap_or_else(|err| panic_with_error!(&e, err))
    }

    // Estimate amounts bought on every hop of the route
    //
    // # Arguments
    //
    // * `amount` - Selling amount
    // * `path` - Encoded route
    //
    // # Returns
    //
    // * Selling amount followed by the output of each hop
    pub fn quote(e: Env, amount: i128, path: Vec<BytesN<32>>) -> Vec<i128> {
        executor::quote_route(&e, amount, &path).unwrap_or_else(|err| panic_with_error!(&e, err))
    }

    // Execute multi-hop swap along the encoded route
    //
    // # Arguments
    //
    // * `trader` - Address of the trader account, receives bought tokens
    // * `selling` - Selling token address
    // * `amount` - Amount of selling tokens
    // * `path` - Encoded route
    //
    // # Panics
    //
    // Panics if the caller doesn't match the trader address
    // Panics if the path is empty or malformed, or references unknown pools
    // Panics if any hop has empty reserves or yields nothing
    // Panics if any pool or token invocation fails
    //
    // # Returns
    //
    // * Amount of tokens bought on the last hop
    pub fn execute(
        e: Env,
        trader: Address,
        selling: Address,
        amount: i128,
        path: Vec<BytesN<32>>,
    ) -> i128 {
        trader.require_auth();
        e.bump_instance();
        executor::execute_route(&e, &trader, &selling, amount, &path)
            .unwrap_or_else(|err| panic_with_error!(&e, err))
    }
}
