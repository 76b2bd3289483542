use soroban_sdk::{xdr::ToXdr, Address, BytesN, Env, Vec};

use crate::types::{error::RouterError, hop::Hop};

// Encoded hop layout (32-byte word):
//
// | bytes  | field     |
// |--------|-----------|
// | 0..20  | pool key  |
// | 20     | direction |
// | 21     | fee (bps) |
// | 22..32 | zero      |
pub const WORD_SIZE: usize = 32;
pub const POOL_KEY_SIZE: usize = 20;

const POOL_OFFSET: usize = 0;
const DIRECTION_OFFSET: usize = POOL_OFFSET + POOL_KEY_SIZE;
const FEE_OFFSET: usize = DIRECTION_OFFSET + 1;
const PADDING_OFFSET: usize = FEE_OFFSET + 1;

// Max fee that fits into the single fee byte
pub const MAX_FEE: u32 = u8::MAX as u32;

// Derive the 20-byte pool identifier from the pool contract address
//
// # Arguments
//
// * `e` - The environment
// * `pool` - Pool contract address
//
// # Returns
//
// * Last 20 bytes of the keccak256 hash of the XDR-encoded address
pub fn pool_key(e: &Env, pool: &Address) -> BytesN<20> {
    let digest = e.crypto().keccak256(&pool.clone().to_xdr(e)).to_bytes().to_array();
    let mut key = [0u8; POOL_KEY_SIZE];
    key.copy_from_slice(&digest[WORD_SIZE - POOL_KEY_SIZE..]);
    BytesN::from_array(e, &key)
}

// Pack a single hop into the fixed-width word
pub fn encode_hop(e: &Env, hop: &Hop) -> Result<BytesN<32>, RouterError> {
    if hop.fee > MAX_FEE {
        return Err(RouterError::InvalidInput);
    }
    let mut word = [0u8; WORD_SIZE];
    word[POOL_OFFSET..DIRECTION_OFFSET].copy_from_slice(&hop.pool.to_array());
    word[DIRECTION_OFFSET] = hop.direction as u8;
    word[FEE_OFFSET] = hop.fee as u8;
    Ok(BytesN::from_array(e, &word))
}

// Unpack a single hop from the fixed-width word
//
// Fails if the direction flag is not 0/1 or the padding is not zeroed
pub fn decode_hop(e: &Env, word: &BytesN<32>) -> Result<Hop, RouterError> {
    let word = word.to_array();
    let direction = match word[DIRECTION_OFFSET] {
        0 => false,
        1 => true,
        _ => return Err(RouterError::InvalidInput),
    };
    if word[PADDING_OFFSET..].iter().any(|b| *b != 0) {
        return Err(RouterError::InvalidInput);
    }
    let mut pool = [0u8; POOL_KEY_SIZE];
    pool.copy_from_slice(&word[POOL_OFFSET..DIRECTION_OFFSET]);
    Ok(Hop {
        pool: BytesN::from_array(e, &pool),
        direction,
        fee: word[FEE_OFFSET] as u32,
    })
}

// Encode the route described by parallel pool/direction/fee lists
//
// # Arguments
//
// * `e` - The environment
// * `pools` - Pool identifiers in route order
// * `directions` - Per-hop direction flags
// * `fees` - Per-hop fees (in bps)
//
// # Returns
//
// * One word per hop, order preserved. Empty lists produce an empty path
pub fn encode_path(
    e: &Env,
    pools: &Vec<BytesN<20>>,
    directions: &Vec<bool>,
    fees: &Vec<u32>,
) -> Result<Vec<BytesN<32>>, RouterError> {
    if pools.len() != directions.len() || pools.len() != fees.len() {
        return Err(RouterError::InvalidInput);
    }
    let mut path = Vec::new(e);
    for i in 0..pools.len() {
        let hop = Hop {
            pool: pools.get_unchecked(i),
            direction: directions.get_unchecked(i),
            fee: fees.get_unchecked(i),
        };
        path.push_back(encode_hop(e, &hop)?);
    }
    Ok(path)
}

// Decode every word of the encoded path
pub fn decode_path(e: &Env, path: &Vec<BytesN<32>>) -> Result<Vec<Hop>, RouterError> {
    let mut hops = Vec::new(e);
    for word in path.iter() {
        hops.push_back(decode_hop(e, &word)?);
    }
    Ok(hops)
}
