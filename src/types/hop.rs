use soroban_sdk::{contracttype, BytesN};

// Single step of the swap route
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Hop {
    // 20-byte pool identifier
    pub pool: BytesN<20>,
    // true if the selling asset is the pool's token0
    pub direction: bool,
    // Fee taken from the input amount (in bps, 0-255)
    pub fee: u32,
}
