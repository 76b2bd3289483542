use soroban_sdk::{contracttype, Address};

// Priced hop ready to be executed against the pool
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct HopSwap {
    // Pool contract address
    pub pool: Address,
    // true if the selling asset is the pool's token0
    pub direction: bool,
    // Fee in bps
    pub fee: u32,
    // Amount of tokens sold to the pool
    pub amount_in: i128,
    // Amount of tokens bought from the pool
    pub amount_out: i128,
}

impl HopSwap {
    // Pool output amounts in (token0, token1) order
    pub fn amounts_out(&self) -> (i128, i128) {
        if self.direction {
            (0, self.amount_out)
        } else {
            (self.amount_out, 0)
        }
    }
}
