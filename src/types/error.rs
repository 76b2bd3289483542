use soroban_sdk::contracterror;

// Router contract errors
#[contracterror]
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RouterError {
    // Caller is not allowed to execute this function
    Unauthorized = 32_700,
    // Contract has not been initialized yet
    NotInitialized = 32_701,
    // Cannot initialize the contract for the second time
    AlreadyInitialized = 32_702,
    // Malformed path, mismatched hop lists or unrepresentable fee
    InvalidInput = 32_710,
    // Hop input amount is zero or negative, or too small to produce output
    InsufficientInput = 32_711,
    // One of the hop reserves is empty
    InsufficientLiquidity = 32_712,
    // Pool or token invocation failed
    ExternalCallFailure = 32_713,
    // Pool identifier is not registered
    UnknownPool = 32_714,
    // Intermediate pricing value does not fit into i128
    MathOverflow = 32_715,
}
