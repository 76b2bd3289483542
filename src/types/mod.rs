pub mod error;
pub mod hop;
pub mod swapinfo;
