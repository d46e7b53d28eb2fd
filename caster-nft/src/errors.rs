//! Stable error messages for the rank issuer endpoints.

pub const ERR_INVALID_ACTION: &str = "invalid action";
pub const ERR_INSUFFICIENT_ALLOWANCE: &str = "insufficient allowance";
pub const ERR_INSUFFICIENT_BALANCE: &str = "insufficient balance";
pub const ERR_TOKEN_SUPPLY_EXCEEDED: &str = "token supply exceeded";
pub const ERR_UNAUTHORIZED_ACTION: &str = "unauthorized action";
pub const ERR_INVALID_ADDRESS: &str = "invalid address";
pub const ERR_ENFORCED_PAUSE: &str = "contract is paused";
