//! Stable error messages for the prize pool endpoints.

pub const ERR_INVALID_ACTION: &str = "invalid action";
pub const ERR_UNAUTHORIZED_ACTION: &str = "unauthorized action";
pub const ERR_INVALID_PARAMS: &str = "invalid params";
pub const ERR_INVALID_ADDRESS: &str = "invalid address";
pub const ERR_INSUFFICIENT_FUNDS: &str = "insufficient funds";
