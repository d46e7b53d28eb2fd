//! Stable error messages for the stake registry endpoints.

pub const ERR_INVALID_ACTION: &str = "invalid action";
pub const ERR_INSUFFICIENT_BALANCE: &str = "insufficient balance";
pub const ERR_UNAUTHORIZED_ACTION: &str = "unauthorized action";
pub const ERR_INVALID_ADDRESS: &str = "invalid address";
pub const ERR_SIGNATURE_ALREADY_USED: &str = "signature already used";
