//! Stable error messages for the royalty bank endpoints.

pub const ERR_INVALID_ACTION: &str = "invalid action";
pub const ERR_UNAUTHORIZED_ACTION: &str = "unauthorized action";
pub const ERR_INVALID_ADDRESS: &str = "invalid address";
