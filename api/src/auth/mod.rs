//! Request principal resolution
//!
//! Authentication proper is out of scope: the acting user is taken from a
//! trusted header set by the fronting gateway.

pub mod principal;

pub use principal::{principal_middleware, USER_ID_HEADER};
