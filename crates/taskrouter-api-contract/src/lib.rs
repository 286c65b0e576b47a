//! TaskRouter REST API contract types
//!
//! This crate defines the wire types of the workflow endpoints of the
//! TaskRouter API together with the argument bundles the workflow client
//! turns into request parameters.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
