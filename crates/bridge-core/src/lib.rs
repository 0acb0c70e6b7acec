//! bridge-core: Shared types, balance arithmetic, errors, and configuration
//!
//! This crate provides the foundational types used across the bridge workspace.
//! Balance arithmetic is pure and can be used on its own, e.g. to check that a
//! transaction burns no tokens by comparing summed inputs against outputs.

pub mod amount;
pub mod balance;
pub mod config;
pub mod decimals;
pub mod errors;
pub mod types;

pub use balance::{equal, subtract, sum, sum_all, SubtractOptions};
pub use config::*;
pub use decimals::{unwrap, wrap, DecimalRegistry};
pub use errors::*;
pub use types::*;
