//! Rosen Bridge token registry
//!
//! The token map ties together the ids of one bridged asset across chains and
//! records each chain's decimals. It implements [`bridge_core::DecimalRegistry`],
//! so balances can be wrapped to bridge precision and unwrapped on the way out.

pub mod constants;
pub mod token_map;

pub use constants::{native_token_id, SUPPORTED_CHAINS};
pub use token_map::{fetch_token_map, BridgeToken, ChainToken, TokenMap, TokenMapError};
