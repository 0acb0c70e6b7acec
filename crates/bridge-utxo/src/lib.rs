//! bridge-utxo: Covering-box selection for UTXO chains
//!
//! Walks an address's unspent boxes page by page, follows each box through
//! pending mempool spends, and collects boxes until a requirement is covered.

pub mod box_selector;
pub mod chain;
pub mod ergo;
pub mod trace;

pub use box_selector::{get_covering_boxes, CoveringBoxes};
pub use chain::{AddressBoxSource, BoxInfoExtractor};
pub use ergo::{ergo_box_info, Eip12Asset, Eip12InputBox};
pub use trace::{resolve, MempoolTransaction, Resolution, TraceEntry, TraceMap};
