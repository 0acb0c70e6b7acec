//! Covering-box selection
//!
//! Greedy, single-pass walk over an address's unspent boxes. Boxes are
//! fetched a page at a time, swapped for their mempool successors, and kept
//! while they still contribute native token or a required token. Selection
//! stops as soon as the requirement is met or the address runs out of boxes.
//!
//! This is not a minimizer: earlier boxes win, and any excess value in an
//! accepted box is simply carried along.

use std::collections::HashSet;

use bridge_core::{AssetBalance, BoxId, SelectorConfig, TokenInfo};
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, warn};

use crate::chain::{AddressBoxSource, BoxInfoExtractor};
use crate::trace::{resolve, Resolution, TraceMap};

// =============================================================================
// Result type
// =============================================================================

/// Boxes chosen to cover a requirement
#[derive(Debug, Clone)]
pub struct CoveringBoxes<B> {
    /// Whether the selected boxes cover every native and token requirement
    pub covered: bool,
    /// Selected boxes, after mempool substitution
    pub boxes: Vec<B>,
}

// =============================================================================
// Requirement tracking
// =============================================================================

/// Part of the requirement not yet covered by accepted boxes
#[derive(Debug)]
struct Uncovered {
    native_token: BigUint,
    tokens: Vec<TokenInfo>,
}

impl Uncovered {
    fn new(required: &AssetBalance) -> Self {
        Self {
            native_token: required.native_token.clone(),
            tokens: required
                .tokens
                .iter()
                .filter(|t| !t.value.is_zero())
                .cloned()
                .collect(),
        }
    }

    fn is_satisfied(&self) -> bool {
        self.tokens.is_empty() && self.native_token.is_zero()
    }

    /// Apply a box's tokens to the requirement.
    ///
    /// Returns true if the box holds any token still required. A token
    /// requirement is dropped once reached; overshoot is not tracked.
    fn consume_tokens(&mut self, assets: &AssetBalance) -> bool {
        let mut is_useful = false;
        for token in &assets.tokens {
            if let Some(index) = self.tokens.iter().position(|t| t.id == token.id) {
                is_useful = true;
                if self.tokens[index].value > token.value {
                    self.tokens[index].value -= &token.value;
                } else {
                    self.tokens.remove(index);
                }
            }
        }
        is_useful
    }

    fn consume_native(&mut self, amount: &BigUint) {
        if self.native_token > *amount {
            self.native_token -= amount;
        } else {
            self.native_token.set_zero();
        }
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Select boxes of `address` covering `required`.
///
/// Each fetched box is first resolved through `trace`: boxes already spent in
/// the mempool are replaced by their successor (possibly over several hops),
/// and boxes whose chain ends in a tombstone are skipped. A box whose resolved
/// id is in `forbidden_box_ids` is never selected, and each resolved id is
/// selected at most once (inputs of one pending transaction share a successor).
///
/// A box is accepted if it carries a still-required token, or if native token
/// is still outstanding. Running out of boxes is not an error; it is reported
/// as `covered: false`. Fetch errors are returned as-is.
pub async fn get_covering_boxes<S, E>(
    source: &S,
    extractor: &E,
    address: &str,
    required: &AssetBalance,
    forbidden_box_ids: &HashSet<BoxId>,
    trace: &TraceMap<S::Box>,
    config: &SelectorConfig,
) -> Result<CoveringBoxes<S::Box>, S::Error>
where
    S: AddressBoxSource + ?Sized,
    E: BoxInfoExtractor<S::Box> + ?Sized,
{
    let page_size = config.page_size.max(1);
    let mut uncovered = Uncovered::new(required);
    let mut boxes: Vec<S::Box> = Vec::new();
    let mut selected_ids: HashSet<BoxId> = HashSet::new();
    let mut offset: u64 = 0;

    'pages: while !uncovered.is_satisfied() {
        let page = source
            .fetch_address_boxes(address, offset, page_size)
            .await?;
        debug!(address, offset, page_len = page.len(), "Fetched address boxes");
        offset = offset.saturating_add(page_size);

        if page.is_empty() {
            break;
        }

        for raw in &page {
            let (resolved, info) = match resolve(trace, extractor, raw) {
                Resolution::Spendable { raw, info } => (raw, info),
                Resolution::Tombstoned { id } => {
                    debug!(box_id = %id, "Box consumed in mempool, skipping");
                    continue;
                }
                Resolution::Cyclic { id } => {
                    warn!(box_id = %id, "Cyclic mempool trace, skipping box");
                    continue;
                }
            };

            if forbidden_box_ids.contains(&info.id) {
                debug!(box_id = %info.id, "Box is forbidden, skipping");
                continue;
            }

            if selected_ids.contains(&info.id) {
                debug!(box_id = %info.id, "Box already selected, skipping");
                continue;
            }

            let is_useful = uncovered.consume_tokens(&info.assets);
            if is_useful || !uncovered.native_token.is_zero() {
                uncovered.consume_native(&info.assets.native_token);
                selected_ids.insert(info.id);
                boxes.push(resolved);
            }

            if uncovered.is_satisfied() {
                break 'pages;
            }
        }
    }

    let covered = uncovered.is_satisfied();
    debug!(
        address,
        covered,
        selected = boxes.len(),
        uncovered_native = %uncovered.native_token,
        uncovered_tokens = uncovered.tokens.len(),
        "Covering box selection finished"
    );

    Ok(CoveringBoxes { covered, boxes })
}
