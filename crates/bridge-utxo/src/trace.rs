//! Mempool trace map
//!
//! A confirmed box may already be spent by an unconfirmed transaction. The
//! trace map points such a box at the output that replaced it (its successor),
//! or marks it as a tombstone when nothing usable was produced. Successors can
//! themselves be spent again, so resolution follows the chain hop by hop.

use std::collections::{HashMap, HashSet};

use bridge_core::{BoxId, BoxInfo};

use crate::chain::BoxInfoExtractor;

/// What became of a box spent in the mempool
#[derive(Debug, Clone)]
pub enum TraceEntry<B> {
    /// The box was spent and this output took its place
    Successor(B),
    /// The box was spent with no successor worth tracking
    Tombstone,
}

/// Unconfirmed transaction as seen by a mempool scanner
#[derive(Debug, Clone)]
pub struct MempoolTransaction<B> {
    pub inputs: Vec<BoxId>,
    pub outputs: Vec<B>,
}

/// Box id -> mempool fate, built fresh for every selection
#[derive(Debug, Clone)]
pub struct TraceMap<B> {
    entries: HashMap<BoxId, TraceEntry<B>>,
}

impl<B> Default for TraceMap<B> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<B: Clone> TraceMap<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trace map from pending transactions.
    ///
    /// Each input maps to the first output accepted by `is_tracked` (typically
    /// "locked to the same address and holding the token of interest"), or to a
    /// tombstone when no output qualifies.
    pub fn from_mempool<I, F>(transactions: I, is_tracked: F) -> Self
    where
        I: IntoIterator<Item = MempoolTransaction<B>>,
        F: Fn(&B) -> bool,
    {
        let mut map = Self::new();
        for tx in transactions {
            let successor = tx.outputs.iter().find(|output| is_tracked(output));
            for input in tx.inputs {
                match successor {
                    Some(output) => map.insert_successor(input, output.clone()),
                    None => map.insert_tombstone(input),
                }
            }
        }
        map
    }

    pub fn insert_successor(&mut self, spent: impl Into<BoxId>, successor: B) {
        self.entries
            .insert(spent.into(), TraceEntry::Successor(successor));
    }

    pub fn insert_tombstone(&mut self, spent: impl Into<BoxId>) {
        self.entries.insert(spent.into(), TraceEntry::Tombstone);
    }

    pub fn get(&self, box_id: &str) -> Option<&TraceEntry<B>> {
        self.entries.get(box_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of following a box through the trace map
#[derive(Debug, Clone)]
pub enum Resolution<B> {
    /// Latest box in the chain, not spent in the mempool
    Spendable { raw: B, info: BoxInfo },
    /// The chain ends in a tombstone at `id`
    Tombstoned { id: BoxId },
    /// The chain revisits `id`; the trace map is malformed
    Cyclic { id: BoxId },
}

/// Follow `raw` through `trace` until reaching a box with no mempool entry.
pub fn resolve<B, E>(trace: &TraceMap<B>, extractor: &E, raw: &B) -> Resolution<B>
where
    B: Clone,
    E: BoxInfoExtractor<B> + ?Sized,
{
    let mut current = raw.clone();
    let mut info = extractor.box_info(&current);
    let mut visited: HashSet<BoxId> = HashSet::new();
    visited.insert(info.id.clone());

    loop {
        match trace.get(info.id.as_str()) {
            None => return Resolution::Spendable { raw: current, info },
            Some(TraceEntry::Tombstone) => return Resolution::Tombstoned { id: info.id },
            Some(TraceEntry::Successor(next)) => {
                current = next.clone();
                info = extractor.box_info(&current);
                if !visited.insert(info.id.clone()) {
                    return Resolution::Cyclic { id: info.id };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bridge_core::AssetBalance;
    use num_bigint::BigUint;

    use super::*;

    fn mock_box(id: &str, native: u64) -> BoxInfo {
        BoxInfo::new(id, AssetBalance::new(native, vec![]))
    }

    fn identity(raw: &BoxInfo) -> BoxInfo {
        raw.clone()
    }

    #[test]
    fn test_resolve_untracked_box() {
        let trace = TraceMap::new();
        match resolve(&trace, &identity, &mock_box("a", 1)) {
            Resolution::Spendable { raw, info } => {
                assert_eq!(raw.id.as_str(), "a");
                assert_eq!(info.id.as_str(), "a");
            }
            other => panic!("Expected Spendable, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_multi_hop() {
        let mut trace = TraceMap::new();
        trace.insert_successor("a", mock_box("b", 2));
        trace.insert_successor("b", mock_box("c", 3));

        match resolve(&trace, &identity, &mock_box("a", 1)) {
            Resolution::Spendable { raw, .. } => {
                assert_eq!(raw.id.as_str(), "c");
                assert_eq!(raw.assets.native_token, BigUint::from(3u64));
            }
            other => panic!("Expected Spendable, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_tombstone_after_hop() {
        let mut trace = TraceMap::new();
        trace.insert_successor("a", mock_box("b", 2));
        trace.insert_tombstone("b");

        match resolve(&trace, &identity, &mock_box("a", 1)) {
            Resolution::Tombstoned { id } => assert_eq!(id.as_str(), "b"),
            other => panic!("Expected Tombstoned, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_detects_cycles() {
        let mut trace = TraceMap::new();
        trace.insert_successor("a", mock_box("b", 2));
        trace.insert_successor("b", mock_box("a", 1));
        assert!(matches!(
            resolve(&trace, &identity, &mock_box("a", 1)),
            Resolution::Cyclic { .. }
        ));

        let mut self_loop = TraceMap::new();
        self_loop.insert_successor("x", mock_box("x", 1));
        assert!(matches!(
            resolve(&self_loop, &identity, &mock_box("x", 1)),
            Resolution::Cyclic { .. }
        ));
    }

    #[test]
    fn test_from_mempool() {
        let transactions = vec![
            MempoolTransaction {
                inputs: vec![BoxId::new("a"), BoxId::new("b")],
                outputs: vec![mock_box("fee", 1), mock_box("change", 500)],
            },
            MempoolTransaction {
                inputs: vec![BoxId::new("c")],
                outputs: vec![mock_box("elsewhere", 1)],
            },
        ];

        let trace = TraceMap::from_mempool(transactions, |output: &BoxInfo| {
            output.id.as_str() == "change"
        });

        assert_eq!(trace.len(), 3);
        for spent in ["a", "b"] {
            match trace.get(spent) {
                Some(TraceEntry::Successor(output)) => assert_eq!(output.id.as_str(), "change"),
                other => panic!("Expected successor for {}, got {:?}", spent, other),
            }
        }
        assert!(matches!(trace.get("c"), Some(TraceEntry::Tombstone)));
        assert!(trace.get("change").is_none());
    }
}
