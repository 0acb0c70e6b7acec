//! Per-chain capabilities consumed by the box selector

use async_trait::async_trait;
use bridge_core::BoxInfo;

/// Paginated access to an address's confirmed, unspent boxes
#[async_trait]
pub trait AddressBoxSource: Send + Sync {
    /// Chain-specific box representation, passed through untouched
    type Box: Clone + Send + Sync;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch up to `limit` boxes of `address` starting at `offset`.
    ///
    /// An empty page means the address has no more boxes.
    async fn fetch_address_boxes(
        &self,
        address: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Self::Box>, Self::Error>;
}

/// Normalizes a chain-specific box into its id and assets.
///
/// Must be deterministic: the same logical box always yields the same id,
/// whether it came from the address query or from the mempool trace map.
pub trait BoxInfoExtractor<B> {
    fn box_info(&self, raw: &B) -> BoxInfo;
}

impl<B, F> BoxInfoExtractor<B> for F
where
    F: Fn(&B) -> BoxInfo,
{
    fn box_info(&self, raw: &B) -> BoxInfo {
        self(raw)
    }
}
