//! Token mapping between bridged chains
//!
//! Loaded from the `tokensMap-*.json` release asset. Each entry groups the ids
//! of one logical asset on every chain it lives on, with that chain's decimals.
//! The token map is also the decimal registry used to wrap and unwrap balances:
//! amounts are carried across the bridge at the smallest precision of the group.

use std::collections::BTreeMap;

use bridge_core::{AssetBalance, DecimalRegistry};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::constants::native_token_id;

/// Errors from loading the token map
#[derive(Debug, thiserror::Error)]
pub enum TokenMapError {
    #[error("Failed to parse token map: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to fetch token map: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// Token info on a specific chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainToken {
    pub chain: String,
    pub token_id: String,
    pub name: String,
    pub decimals: u32,
}

/// One bridged asset with its representation on each chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeToken {
    pub chains: Vec<ChainToken>,
}

impl BridgeToken {
    pub fn on_chain(&self, chain: &str) -> Option<&ChainToken> {
        self.chains.iter().find(|c| c.chain == chain)
    }

    /// Precision the bridge carries this asset at: the smallest decimals of the group
    pub fn significant_decimals(&self) -> u32 {
        self.chains.iter().map(|c| c.decimals).min().unwrap_or(0)
    }
}

/// Complete token map for the bridge
#[derive(Debug, Clone, Default)]
pub struct TokenMap {
    pub tokens: Vec<BridgeToken>,
}

impl TokenMap {
    /// Parse the tokensMap JSON file ({"version": "...", "tokens": [...]})
    pub fn from_json(json: &str) -> Result<Self, TokenMapError> {
        let wrapper: RawTokenMapJson = serde_json::from_str(json)?;
        Ok(parse_token_entries(&wrapper.tokens))
    }

    /// Get tokens available on a specific chain
    pub fn tokens_for_chain(&self, chain: &str) -> Vec<&BridgeToken> {
        self.tokens
            .iter()
            .filter(|t| t.on_chain(chain).is_some())
            .collect()
    }

    /// Find the asset whose id on `chain` is `token_id`
    pub fn find_token(&self, token_id: &str, chain: &str) -> Option<&BridgeToken> {
        self.tokens
            .iter()
            .find(|t| t.on_chain(chain).is_some_and(|c| c.token_id == token_id))
    }

    /// Get every chain an asset is available on, given its id on `chain`
    pub fn chains_for_token(&self, token_id: &str, chain: &str) -> Vec<&str> {
        self.find_token(token_id, chain)
            .map(|t| t.chains.iter().map(|c| c.chain.as_str()).collect())
            .unwrap_or_default()
    }

    /// Look up the representation on `target_chain` of a token from `source_chain`
    pub fn get_target_token(
        &self,
        token_id: &str,
        source_chain: &str,
        target_chain: &str,
    ) -> Option<&ChainToken> {
        self.find_token(token_id, source_chain)?
            .on_chain(target_chain)
    }

    /// Get all unique supported chains
    pub fn supported_chains(&self) -> Vec<String> {
        let mut chains: Vec<String> = self
            .tokens
            .iter()
            .flat_map(|t| t.chains.iter().map(|c| c.chain.clone()))
            .collect();
        chains.sort();
        chains.dedup();
        chains
    }

    /// Decimals dropped when wrapping `token_id` from `chain`
    pub fn decimal_shift(&self, token_id: &str, chain: &str) -> Option<u32> {
        let token = self.find_token(token_id, chain)?;
        let decimals = token.on_chain(chain)?.decimals;
        Some(decimals.saturating_sub(token.significant_decimals()))
    }

    /// Wrap a balance held on `chain`, using that chain's native token id
    pub fn wrap_balance(&self, balance: &AssetBalance, chain: &str) -> Option<AssetBalance> {
        let native = native_token_id(chain)?;
        Some(bridge_core::wrap(balance, self, native, chain))
    }

    /// Unwrap a balance destined for `chain`, using that chain's native token id
    pub fn unwrap_balance(&self, balance: &AssetBalance, chain: &str) -> Option<AssetBalance> {
        let native = native_token_id(chain)?;
        Some(bridge_core::unwrap(balance, self, native, chain))
    }

    fn scale(&self, token_id: &str, chain: &str) -> Option<BigUint> {
        match self.decimal_shift(token_id, chain) {
            Some(shift) => Some(BigUint::from(10u32).pow(shift)),
            None => {
                tracing::debug!(token_id, chain, "Token not in token map, amount unchanged");
                None
            }
        }
    }
}

impl DecimalRegistry for TokenMap {
    fn wrap_amount(&self, token_id: &str, amount: &BigUint, chain: &str) -> BigUint {
        match self.scale(token_id, chain) {
            Some(scale) => amount / scale,
            None => amount.clone(),
        }
    }

    fn unwrap_amount(&self, token_id: &str, amount: &BigUint, chain: &str) -> BigUint {
        match self.scale(token_id, chain) {
            Some(scale) => amount * scale,
            None => amount.clone(),
        }
    }
}

// =============================================================================
// JSON parsing from the release asset
// =============================================================================

#[derive(Debug, Deserialize)]
struct RawTokenMapJson {
    tokens: Vec<RawTokenEntry>,
}

/// Raw token entry: chain name -> token info on that chain
type RawTokenEntry = BTreeMap<String, RawChainInfo>;

#[derive(Debug, Deserialize)]
struct RawChainInfo {
    #[serde(rename = "tokenId", alias = "tokenID")]
    token_id: Option<String>,
    name: Option<String>,
    decimals: Option<u32>,
}

/// Fetch and parse the token map from a URL
pub async fn fetch_token_map(url: &str) -> Result<TokenMap, TokenMapError> {
    let client = reqwest::Client::builder().user_agent("bridge").build()?;

    let wrapper: RawTokenMapJson = client.get(url).send().await?.json().await?;

    let map = parse_token_entries(&wrapper.tokens);
    tracing::info!(tokens = map.tokens.len(), "Loaded token map");
    Ok(map)
}

/// Parse raw token entries into our TokenMap
fn parse_token_entries(entries: &[RawTokenEntry]) -> TokenMap {
    let mut tokens = Vec::new();

    for entry in entries {
        let chains: Vec<ChainToken> = entry
            .iter()
            .filter_map(|(chain, info)| {
                let token_id = info.token_id.as_ref()?;
                Some(ChainToken {
                    chain: chain.clone(),
                    token_id: token_id.clone(),
                    name: info.name.clone().unwrap_or_default(),
                    decimals: info.decimals.unwrap_or(0),
                })
            })
            .collect();

        if !chains.is_empty() {
            tokens.push(BridgeToken { chains });
        }
    }

    TokenMap { tokens }
}
