//! Core type definitions for the bridge

use std::borrow::Borrow;
use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::errors::BalanceError;

/// Box ID (chain-specific, e.g. a hex hash on Ergo or `txId.index` on Cardano)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxId(pub String);

impl BoxId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for BoxId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BoxId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BoxId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Token ID, stable across chains for a given bridged asset
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub String);

impl TokenId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for TokenId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TokenId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TokenId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Amount of a single token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenInfo {
    pub id: TokenId,
    #[serde(with = "crate::amount")]
    pub value: BigUint,
}

impl TokenInfo {
    pub fn new(id: impl Into<TokenId>, value: impl Into<BigUint>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Native token amount plus an unordered list of tokens.
///
/// Token ids are unique within a balance. Equality ignores token order, but an
/// explicit zero-valued entry is not the same as a missing one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    #[serde(with = "crate::amount")]
    pub native_token: BigUint,
    #[serde(default)]
    pub tokens: Vec<TokenInfo>,
}

impl AssetBalance {
    pub fn new(native_token: impl Into<BigUint>, tokens: Vec<TokenInfo>) -> Self {
        Self {
            native_token: native_token.into(),
            tokens,
        }
    }

    /// Build a balance, rejecting repeated token ids
    pub fn try_new(
        native_token: impl Into<BigUint>,
        tokens: Vec<TokenInfo>,
    ) -> Result<Self, BalanceError> {
        for (i, token) in tokens.iter().enumerate() {
            if tokens[..i].iter().any(|earlier| earlier.id == token.id) {
                return Err(BalanceError::DuplicateToken {
                    token_id: token.id.clone(),
                });
            }
        }
        Ok(Self::new(native_token, tokens))
    }

    /// Amount held of `token_id`, if the balance lists it
    pub fn token_amount(&self, token_id: &str) -> Option<&BigUint> {
        self.tokens
            .iter()
            .find(|t| t.id.as_str() == token_id)
            .map(|t| &t.value)
    }

    /// True when the native amount and every token amount are zero
    pub fn is_zero(&self) -> bool {
        self.native_token.is_zero() && self.tokens.iter().all(|t| t.value.is_zero())
    }
}

impl PartialEq for AssetBalance {
    fn eq(&self, other: &Self) -> bool {
        crate::balance::equal(self, other)
    }
}

impl Eq for AssetBalance {}

/// Normalized view of a chain-specific box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxInfo {
    pub id: BoxId,
    pub assets: AssetBalance,
}

impl BoxInfo {
    pub fn new(id: impl Into<BoxId>, assets: AssetBalance) -> Self {
        Self {
            id: id.into(),
            assets,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_box_id_lookup_by_str() {
        let forbidden: HashSet<BoxId> = [BoxId::new("abc.0"), BoxId::new("def.1")]
            .into_iter()
            .collect();
        assert!(forbidden.contains("abc.0"));
        assert!(!forbidden.contains("abc.1"));
    }

    #[test]
    fn test_try_new_rejects_duplicate_tokens() {
        let result = AssetBalance::try_new(
            10u64,
            vec![
                TokenInfo::new("t1", 5u64),
                TokenInfo::new("t2", 1u64),
                TokenInfo::new("t1", 7u64),
            ],
        );
        match result {
            Err(BalanceError::DuplicateToken { token_id }) => assert_eq!(token_id.as_str(), "t1"),
            other => panic!("Expected DuplicateToken, got {:?}", other),
        }
    }

    #[test]
    fn test_token_amount_and_is_zero() {
        let balance = AssetBalance::new(0u64, vec![TokenInfo::new("t1", 0u64)]);
        assert_eq!(balance.token_amount("t1"), Some(&BigUint::zero()));
        assert_eq!(balance.token_amount("t2"), None);
        assert!(balance.is_zero());
        assert!(AssetBalance::default().is_zero());
        assert!(!AssetBalance::new(1u64, vec![]).is_zero());
    }

    #[test]
    fn test_balance_json_shape() {
        let balance: AssetBalance = serde_json::from_str(
            r#"{"nativeToken":"5000000","tokens":[{"id":"t1","value":"100"}]}"#,
        )
        .unwrap();
        assert_eq!(balance.native_token, BigUint::from(5_000_000u64));
        assert_eq!(balance.token_amount("t1"), Some(&BigUint::from(100u64)));

        let no_tokens: AssetBalance = serde_json::from_str(r#"{"nativeToken":7}"#).unwrap();
        assert!(no_tokens.tokens.is_empty());
    }
}
