//! Error types for the bridge core

use num_bigint::BigUint;
use thiserror::Error;

use crate::types::TokenId;

/// Core errors that can occur in the bridge
#[derive(Debug, Error)]
pub enum Error {
    #[error("Balance error: {0}")]
    Balance(#[from] BalanceError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Balance arithmetic errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    #[error("Insufficient native token: need {required} (keeping at least {minimum}), have {available}")]
    InsufficientNativeToken {
        available: BigUint,
        required: BigUint,
        minimum: BigUint,
    },

    #[error("Token {token_id} not found in balance")]
    TokenNotFound { token_id: TokenId },

    #[error("Insufficient tokens ({token_id}): need {required}, have {available}")]
    InsufficientToken {
        token_id: TokenId,
        available: BigUint,
        required: BigUint,
    },

    #[error("Token {token_id} listed more than once")]
    DuplicateToken { token_id: TokenId },
}

/// Result type alias for bridge core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_error_display() {
        let err = BalanceError::InsufficientToken {
            token_id: TokenId::new("abc123"),
            available: BigUint::from(50u64),
            required: BigUint::from(100u64),
        };
        let msg = err.to_string();
        assert!(msg.contains("abc123"));
        assert!(msg.contains("need 100"));
        assert!(msg.contains("have 50"));

        let err: Error = BalanceError::TokenNotFound {
            token_id: TokenId::new("xyz"),
        }
        .into();
        assert!(err.to_string().starts_with("Balance error:"));
    }
}
