//! Decimal rescaling of balances between chains
//!
//! The same bridged asset may carry different decimals on each chain. A
//! [`DecimalRegistry`] knows how to move a single amount to and from the
//! bridge-wide precision; `wrap`/`unwrap` apply it to every amount of a balance.

use num_bigint::BigUint;

use crate::types::{AssetBalance, TokenInfo};

/// Per-amount decimal conversion, keyed by token id and chain
pub trait DecimalRegistry {
    /// Convert a chain amount to the bridge-wide precision
    fn wrap_amount(&self, token_id: &str, amount: &BigUint, chain: &str) -> BigUint;

    /// Convert a bridge-wide amount back to the chain's precision
    fn unwrap_amount(&self, token_id: &str, amount: &BigUint, chain: &str) -> BigUint;
}

/// Rescale every amount of `balance` from `chain` precision to bridge precision.
///
/// The native amount is looked up under `native_token_id`.
pub fn wrap<R: DecimalRegistry + ?Sized>(
    balance: &AssetBalance,
    registry: &R,
    native_token_id: &str,
    chain: &str,
) -> AssetBalance {
    rescale(balance, native_token_id, |token_id, amount| {
        registry.wrap_amount(token_id, amount, chain)
    })
}

/// Inverse of [`wrap`]
pub fn unwrap<R: DecimalRegistry + ?Sized>(
    balance: &AssetBalance,
    registry: &R,
    native_token_id: &str,
    chain: &str,
) -> AssetBalance {
    rescale(balance, native_token_id, |token_id, amount| {
        registry.unwrap_amount(token_id, amount, chain)
    })
}

fn rescale<F>(balance: &AssetBalance, native_token_id: &str, convert: F) -> AssetBalance
where
    F: Fn(&str, &BigUint) -> BigUint,
{
    AssetBalance {
        native_token: convert(native_token_id, &balance.native_token),
        tokens: balance
            .tokens
            .iter()
            .map(|token| TokenInfo {
                id: token.id.clone(),
                value: convert(token.id.as_str(), &token.value),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drops `shift` decimals for tokens on "cardano", leaves everything else alone
    struct FixedShift {
        shift: u32,
    }

    impl DecimalRegistry for FixedShift {
        fn wrap_amount(&self, _token_id: &str, amount: &BigUint, chain: &str) -> BigUint {
            if chain == "cardano" {
                amount / BigUint::from(10u32).pow(self.shift)
            } else {
                amount.clone()
            }
        }

        fn unwrap_amount(&self, _token_id: &str, amount: &BigUint, chain: &str) -> BigUint {
            if chain == "cardano" {
                amount * BigUint::from(10u32).pow(self.shift)
            } else {
                amount.clone()
            }
        }
    }

    #[test]
    fn test_wrap_and_unwrap_each_amount() {
        let registry = FixedShift { shift: 3 };
        let balance = AssetBalance::new(
            5_000_000u64,
            vec![TokenInfo::new("t1", 12_345u64), TokenInfo::new("t2", 1_000u64)],
        );

        let wrapped = wrap(&balance, &registry, "ada", "cardano");
        assert_eq!(
            wrapped,
            AssetBalance::new(
                5_000u64,
                vec![TokenInfo::new("t1", 12u64), TokenInfo::new("t2", 1u64)]
            )
        );

        let unwrapped = unwrap(&wrapped, &registry, "ada", "cardano");
        assert_eq!(unwrapped.native_token, BigUint::from(5_000_000u64));
        assert_eq!(unwrapped.token_amount("t1"), Some(&BigUint::from(12_000u64)));
        assert_eq!(unwrapped.tokens.len(), balance.tokens.len());
    }

    #[test]
    fn test_wrap_other_chain_is_identity() {
        let registry = FixedShift { shift: 3 };
        let balance = AssetBalance::new(7u64, vec![TokenInfo::new("t1", 0u64)]);
        assert_eq!(wrap(&balance, &registry, "erg", "ergo"), balance);
    }
}
