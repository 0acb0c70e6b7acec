//! Multi-asset balance arithmetic
//!
//! All operations borrow their inputs and return a fresh balance.

use std::cmp::Ordering;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::BalanceError;
use crate::types::AssetBalance;

/// Options for [`subtract`]
#[derive(Debug, Clone, Default)]
pub struct SubtractOptions {
    /// Native amount that must remain after subtraction
    pub minimum_native_token: BigUint,
    /// Clamp the native result to zero instead of failing
    pub allow_negative_native_token: bool,
}

/// Order-insensitive equality of two balances
pub fn equal(a: &AssetBalance, b: &AssetBalance) -> bool {
    a.native_token == b.native_token
        && a.tokens.len() == b.tokens.len()
        && a.tokens.iter().all(|token| {
            b.tokens
                .iter()
                .any(|other| other.id == token.id && other.value == token.value)
        })
}

/// Add two balances, merging tokens by id
pub fn sum(a: &AssetBalance, b: &AssetBalance) -> AssetBalance {
    let mut tokens = a.tokens.clone();
    for token in &b.tokens {
        match tokens.iter_mut().find(|t| t.id == token.id) {
            Some(existing) => existing.value += &token.value,
            None => tokens.push(token.clone()),
        }
    }

    AssetBalance {
        native_token: &a.native_token + &b.native_token,
        tokens,
    }
}

/// Sum any number of balances
pub fn sum_all<'a, I>(balances: I) -> AssetBalance
where
    I: IntoIterator<Item = &'a AssetBalance>,
{
    balances
        .into_iter()
        .fold(AssetBalance::default(), |total, balance| sum(&total, balance))
}

/// Subtract `b` from `a`.
///
/// The native result must stay strictly above `minimum_native_token`, unless
/// `allow_negative_native_token` is set, in which case it is clamped to zero.
/// Tokens of `b` are checked in order and the first violation is returned.
/// Tokens that reach exactly zero are dropped from the result.
pub fn subtract(
    a: &AssetBalance,
    b: &AssetBalance,
    options: &SubtractOptions,
) -> Result<AssetBalance, BalanceError> {
    let native_token = if a.native_token > &b.native_token + &options.minimum_native_token {
        &a.native_token - &b.native_token
    } else if options.allow_negative_native_token {
        BigUint::zero()
    } else {
        return Err(BalanceError::InsufficientNativeToken {
            available: a.native_token.clone(),
            required: b.native_token.clone(),
            minimum: options.minimum_native_token.clone(),
        });
    };

    let mut tokens = a.tokens.clone();
    for token in &b.tokens {
        let index = tokens
            .iter()
            .position(|t| t.id == token.id)
            .ok_or_else(|| BalanceError::TokenNotFound {
                token_id: token.id.clone(),
            })?;

        match tokens[index].value.cmp(&token.value) {
            Ordering::Less => {
                return Err(BalanceError::InsufficientToken {
                    token_id: token.id.clone(),
                    available: tokens[index].value.clone(),
                    required: token.value.clone(),
                });
            }
            Ordering::Equal => {
                tokens.remove(index);
            }
            Ordering::Greater => tokens[index].value -= &token.value,
        }
    }

    Ok(AssetBalance {
        native_token,
        tokens,
    })
}
