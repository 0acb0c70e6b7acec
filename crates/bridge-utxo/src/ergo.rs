//! Ergo boxes in EIP-12 form
//!
//! The JSON shape Ergo wallets and nodes use for spendable inputs. Amounts are
//! strings so values never pass through floating point.

use std::collections::HashMap;

use bridge_core::{AssetBalance, BoxInfo, TokenInfo};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// EIP-12 token/asset in a box
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip12Asset {
    pub token_id: String,
    pub amount: String,
}

/// EIP-12 input box, read-only subset of the wallet signing shape.
///
/// Only what box selection reads is kept: there is no context `extension`, and
/// `additionalRegisters` may be omitted by the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip12InputBox {
    pub box_id: String,
    /// Transaction ID where this box was created
    pub transaction_id: String,
    /// Output index in that transaction
    pub index: u16,
    pub value: String,
    pub ergo_tree: String,
    pub assets: Vec<Eip12Asset>,
    pub creation_height: i32,
    #[serde(default)]
    pub additional_registers: HashMap<String, String>,
}

/// Box abstraction for Ergo: box id plus nanoERG and token amounts.
///
/// Unparsable amounts count as zero. Repeated entries of one token are merged.
pub fn ergo_box_info(ergo_box: &Eip12InputBox) -> BoxInfo {
    let mut tokens: Vec<TokenInfo> = Vec::new();
    for asset in &ergo_box.assets {
        let amount = parse_amount(&asset.amount);
        match tokens
            .iter_mut()
            .find(|t| t.id.as_str() == asset.token_id)
        {
            Some(existing) => existing.value += amount,
            None => tokens.push(TokenInfo::new(asset.token_id.as_str(), amount)),
        }
    }

    BoxInfo::new(
        ergo_box.box_id.as_str(),
        AssetBalance::new(parse_amount(&ergo_box.value), tokens),
    )
}

fn parse_amount(amount: &str) -> BigUint {
    amount.parse::<BigUint>().unwrap_or_default()
}
