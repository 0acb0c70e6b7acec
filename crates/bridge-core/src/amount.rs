//! Serde helpers for arbitrary-precision amounts
//!
//! Amounts are written as decimal strings, the same way EIP-12 boxes carry
//! `value` and token `amount`. Reading also accepts plain JSON integers.

use num_bigint::BigUint;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Number(u64),
}

pub fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
where
    D: Deserializer<'de>,
{
    match RawAmount::deserialize(deserializer)? {
        RawAmount::Text(text) => text
            .parse::<BigUint>()
            .map_err(|e| D::Error::custom(format!("invalid amount '{}': {}", text, e))),
        RawAmount::Number(n) => Ok(BigUint::from(n)),
    }
}
