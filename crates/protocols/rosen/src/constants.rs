//! Rosen Bridge protocol constants

/// Chains connected through the bridge
pub const SUPPORTED_CHAINS: &[&str] = &[
    "ergo",
    "cardano",
    "bitcoin",
    "ethereum",
    "doge",
    "binance",
    "bitcoin-runes",
];

/// Token id the token map uses for each chain's native currency
pub fn native_token_id(chain: &str) -> Option<&'static str> {
    match chain {
        "ergo" => Some("erg"),
        "cardano" => Some("ada"),
        "bitcoin" | "bitcoin-runes" => Some("btc"),
        "ethereum" => Some("eth"),
        "doge" => Some("doge"),
        "binance" => Some("bnb"),
        _ => None,
    }
}
