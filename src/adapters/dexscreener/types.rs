//! DexScreener API response models.
//!
//! Fields arrive as untyped external data. Numeric fields that DexScreener
//! reports inconsistently (notably `volume.h24`, which shows up both as a
//! number and as a string) are coerced at this boundary so downstream code
//! only ever sees a plain non-negative float.

use serde::{Deserialize, Deserializer};

use crate::domain::MarketSnapshot;

/// One entry from the token-boosts listing.
#[derive(Debug, Clone, Deserialize)]
pub struct BoostEntry {
    #[serde(rename = "chainId")]
    pub chain_id: String,
    #[serde(rename = "tokenAddress")]
    pub token_address: String,
    /// Boost amount currently active for the token
    #[serde(default)]
    pub amount: Option<f64>,
    /// Total boost amount ever applied to the token
    #[serde(rename = "totalAmount", default)]
    pub total_amount: Option<f64>,
}

/// One pair record from the per-token pairs endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PairData {
    #[serde(rename = "baseToken")]
    pub base_token: BaseToken,
    #[serde(default)]
    pub volume: VolumeStats,
    #[serde(rename = "dexId", default)]
    pub dex_id: String,
    #[serde(rename = "priceUsd", default)]
    pub price_usd: Option<String>,
}

/// Base token identity within a pair.
#[derive(Debug, Clone, Deserialize)]
pub struct BaseToken {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub address: String,
}

/// Volume windows; only the 24h window drives selection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeStats {
    #[serde(default, deserialize_with = "f64_lenient")]
    pub h24: f64,
}

impl PairData {
    /// Convert into the domain snapshot consumed by the selection loop.
    pub fn into_snapshot(self) -> MarketSnapshot {
        MarketSnapshot {
            symbol: self.base_token.symbol,
            address: self.base_token.address,
            volume_24h: self.volume.h24,
            dex_id: self.dex_id,
            price_usd: self.price_usd,
        }
    }
}

/// Accept a number or a numeric string; anything missing or unusable is 0.0.
fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let value = match raw {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Ok(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_boost_listing() {
        let json = r#"[
            {
                "url": "https://dexscreener.com/solana/abc",
                "chainId": "solana",
                "tokenAddress": "AbcMint111",
                "amount": 30,
                "totalAmount": 130,
                "icon": "https://cdn.dexscreener.com/abc.png",
                "description": "A token"
            },
            {
                "chainId": "base",
                "tokenAddress": "0xDef222"
            }
        ]"#;

        let entries: Vec<BoostEntry> = serde_json::from_str(json).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].chain_id, "solana");
        assert_eq!(entries[0].token_address, "AbcMint111");
        assert_eq!(entries[0].total_amount, Some(130.0));
        assert_eq!(entries[1].chain_id, "base");
        assert_eq!(entries[1].amount, None);
    }

    #[test]
    fn test_parse_pair_with_numeric_volume() {
        let json = r#"[{
            "dexId": "raydium",
            "priceUsd": "0.0042",
            "baseToken": { "symbol": "WIF", "address": "WifMint111", "name": "dogwifhat" },
            "volume": { "h24": 1234.56, "h6": 300, "h1": 50 }
        }]"#;

        let pairs: Vec<PairData> = serde_json::from_str(json).unwrap();
        let snapshot = pairs.into_iter().next().unwrap().into_snapshot();

        assert_eq!(snapshot.symbol, "WIF");
        assert_eq!(snapshot.address, "WifMint111");
        assert_eq!(snapshot.dex_id, "raydium");
        assert_eq!(snapshot.price_usd, Some("0.0042".to_string()));
        assert_relative_eq!(snapshot.volume_24h, 1234.56);
    }

    #[test]
    fn test_parse_pair_with_string_volume() {
        let json = r#"[{
            "dexId": "orca",
            "baseToken": { "symbol": "BONK", "address": "BonkMint" },
            "volume": { "h24": "98765.4" }
        }]"#;

        let pairs: Vec<PairData> = serde_json::from_str(json).unwrap();
        assert_relative_eq!(pairs[0].volume.h24, 98765.4);
    }

    #[test]
    fn test_missing_volume_field_coerces_to_zero() {
        let json = r#"[{
            "dexId": "meteora",
            "baseToken": { "symbol": "NOVOL", "address": "NoVolMint" }
        }]"#;

        let pairs: Vec<PairData> = serde_json::from_str(json).unwrap();
        let snapshot = pairs.into_iter().next().unwrap().into_snapshot();
        assert_eq!(snapshot.volume_24h, 0.0);
    }

    #[test]
    fn test_unusable_volume_values_coerce_to_zero() {
        for h24 in [r#"null"#, r#""garbage""#, r#""""#, "-500", r#""-500""#] {
            let json = format!(
                r#"[{{
                    "baseToken": {{ "symbol": "X", "address": "XMint" }},
                    "volume": {{ "h24": {} }}
                }}]"#,
                h24
            );

            let pairs: Vec<PairData> = serde_json::from_str(&json).unwrap();
            assert_eq!(pairs[0].volume.h24, 0.0, "h24 = {} should coerce to 0", h24);
        }
    }

    #[test]
    fn test_missing_price_is_none() {
        let json = r#"[{
            "dexId": "raydium",
            "baseToken": { "symbol": "NP", "address": "NpMint" },
            "volume": { "h24": 10 }
        }]"#;

        let pairs: Vec<PairData> = serde_json::from_str(json).unwrap();
        assert_eq!(pairs[0].price_usd, None);
    }

    #[test]
    fn test_empty_pair_list_parses() {
        let pairs: Vec<PairData> = serde_json::from_str("[]").unwrap();
        assert!(pairs.is_empty());
    }
}
