//! Running-maximum selection over market snapshots.
//!
//! The accumulator is an explicit value threaded through the scan loop
//! rather than a mutable closed over by it, so the monotonicity guarantee
//! can be tested on the reduction in isolation.

use serde::{Deserialize, Serialize};

/// Market data for one candidate, as reported by the data source.
///
/// Immutable once constructed. A malformed or missing volume field is
/// coerced to zero at the adapter boundary, so `volume_24h` is always a
/// finite, non-negative number here.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    /// Base token symbol
    pub symbol: String,
    /// Base token address
    pub address: String,
    /// 24h trading volume in USD
    pub volume_24h: f64,
    /// DEX the pair trades on
    pub dex_id: String,
    /// Price in USD as reported by the source, if available
    pub price_usd: Option<String>,
}

/// The highest-volume token observed in a scan run.
///
/// Field names match the payload shape crossing the invocation boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestToken {
    pub token: String,
    pub address: String,
    pub volume: f64,
    pub dex: String,
    pub price: Option<String>,
}

impl From<MarketSnapshot> for BestToken {
    fn from(snapshot: MarketSnapshot) -> Self {
        Self {
            token: snapshot.symbol,
            address: snapshot.address,
            volume: snapshot.volume_24h,
            dex: snapshot.dex_id,
            price: snapshot.price_usd,
        }
    }
}

/// Running-maximum accumulator over a sequence of snapshots.
///
/// The first snapshot seeds the accumulator regardless of its volume.
/// Afterwards a snapshot wins only on strictly greater 24h volume, so the
/// earliest candidate to reach a given maximum keeps it; later candidates
/// with an equal volume never displace it.
#[derive(Debug, Default)]
pub struct SelectionState {
    best: Option<BestToken>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current best volume, 0.0 while unseeded.
    pub fn best_volume(&self) -> f64 {
        self.best.as_ref().map(|b| b.volume).unwrap_or(0.0)
    }

    /// True once any snapshot has been observed.
    pub fn is_seeded(&self) -> bool {
        self.best.is_some()
    }

    /// Fold one snapshot into the running maximum.
    pub fn observe(&mut self, snapshot: MarketSnapshot) {
        match &self.best {
            Some(best) if snapshot.volume_24h <= best.volume => {}
            _ => self.best = Some(BestToken::from(snapshot)),
        }
    }

    /// Consume the state, yielding the winner if any snapshot was usable.
    pub fn into_best(self) -> Option<BestToken> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn snapshot(symbol: &str, address: &str, volume: f64) -> MarketSnapshot {
        MarketSnapshot {
            symbol: symbol.to_string(),
            address: address.to_string(),
            volume_24h: volume,
            dex_id: "raydium".to_string(),
            price_usd: Some("0.0042".to_string()),
        }
    }

    #[test]
    fn test_empty_state_yields_nothing() {
        let state = SelectionState::new();
        assert!(!state.is_seeded());
        assert_eq!(state.best_volume(), 0.0);
        assert!(state.into_best().is_none());
    }

    #[test]
    fn test_first_snapshot_seeds_even_at_zero_volume() {
        let mut state = SelectionState::new();
        state.observe(snapshot("DUST", "0xA1", 0.0));

        assert!(state.is_seeded());
        let best = state.into_best().unwrap();
        assert_eq!(best.token, "DUST");
        assert_eq!(best.volume, 0.0);
    }

    #[test]
    fn test_strictly_greater_volume_wins() {
        let mut state = SelectionState::new();
        state.observe(snapshot("AAA", "0xA1", 1000.0));
        state.observe(snapshot("BBB", "0xB1", 5000.0));
        state.observe(snapshot("CCC", "0xC1", 2000.0));

        let best = state.into_best().unwrap();
        assert_eq!(best.token, "BBB");
        assert_eq!(best.address, "0xB1");
        assert_relative_eq!(best.volume, 5000.0);
    }

    #[test]
    fn test_equal_volume_never_displaces_first_winner() {
        // First candidate to reach the maximum keeps it
        let mut state = SelectionState::new();
        state.observe(snapshot("AAA", "0xA1", 1000.0));
        state.observe(snapshot("BBB", "0xB1", 5000.0));
        state.observe(snapshot("CCC", "0xC1", 5000.0));

        let best = state.into_best().unwrap();
        assert_eq!(best.address, "0xB1");
        assert_relative_eq!(best.volume, 5000.0);
    }

    #[test]
    fn test_volume_is_monotonically_non_decreasing() {
        let volumes = [300.0, 100.0, 900.0, 900.0, 0.0, 1200.0, 50.0];
        let mut state = SelectionState::new();
        let mut previous = state.best_volume();

        for (i, volume) in volumes.iter().enumerate() {
            state.observe(snapshot("TOK", &format!("0x{}", i), *volume));
            let current = state.best_volume();
            assert!(current >= previous, "volume decreased: {} -> {}", previous, current);
            previous = current;
        }

        assert_relative_eq!(state.into_best().unwrap().volume, 1200.0);
    }

    #[test]
    fn test_best_token_carries_snapshot_fields() {
        let mut state = SelectionState::new();
        state.observe(MarketSnapshot {
            symbol: "WIF".to_string(),
            address: "Addr123".to_string(),
            volume_24h: 123_456.78,
            dex_id: "orca".to_string(),
            price_usd: None,
        });

        let best = state.into_best().unwrap();
        assert_eq!(best.token, "WIF");
        assert_eq!(best.address, "Addr123");
        assert_eq!(best.dex, "orca");
        assert_eq!(best.price, None);
        assert_relative_eq!(best.volume, 123_456.78);
    }

    #[test]
    fn test_best_token_serializes_to_boundary_shape() {
        let best = BestToken {
            token: "BONK".to_string(),
            address: "Bonk111".to_string(),
            volume: 42.0,
            dex: "raydium".to_string(),
            price: Some("0.00002".to_string()),
        };

        let json = serde_json::to_value(&best).unwrap();
        assert_eq!(json["token"], "BONK");
        assert_eq!(json["address"], "Bonk111");
        assert_eq!(json["volume"], 42.0);
        assert_eq!(json["dex"], "raydium");
        assert_eq!(json["price"], "0.00002");
    }
}
