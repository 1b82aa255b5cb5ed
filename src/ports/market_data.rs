use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Candidate, MarketSnapshot};

/// Market data error type
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Data parsing error: {0}")]
    Parse(String),
}

/// Port for enriching a single candidate with market data.
#[async_trait]
pub trait MarketDataPort: Send + Sync {
    /// Fetch the market snapshot for one candidate.
    ///
    /// `Ok(None)` means the source had no usable record for this candidate;
    /// the caller skips it and moves on. An `Err` is transport-level and
    /// aborts the whole run unless the scanner is configured to skip
    /// unreachable candidates.
    async fn fetch_snapshot(
        &self,
        candidate: &Candidate,
    ) -> Result<Option<MarketSnapshot>, MarketDataError>;
}
