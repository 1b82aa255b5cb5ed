//! Boost Scanner
//!
//! Coordinates candidate discovery with per-candidate market data enrichment
//! and reduces the results to the single highest-volume token. Enrichment is
//! strictly sequential: each fetch is issued only after the previous one has
//! been fully processed.

use thiserror::Error;

use crate::domain::{BestToken, SelectionState};
use crate::ports::candidate_source::{CandidateSourceError, CandidateSourcePort};
use crate::ports::market_data::{MarketDataError, MarketDataPort};

/// Scan pipeline error type
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("no boosted token candidates found")]
    EmptyCandidateSet,

    #[error("no candidate yielded usable market data")]
    EmptyResultSet,
}

impl From<CandidateSourceError> for ScanError {
    fn from(err: CandidateSourceError) -> Self {
        match err {
            CandidateSourceError::Transport(message) => ScanError::Transport(message),
            CandidateSourceError::Empty => ScanError::EmptyCandidateSet,
        }
    }
}

impl From<MarketDataError> for ScanError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::Transport(message) | MarketDataError::Parse(message) => {
                ScanError::Transport(message)
            }
        }
    }
}

/// Scanner behavior configuration
#[derive(Debug, Clone, Default)]
pub struct ScannerOptions {
    /// Skip candidates whose enrichment fetch fails instead of aborting the
    /// whole run. Off by default: a single transport failure discards the
    /// run, including any partial best-so-far.
    pub skip_unreachable: bool,
}

/// Scan pipeline over a candidate source and a market data port.
pub struct BoostScanner<S, M> {
    candidate_source: S,
    market_data: M,
    options: ScannerOptions,
}

impl<S, M> BoostScanner<S, M>
where
    S: CandidateSourcePort,
    M: MarketDataPort,
{
    /// Create a new scanner with default options
    pub fn new(candidate_source: S, market_data: M) -> Self {
        Self {
            candidate_source,
            market_data,
            options: ScannerOptions::default(),
        }
    }

    /// Set scanner options
    pub fn with_options(mut self, options: ScannerOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the full selection pipeline: discover candidates, enrich each one
    /// in source order, and keep the highest 24h volume seen.
    pub async fn select_top(&self) -> Result<BestToken, ScanError> {
        let candidates = self.candidate_source.fetch_candidates().await?;

        if candidates.is_empty() {
            return Err(ScanError::EmptyCandidateSet);
        }

        tracing::info!("Processing {} boosted candidates", candidates.len());

        let mut state = SelectionState::new();

        for candidate in &candidates {
            let snapshot = match self.market_data.fetch_snapshot(candidate).await {
                Ok(snapshot) => snapshot,
                Err(err) if self.options.skip_unreachable => {
                    tracing::warn!("Skipping {}: {}", candidate, err);
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            let Some(snapshot) = snapshot else {
                tracing::debug!("No market data for {}", candidate);
                continue;
            };

            tracing::debug!(
                "Token {} - 24h volume: {}",
                snapshot.symbol,
                snapshot.volume_24h
            );
            state.observe(snapshot);
        }

        state.into_best().ok_or(ScanError::EmptyResultSet)
    }

    /// Capability entry point: never surfaces an error to the caller,
    /// always a structured payload. Success is the best-token record;
    /// failure is `{ "error": message }`.
    pub async fn scan_payload(&self) -> serde_json::Value {
        match self.select_top().await {
            Ok(best) => {
                tracing::info!(
                    "Selected token: {} ({}) - 24h volume: {}",
                    best.token,
                    best.address,
                    best.volume
                );
                serde_json::json!(best)
            }
            Err(err) => {
                tracing::error!("Scan failed: {}", err);
                serde_json::json!({ "error": err.to_string() })
            }
        }
    }
}
