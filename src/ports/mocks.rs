//! Test doubles for the candidate source and market data ports.
//!
//! Used by the integration tests to drive the scan pipeline without real
//! network calls. Responses are configured per candidate; fetches are
//! recorded so tests can assert call order.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::candidate_source::{CandidateSourceError, CandidateSourcePort};
use super::market_data::{MarketDataError, MarketDataPort};
use crate::domain::{Candidate, MarketSnapshot};

/// Mock candidate source returning a fixed list or a fixed failure.
///
/// An empty candidate list reproduces the real adapter's contract and
/// reports [`CandidateSourceError::Empty`].
#[derive(Debug, Default)]
pub struct MockCandidateSource {
    candidates: Vec<Candidate>,
    fail_transport: Option<String>,
}

impl MockCandidateSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the candidate list
    pub fn with_candidates(mut self, candidates: Vec<Candidate>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Builder method to make the fetch fail at the transport level
    pub fn with_transport_failure(mut self, message: &str) -> Self {
        self.fail_transport = Some(message.to_string());
        self
    }
}

#[async_trait]
impl CandidateSourcePort for MockCandidateSource {
    async fn fetch_candidates(&self) -> Result<Vec<Candidate>, CandidateSourceError> {
        if let Some(ref message) = self.fail_transport {
            return Err(CandidateSourceError::Transport(message.clone()));
        }
        if self.candidates.is_empty() {
            return Err(CandidateSourceError::Empty);
        }
        Ok(self.candidates.clone())
    }
}

#[derive(Debug, Clone)]
enum CannedSnapshot {
    Snapshot(MarketSnapshot),
    NoData,
    Transport(String),
}

/// Mock market data port with canned per-candidate responses.
///
/// Candidates without a configured response behave as "no usable record".
/// Clones share the call log, so a test can keep a handle while the scanner
/// owns the other.
#[derive(Debug, Clone, Default)]
pub struct MockMarketData {
    responses: HashMap<String, CannedSnapshot>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(candidate: &Candidate) -> String {
        candidate.to_string()
    }

    /// Builder method to set a snapshot response for a candidate
    pub fn with_snapshot(mut self, candidate: &Candidate, snapshot: MarketSnapshot) -> Self {
        self.responses
            .insert(Self::key(candidate), CannedSnapshot::Snapshot(snapshot));
        self
    }

    /// Builder method to make a candidate yield no usable record
    pub fn with_no_data(mut self, candidate: &Candidate) -> Self {
        self.responses
            .insert(Self::key(candidate), CannedSnapshot::NoData);
        self
    }

    /// Builder method to make a candidate's fetch fail at the transport level
    pub fn with_transport_failure(mut self, candidate: &Candidate, message: &str) -> Self {
        self.responses.insert(
            Self::key(candidate),
            CannedSnapshot::Transport(message.to_string()),
        );
        self
    }

    /// Candidate keys in the order they were fetched
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketDataPort for MockMarketData {
    async fn fetch_snapshot(
        &self,
        candidate: &Candidate,
    ) -> Result<Option<MarketSnapshot>, MarketDataError> {
        let key = Self::key(candidate);
        self.calls.lock().unwrap().push(key.clone());

        match self.responses.get(&key) {
            Some(CannedSnapshot::Snapshot(snapshot)) => Ok(Some(snapshot.clone())),
            Some(CannedSnapshot::NoData) | None => Ok(None),
            Some(CannedSnapshot::Transport(message)) => {
                Err(MarketDataError::Transport(message.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(symbol: &str, volume: f64) -> MarketSnapshot {
        MarketSnapshot {
            symbol: symbol.to_string(),
            address: "Addr".to_string(),
            volume_24h: volume,
            dex_id: "raydium".to_string(),
            price_usd: None,
        }
    }

    #[tokio::test]
    async fn test_mock_candidate_source_returns_list() {
        let source = MockCandidateSource::new()
            .with_candidates(vec![Candidate::new("solana", "MintA")]);

        let candidates = source.fetch_candidates().await.unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].token_address, "MintA");
    }

    #[tokio::test]
    async fn test_mock_candidate_source_empty_is_an_error() {
        let source = MockCandidateSource::new();
        let result = source.fetch_candidates().await;
        assert!(matches!(result, Err(CandidateSourceError::Empty)));
    }

    #[tokio::test]
    async fn test_mock_market_data_records_calls() {
        let candidate = Candidate::new("solana", "MintA");
        let mock = MockMarketData::new().with_snapshot(&candidate, snapshot("AAA", 10.0));

        let result = mock.fetch_snapshot(&candidate).await.unwrap();
        assert_eq!(result.unwrap().symbol, "AAA");
        assert_eq!(mock.get_calls(), vec!["solana:MintA".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_market_data_unconfigured_candidate_has_no_data() {
        let mock = MockMarketData::new();
        let result = mock
            .fetch_snapshot(&Candidate::new("base", "0xA1"))
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
