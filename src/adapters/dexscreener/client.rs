//! DexScreener API Client
//!
//! HTTP client for the public DexScreener API. Serves the boosted-token
//! discovery endpoint and the per-token pairs endpoint behind the candidate
//! source and market data ports. Requests are issued one at a time with no
//! retries; failures surface to the caller as port errors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::types::{BoostEntry, PairData};
use crate::domain::{Candidate, MarketSnapshot};
use crate::ports::candidate_source::{CandidateSourceError, CandidateSourcePort};
use crate::ports::market_data::{MarketDataError, MarketDataPort};

/// DexScreener client configuration
#[derive(Debug, Clone)]
pub struct DexScreenerConfig {
    /// Base URL for the DexScreener API
    pub api_base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for DexScreenerConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.dexscreener.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// DexScreener API client
#[derive(Debug, Clone)]
pub struct DexScreenerClient {
    config: DexScreenerConfig,
    http: Client,
}

impl DexScreenerClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_config(DexScreenerConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: DexScreenerConfig) -> Result<Self, MarketDataError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                MarketDataError::Transport(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, http })
    }

    /// Fetch the current top boosted tokens, in source order.
    pub async fn fetch_boosted_tokens(&self) -> Result<Vec<BoostEntry>, CandidateSourceError> {
        let url = format!("{}/token-boosts/top/v1", self.config.api_base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| CandidateSourceError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CandidateSourceError::Transport(format!(
                "boosts endpoint returned status {}",
                response.status()
            )));
        }

        response
            .json::<Vec<BoostEntry>>()
            .await
            .map_err(|e| {
                CandidateSourceError::Transport(format!("Failed to parse boosts response: {}", e))
            })
    }

    /// Fetch the pair records for one token.
    pub async fn fetch_pairs(&self, candidate: &Candidate) -> Result<Vec<PairData>, MarketDataError> {
        let url = format!(
            "{}/tokens/v1/{}/{}",
            self.config.api_base_url, candidate.chain_id, candidate.token_address
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| MarketDataError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MarketDataError::Transport(format!(
                "tokens endpoint returned status {}",
                response.status()
            )));
        }

        response
            .json::<Vec<PairData>>()
            .await
            .map_err(|e| MarketDataError::Parse(e.to_string()))
    }

    /// Get the configured API base URL
    pub fn api_base_url(&self) -> &str {
        &self.config.api_base_url
    }
}

#[async_trait]
impl CandidateSourcePort for DexScreenerClient {
    async fn fetch_candidates(&self) -> Result<Vec<Candidate>, CandidateSourceError> {
        let entries = self.fetch_boosted_tokens().await?;

        if entries.is_empty() {
            return Err(CandidateSourceError::Empty);
        }

        Ok(entries
            .into_iter()
            .map(|entry| Candidate::new(entry.chain_id, entry.token_address))
            .collect())
    }
}

#[async_trait]
impl MarketDataPort for DexScreenerClient {
    async fn fetch_snapshot(
        &self,
        candidate: &Candidate,
    ) -> Result<Option<MarketSnapshot>, MarketDataError> {
        let pairs = self.fetch_pairs(candidate).await?;

        // The first pair record is the canonical one for the token
        Ok(pairs.into_iter().next().map(PairData::into_snapshot))
    }
}
