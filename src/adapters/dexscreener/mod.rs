//! DexScreener Adapter
//!
//! Implementation of the candidate source and market data ports against the
//! public DexScreener API: the token-boosts listing for discovery and the
//! per-token pairs endpoint for enrichment.

mod client;
mod types;

pub use client::{DexScreenerClient, DexScreenerConfig};
pub use types::{BaseToken, BoostEntry, PairData, VolumeStats};
