//! Ports Layer - Trait definitions for external dependencies
//!
//! This module defines the interfaces (ports) that adapters must implement.
//! Following hexagonal architecture, these traits abstract:
//! - Candidate discovery (boosted token listings)
//! - Market data enrichment (per-token volume, price, dex)

pub mod candidate_source;
pub mod market_data;
pub mod mocks;

pub use candidate_source::{CandidateSourceError, CandidateSourcePort};
pub use market_data::{MarketDataError, MarketDataPort};
