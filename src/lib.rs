//! Boostscan - DexScreener Top-Volume Token Scanner Library
//!
//! Finds the token with the highest 24h trading volume among DexScreener's
//! boosted candidates.
//!
//! # Modules
//!
//! - `domain`: Core selection logic (Candidate, MarketSnapshot, SelectionState)
//! - `ports`: Trait abstractions (CandidateSourcePort, MarketDataPort)
//! - `adapters`: External implementations (DexScreener, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Scan pipeline and capability payload

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;
pub mod application;
