use std::fmt;

use serde::{Deserialize, Serialize};

/// A (chain, address) pair identifying a token to evaluate.
///
/// Candidates are produced by a candidate source and consumed once per
/// selection run; they carry no identity across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Chain identifier as reported by the source (e.g. "solana", "base")
    pub chain_id: String,
    /// Token contract or mint address on that chain
    pub token_address: String,
}

impl Candidate {
    pub fn new(chain_id: impl Into<String>, token_address: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            token_address: token_address.into(),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain_id, self.token_address)
    }
}
