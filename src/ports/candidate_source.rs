use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Candidate;

/// Candidate source error type
#[derive(Debug, Error)]
pub enum CandidateSourceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("no boosted token candidates available")]
    Empty,
}

/// Port for discovering the current set of boosted token candidates.
#[async_trait]
pub trait CandidateSourcePort: Send + Sync {
    /// Fetch the current candidate set, preserving source ordering.
    ///
    /// An absent or empty candidate list is reported as
    /// [`CandidateSourceError::Empty`], never as a silent empty Vec: the
    /// caller must treat it as a terminal failure of the run.
    async fn fetch_candidates(&self) -> Result<Vec<Candidate>, CandidateSourceError>;
}
