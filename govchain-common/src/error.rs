// src/error.rs
use thiserror::Error;

use crate::env::status::ProposalStatus;

#[derive(Debug, Error)]
pub enum GovError {
    #[error("Address {voter} has already voted on proposal {proposal_id}")]
    AlreadyVoted { proposal_id: String, voter: String },

    #[error("Proposal {proposal_id} is not accepting votes (status: {status})")]
    VotingClosed {
        proposal_id: String,
        status: ProposalStatus,
    },

    #[error("Voting period for proposal {proposal_id} has ended")]
    VotingEnded { proposal_id: String },

    #[error("Vote on proposal {proposal_id} would overflow its tally")]
    TallyOverflow { proposal_id: String },

    #[error("Proposal not found: {0}")]
    ProposalNotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid proposal: {0}")]
    InvalidProposal(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid vote choice: {0}")]
    InvalidChoice(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GovError>;
