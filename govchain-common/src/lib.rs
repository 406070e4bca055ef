//! Shared data model for the GovChain governance dashboard.
//!
//! Proposals, users and vote receipts live here together with the error
//! type used across the workspace. Engine logic lives in `govchain-engine`.

pub mod env;
pub mod error;
pub mod utils;

pub use env::proposal::{NewProposal, Proposal};
pub use env::status::{ProposalStatus, UserRole, VoteChoice};
pub use env::user::User;
pub use env::vote_data::Vote;
pub use error::{GovError, Result};
