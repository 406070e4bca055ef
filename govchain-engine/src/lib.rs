//! Tally and query engine for the GovChain dashboard.
//!
//! The engine functions (`tally`, `stats`, `query`) are pure: they take
//! values and return new ones. State lives with the caller, in a
//! [`store::ProposalStore`] owned by a [`governance::Governance`] session.

pub mod governance;
pub mod query;
pub mod stats;
pub mod store;
pub mod tally;

pub use governance::{Governance, GovernanceConfig, Notification};
pub use query::{compute_aggregate_stats, filter_proposals, AggregateStats, CategoryFilter, ProposalQuery, StatusFilter};
pub use stats::{can_vote, compute_tally_stats, days_left, voting_ended, TallyStats};
pub use store::ProposalStore;
pub use tally::{cast_vote, VoteOutcome};
