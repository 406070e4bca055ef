use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    env::status::ProposalStatus,
    error::{GovError, Result},
};

pub const DEFAULT_QUORUM: u64 = 10;
pub const DEFAULT_DURATION_DAYS: u32 = 7;
pub const MAX_DURATION_DAYS: u32 = 30;

/// A governance proposal and its running tally.
///
/// `total_votes` always equals `votes_for + votes_against`, and an address
/// appears in `voters` at most once. Both are maintained by the tally engine;
/// code outside it should treat the tally fields as read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    /// Unique identifier, assigned at creation.
    pub id: String,

    pub title: String,

    pub description: String,

    /// Address of the account that submitted the proposal.
    pub proposer: String,

    pub status: ProposalStatus,

    pub created_at: DateTime<Utc>,

    /// End of the voting window.
    pub end_date: DateTime<Utc>,

    /// Minimum total voting power for the outcome to count.
    pub quorum_required: u64,

    #[serde(default)]
    pub votes_for: u64,

    #[serde(default)]
    pub votes_against: u64,

    #[serde(default)]
    pub total_votes: u64,

    /// Addresses that have voted, in the order their votes were accepted.
    #[serde(default)]
    pub voters: Vec<String>,

    /// Free-form tag such as `treasury` or `protocol`.
    pub category: String,
}

impl Proposal {
    /// Builds a fresh proposal from a submitted creation form.
    ///
    /// The proposal starts `Active` with zeroed tallies and no voters. The
    /// form is not validated here; see [`NewProposal::validate`].
    pub fn from_form(form: NewProposal, proposer: &str, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: form.title,
            description: form.description,
            proposer: proposer.to_string(),
            status: ProposalStatus::Active,
            created_at: now,
            end_date: now + Duration::days(i64::from(form.duration_days)),
            quorum_required: form.quorum_required,
            votes_for: 0,
            votes_against: 0,
            total_votes: 0,
            voters: Vec::new(),
            category: form.category,
        }
    }

    pub fn has_voted(&self, address: &str) -> bool {
        self.voters.iter().any(|voter| voter == address)
    }

    pub fn is_active(&self) -> bool {
        self.status == ProposalStatus::Active
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Input of the "create proposal" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProposal {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default = "default_quorum")]
    pub quorum_required: u64,
    #[serde(default = "default_duration")]
    pub duration_days: u32,
}

fn default_quorum() -> u64 {
    DEFAULT_QUORUM
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_DAYS
}

impl NewProposal {
    pub fn new(title: impl Into<String>, description: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
            quorum_required: DEFAULT_QUORUM,
            duration_days: DEFAULT_DURATION_DAYS,
        }
    }

    /// Checks the form the same way the creation dialog does:
    /// every text field is required, quorum is at least 1 and the
    /// duration lies within 1..=30 days.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(GovError::InvalidProposal("title is required".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(GovError::InvalidProposal("description is required".to_string()));
        }
        if self.category.trim().is_empty() {
            return Err(GovError::InvalidProposal("category is required".to_string()));
        }
        if self.quorum_required == 0 {
            return Err(GovError::InvalidProposal(
                "quorum must be at least 1".to_string(),
            ));
        }
        if !(1..=MAX_DURATION_DAYS).contains(&self.duration_days) {
            return Err(GovError::InvalidProposal(format!(
                "duration must be between 1 and {} days, got {}",
                MAX_DURATION_DAYS, self.duration_days
            )));
        }
        Ok(())
    }
}
