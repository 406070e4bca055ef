use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::env::status::VoteChoice;

/// Receipt of an accepted vote.
///
/// Votes are not stored as entities; the proposal's tally and voter list
/// are the only durable effect. This record is handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub proposal_id: String,
    pub voter: String,
    pub choice: VoteChoice,
    pub voting_power: u64,
    pub timestamp: DateTime<Utc>,
}

impl Vote {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
