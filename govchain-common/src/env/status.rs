use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::GovError;

/// Lifecycle stage of a proposal.
///
/// Only `Active` proposals accept votes. Transitions between stages are
/// made by the caller; nothing in the engine advances a status on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Draft,
    Pending,
    Active,
    Completed,
    Failed,
}

impl ProposalStatus {
    pub const ALL: [ProposalStatus; 5] = [
        ProposalStatus::Draft,
        ProposalStatus::Pending,
        ProposalStatus::Active,
        ProposalStatus::Completed,
        ProposalStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Draft => "draft",
            ProposalStatus::Pending => "pending",
            ProposalStatus::Active => "active",
            ProposalStatus::Completed => "completed",
            ProposalStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProposalStatus {
    type Err = GovError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProposalStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| GovError::InvalidStatus(s.to_string()))
    }
}

/// Simulated identity of the dashboard user. Switching roles is not an
/// authorization check against anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Proposer,
    Voter,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Proposer => "proposer",
            UserRole::Voter => "voter",
        }
    }

    /// Admins and proposers may submit proposals; voters may not.
    pub fn can_propose(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Proposer)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = GovError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "proposer" => Ok(UserRole::Proposer),
            "voter" => Ok(UserRole::Voter),
            other => Err(GovError::InvalidRole(other.to_string())),
        }
    }
}

/// Side taken by a vote. There is no abstain option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    For,
    Against,
}

impl VoteChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteChoice::For => "for",
            VoteChoice::Against => "against",
        }
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteChoice {
    type Err = GovError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "for" => Ok(VoteChoice::For),
            "against" => Ok(VoteChoice::Against),
            other => Err(GovError::InvalidChoice(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_and_display() {
        for status in ProposalStatus::ALL {
            let parsed: ProposalStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!(matches!(
            "Active".parse::<ProposalStatus>(),
            Err(GovError::InvalidStatus(_))
        ));
    }

    #[test]
    fn test_status_serde_is_lowercase() {
        let json = serde_json::to_string(&ProposalStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        let back: ProposalStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(back, ProposalStatus::Pending);
    }

    #[test]
    fn test_role_rejects_unknown() {
        assert_eq!("proposer".parse::<UserRole>().unwrap(), UserRole::Proposer);
        assert!(matches!("root".parse::<UserRole>(), Err(GovError::InvalidRole(_))));
    }

    #[test]
    fn test_only_admin_and_proposer_can_propose() {
        assert!(UserRole::Admin.can_propose());
        assert!(UserRole::Proposer.can_propose());
        assert!(!UserRole::Voter.can_propose());
    }

    #[test]
    fn test_choice_rejects_abstain() {
        assert_eq!("against".parse::<VoteChoice>().unwrap(), VoteChoice::Against);
        assert!(matches!(
            "abstain".parse::<VoteChoice>(),
            Err(GovError::InvalidChoice(_))
        ));
    }
}
