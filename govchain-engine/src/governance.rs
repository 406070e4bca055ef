use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use govchain_common::{
    utils::time, GovError, NewProposal, Proposal, Result, User, UserRole, Vote, VoteChoice,
};

use crate::{
    query::{compute_aggregate_stats, filter_proposals, AggregateStats, ProposalQuery},
    stats::{self, compute_tally_stats, TallyStats},
    store::ProposalStore,
    tally::{cast_vote, VoteOutcome},
};

/// Behaviour switches for a [`Governance`] session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceConfig {
    /// Reject votes once a proposal's end date has passed, even if its
    /// status is still `active`.
    #[serde(default)]
    pub enforce_end_date: bool,
}

/// Short user-facing message produced by a session action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    fn new(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
        }
    }

    pub fn role_updated(role: UserRole) -> Self {
        Self::new("Role Updated", format!("You are now acting as a {}", role))
    }

    pub fn proposal_created() -> Self {
        Self::new(
            "Proposal Created",
            "Your proposal has been submitted successfully!".to_string(),
        )
    }

    pub fn vote_recorded(choice: VoteChoice) -> Self {
        let side = match choice {
            VoteChoice::For => "in favor",
            VoteChoice::Against => "against",
        };
        Self::new("Vote Recorded", format!("Your vote {} has been recorded!", side))
    }

    pub fn proposal_details(title: &str) -> Self {
        Self::new("Proposal Details", format!("Viewing details for: {}", title))
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// A single-user dashboard session.
///
/// Holds the authoritative proposal collection and the current identity,
/// and routes every action through the pure engine functions. This is
/// the layer that decides whether a vote is allowed at all.
#[derive(Debug)]
pub struct Governance {
    store: ProposalStore,
    user: User,
    config: GovernanceConfig,
}

impl Governance {
    pub fn new(user: User, proposals: Vec<Proposal>, config: GovernanceConfig) -> Self {
        info!(
            "📋 Governance session started for {} ({}) with {} proposals",
            user.address,
            user.role,
            proposals.len()
        );
        Self {
            store: ProposalStore::new(proposals),
            user,
            config,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn store(&self) -> &ProposalStore {
        &self.store
    }

    pub fn config(&self) -> &GovernanceConfig {
        &self.config
    }

    pub fn switch_role(&mut self, role: UserRole) -> Notification {
        info!("👤 Role changed: {} -> {}", self.user.role, role);
        self.user = self.user.with_role(role);
        Notification::role_updated(role)
    }

    pub fn create_proposal(&self, form: NewProposal) -> Result<(Proposal, Notification)> {
        self.create_proposal_at(form, time::now())
    }

    /// Validates the form, assigns a fresh id and puts the proposal at the
    /// top of the list.
    pub fn create_proposal_at(&self, form: NewProposal, now: DateTime<Utc>) -> Result<(Proposal, Notification)> {
        if !self.user.role.can_propose() {
            return Err(GovError::Unauthorized(format!(
                "role {} cannot create proposals",
                self.user.role
            )));
        }
        form.validate()?;

        let id = Uuid::new_v4().to_string();
        let proposal = Proposal::from_form(form, &self.user.address, id, now);
        self.store.prepend(proposal.clone())?;

        info!(
            "✅ Proposal created: {} \"{}\" [{}], quorum {}, ends {}",
            proposal.id, proposal.title, proposal.category, proposal.quorum_required, proposal.end_date
        );
        Ok((proposal, Notification::proposal_created()))
    }

    pub fn vote(&self, proposal_id: &str, choice: VoteChoice) -> Result<(Vote, Notification)> {
        self.vote_at(proposal_id, choice, time::now())
    }

    /// Casts the current user's vote.
    ///
    /// Rejected when the proposal is not active, when its end date has
    /// passed and `enforce_end_date` is set, or when this address already
    /// voted. On rejection the collection is unchanged.
    pub fn vote_at(&self, proposal_id: &str, choice: VoteChoice, now: DateTime<Utc>) -> Result<(Vote, Notification)> {
        let voter = self.user.address.as_str();
        let voting_power = self.user.voting_power;
        let enforce_end_date = self.config.enforce_end_date;

        let result = self.store.update(proposal_id, |proposal| {
            if !proposal.is_active() {
                return Err(GovError::VotingClosed {
                    proposal_id: proposal.id.clone(),
                    status: proposal.status,
                });
            }
            if enforce_end_date && stats::voting_ended(proposal, now) {
                return Err(GovError::VotingEnded {
                    proposal_id: proposal.id.clone(),
                });
            }
            match cast_vote(proposal, voter, voting_power, choice) {
                VoteOutcome::Recorded(updated) => Ok((updated, ())),
                VoteOutcome::Unchanged => Err(GovError::AlreadyVoted {
                    proposal_id: proposal.id.clone(),
                    voter: voter.to_string(),
                }),
                VoteOutcome::Overflow => Err(GovError::TallyOverflow {
                    proposal_id: proposal.id.clone(),
                }),
            }
        });

        if let Err(e) = result {
            warn!("❌ Vote on {} rejected: {}", proposal_id, e);
            return Err(e);
        }

        info!(
            "🗳️ Vote recorded on {}: {} with power {} from {}",
            proposal_id, choice, voting_power, voter
        );
        let receipt = Vote {
            proposal_id: proposal_id.to_string(),
            voter: voter.to_string(),
            choice,
            voting_power,
            timestamp: now,
        };
        Ok((receipt, Notification::vote_recorded(choice)))
    }

    /// Whether the vote buttons should be offered for this proposal.
    pub fn can_vote(&self, proposal_id: &str) -> Result<bool> {
        let proposal = self.get(proposal_id)?;
        Ok(stats::can_vote(&proposal, &self.user))
    }

    pub fn proposals(&self, query: &ProposalQuery) -> Result<Vec<Proposal>> {
        let all = self.store.get()?;
        Ok(filter_proposals(&all, query))
    }

    pub fn stats(&self) -> Result<AggregateStats> {
        let all = self.store.get()?;
        Ok(compute_aggregate_stats(&all))
    }

    pub fn tally(&self, proposal_id: &str) -> Result<TallyStats> {
        let proposal = self.get(proposal_id)?;
        Ok(compute_tally_stats(&proposal))
    }

    pub fn details(&self, proposal_id: &str) -> Result<(Proposal, Notification)> {
        let proposal = self.get(proposal_id)?;
        debug!("Viewing proposal {}", proposal.id);
        let notification = Notification::proposal_details(&proposal.title);
        Ok((proposal, notification))
    }

    fn get(&self, proposal_id: &str) -> Result<Proposal> {
        self.store
            .find(proposal_id)?
            .ok_or_else(|| GovError::ProposalNotFound(proposal_id.to_string()))
    }
}
