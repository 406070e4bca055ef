use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use govchain_common::{utils::time::days_between, Proposal, User};

/// Display figures for a single proposal card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TallyStats {
    /// Share of voting power in favour, 0..=100. Exactly 0 with no votes.
    pub for_percentage: f64,
    /// Quorum progress clamped to 100 for display.
    pub quorum_progress: f64,
    /// Quorum progress before clamping; above 100 when quorum was exceeded.
    pub quorum_progress_raw: f64,
    pub total_votes: u64,
}

impl TallyStats {
    pub fn quorum_reached(&self) -> bool {
        self.quorum_progress_raw >= 100.0
    }
}

/// Derives percentages from a proposal's tally.
///
/// `total_votes` is recomputed from the two sides rather than read from the
/// stored field.
pub fn compute_tally_stats(proposal: &Proposal) -> TallyStats {
    let total_votes = proposal.votes_for.saturating_add(proposal.votes_against);

    let for_percentage = if total_votes > 0 {
        (proposal.votes_for as f64 / total_votes as f64) * 100.0
    } else {
        0.0
    };

    let quorum_progress_raw = if proposal.quorum_required > 0 {
        (total_votes as f64 / proposal.quorum_required as f64) * 100.0
    } else if total_votes > 0 {
        100.0
    } else {
        0.0
    };

    TallyStats {
        for_percentage,
        quorum_progress: quorum_progress_raw.min(100.0),
        quorum_progress_raw,
        total_votes,
    }
}

/// Days remaining until `end_date`, rounded up. Zero or less once voting has ended.
pub fn days_left(proposal: &Proposal, now: DateTime<Utc>) -> i64 {
    days_between(now, proposal.end_date)
}

pub fn voting_ended(proposal: &Proposal, now: DateTime<Utc>) -> bool {
    days_left(proposal, now) <= 0
}

/// True iff the proposal is active and `user` has not voted on it yet.
///
/// The end date is not consulted; see [`voting_ended`].
pub fn can_vote(proposal: &Proposal, user: &User) -> bool {
    proposal.is_active() && !proposal.has_voted(&user.address)
}
