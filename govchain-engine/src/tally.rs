use govchain_common::{Proposal, VoteChoice};

/// Result of [`cast_vote`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The vote was counted; holds the updated proposal.
    Recorded(Proposal),
    /// The address had already voted. Nothing changed.
    Unchanged,
    /// Counting the vote would overflow the tally. Nothing changed.
    Overflow,
}

impl VoteOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, VoteOutcome::Recorded(_))
    }

    /// The updated proposal, or `original` when the vote was ignored.
    pub fn into_proposal_or(self, original: &Proposal) -> Proposal {
        match self {
            VoteOutcome::Recorded(updated) => updated,
            VoteOutcome::Unchanged | VoteOutcome::Overflow => original.clone(),
        }
    }
}

/// Applies one vote to a proposal, returning a new value.
///
/// An address votes at most once per proposal: a second call with the same
/// `voter` yields [`VoteOutcome::Unchanged`] regardless of weight or choice.
/// A vote that would push either side or the total past `u64::MAX` yields
/// [`VoteOutcome::Overflow`] and is not counted.
/// Status and end date are not checked here; gate with
/// [`crate::stats::can_vote`] first.
pub fn cast_vote(proposal: &Proposal, voter: &str, voting_power: u64, choice: VoteChoice) -> VoteOutcome {
    if proposal.has_voted(voter) {
        tracing::debug!(
            proposal = %proposal.id,
            voter,
            "duplicate vote ignored"
        );
        return VoteOutcome::Unchanged;
    }

    let (votes_for, votes_against) = match choice {
        VoteChoice::For => (proposal.votes_for.checked_add(voting_power), Some(proposal.votes_against)),
        VoteChoice::Against => (Some(proposal.votes_for), proposal.votes_against.checked_add(voting_power)),
    };
    // total is recomputed, never incremented
    let tally = votes_for
        .zip(votes_against)
        .and_then(|(f, a)| f.checked_add(a).map(|total| (f, a, total)));
    let Some((votes_for, votes_against, total_votes)) = tally else {
        tracing::warn!(
            proposal = %proposal.id,
            voter,
            voting_power,
            "vote refused: tally would overflow"
        );
        return VoteOutcome::Overflow;
    };

    let mut updated = proposal.clone();
    updated.voters.push(voter.to_string());
    updated.votes_for = votes_for;
    updated.votes_against = votes_against;
    updated.total_votes = total_votes;

    tracing::debug!(
        proposal = %updated.id,
        voter,
        %choice,
        voting_power,
        votes_for = updated.votes_for,
        votes_against = updated.votes_against,
        "vote tallied"
    );

    VoteOutcome::Recorded(updated)
}
