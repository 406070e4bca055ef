//! Text rendering of dashboard cards for the terminal.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use govchain_common::{Proposal, ProposalStatus, User};
use govchain_engine::{can_vote, compute_tally_stats, days_left, AggregateStats};

pub const EMPTY_LIST: &str = "No proposals found\nTry adjusting your search or filters";

/// Known proposer handles; anything else shows as `Anonymous`.
const PROPOSER_NAMES: [(&str, &str); 8] = [
    ("0xabcdef1234567890", "Alice42"),
    ("0x9876543210fedcba", "Bob_dev"),
    ("0x5678901234abcdef", "Charlie_gov"),
    ("0x1111222233334444", "Diana_eco"),
    ("0x5555666677778888", "Eve_proto"),
    ("0x9999aaaabbbbcccc", "Frank_dao"),
    ("0xddddeeeeffffaaaa", "Grace_sys"),
    ("0xbbbbccccddddeeee", "Henry_net"),
];

pub fn proposer_name(address: &str) -> &'static str {
    PROPOSER_NAMES
        .iter()
        .find(|(known, _)| *known == address)
        .map(|(_, name)| *name)
        .unwrap_or("Anonymous")
}

pub fn status_label(status: ProposalStatus) -> &'static str {
    match status {
        ProposalStatus::Draft => "Draft",
        ProposalStatus::Pending => "Pending",
        ProposalStatus::Active => "Active",
        ProposalStatus::Completed => "Completed",
        ProposalStatus::Failed => "Failed",
    }
}

/// First `n` characters followed by an ellipsis.
pub fn short_address(address: &str, n: usize) -> String {
    let head: String = address.chars().take(n).collect();
    format!("{}...", head)
}

pub fn render_card(proposal: &Proposal, user: &User, now: DateTime<Utc>) -> String {
    let stats = compute_tally_stats(proposal);
    let remaining = days_left(proposal, now);

    let mut out = String::new();
    let _ = writeln!(out, "[{}] {} ({})", proposal.id, proposal.title, status_label(proposal.status));
    let _ = writeln!(out, "    {}", proposal.description);
    let _ = writeln!(
        out,
        "    by {} {} | {}",
        proposer_name(&proposal.proposer),
        short_address(&proposal.proposer, 8),
        proposal.category
    );
    let _ = writeln!(
        out,
        "    For {} / Against {} | {:.1}% approval | {} total votes",
        proposal.votes_for, proposal.votes_against, stats.for_percentage, stats.total_votes
    );
    let _ = writeln!(
        out,
        "    Quorum {:.1}% ({} votes required)",
        stats.quorum_progress, proposal.quorum_required
    );
    if remaining > 0 {
        let _ = writeln!(out, "    {} days left", remaining);
    } else {
        let _ = writeln!(out, "    Voting ended");
    }
    if can_vote(proposal, user) {
        let _ = write!(out, "    > vote {} for | vote {} against", proposal.id, proposal.id);
    } else if proposal.has_voted(&user.address) {
        let _ = write!(out, "    You voted on this proposal");
    } else {
        let _ = write!(out, "    Voting closed");
    }
    out
}

pub fn render_list(proposals: &[Proposal], user: &User, now: DateTime<Utc>) -> String {
    if proposals.is_empty() {
        return EMPTY_LIST.to_string();
    }
    proposals
        .iter()
        .map(|p| render_card(p, user, now))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_stats(stats: &AggregateStats) -> String {
    format!(
        "Total Proposals: {}\nActive Proposals: {}\nTotal Voters: {}\nParticipation Rate: {}",
        stats.total_proposals,
        stats.active_proposals,
        stats.total_voters,
        stats.participation_display()
    )
}

pub fn render_user(user: &User) -> String {
    format!(
        "{} | {} GOV | voting power {} | {}",
        short_address(&user.address, 8),
        user.token_balance,
        user.voting_power,
        user.role
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use govchain_common::UserRole;

    use crate::seed::demo_proposals;

    fn during_vote() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_proposer_names() {
        assert_eq!(proposer_name("0xabcdef1234567890"), "Alice42");
        assert_eq!(proposer_name("0xdeadbeef"), "Anonymous");
    }

    #[test]
    fn test_card_shows_tally_and_time_left() {
        let user = User::new("1", "0x1234567890abcdef", UserRole::Voter, 1500);
        let card = render_card(&demo_proposals()[0], &user, during_vote());

        assert!(card.starts_with("[1] Increase Block Rewards by 15% (Active)"));
        assert!(card.contains("by Alice42 0xabcdef... | protocol"));
        assert!(card.contains("For 18 / Against 7 | 72.0% approval | 25 total votes"));
        assert!(card.contains("Quorum 100.0% (25 votes required)"));
        assert!(card.contains("6 days left"));
        assert!(card.contains("> vote 1 for"));
    }

    #[test]
    fn test_completed_card_offers_no_vote() {
        let user = User::new("1", "0x1234567890abcdef", UserRole::Voter, 1500);
        let card = render_card(&demo_proposals()[2], &user, during_vote());
        assert!(card.contains("Voting ended"));
        assert!(card.contains("Voting closed"));
    }

    #[test]
    fn test_empty_list_message() {
        let user = User::new("1", "0x1", UserRole::Voter, 1);
        assert_eq!(render_list(&[], &user, during_vote()), EMPTY_LIST);
    }
}
