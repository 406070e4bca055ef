//! Demo proposals loaded when `seed_demo_data` is on.

use chrono::{DateTime, TimeZone, Utc};

use govchain_common::{Proposal, ProposalStatus};

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn seeded(
    id: &str,
    title: &str,
    description: &str,
    proposer: &str,
    status: ProposalStatus,
    window: (DateTime<Utc>, DateTime<Utc>),
    quorum_required: u64,
    votes: (u64, u64),
    category: &str,
) -> Proposal {
    let (votes_for, votes_against) = votes;
    Proposal {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        proposer: proposer.to_string(),
        status,
        created_at: window.0,
        end_date: window.1,
        quorum_required,
        votes_for,
        votes_against,
        total_votes: votes_for + votes_against,
        voters: Vec::new(),
        category: category.to_string(),
    }
}

pub fn demo_proposals() -> Vec<Proposal> {
    vec![
        seeded(
            "1",
            "Increase Block Rewards by 15%",
            "Proposal to increase mining rewards to incentivize network security and participation during the current market conditions.",
            "0xabcdef1234567890",
            ProposalStatus::Active,
            (day(2024, 1, 15), day(2024, 1, 22)),
            25,
            (18, 7),
            "protocol",
        ),
        seeded(
            "2",
            "Community Fund Allocation for Development",
            "Allocate 100,000 GOV tokens from treasury to fund ecosystem development and partnerships.",
            "0x9876543210fedcba",
            ProposalStatus::Active,
            (day(2024, 1, 10), day(2024, 1, 20)),
            30,
            (22, 3),
            "treasury",
        ),
        seeded(
            "3",
            "Governance Parameter Update",
            "Update minimum quorum requirements and extend voting periods to improve participation.",
            "0x5678901234abcdef",
            ProposalStatus::Completed,
            (day(2024, 1, 5), day(2024, 1, 12)),
            20,
            (28, 5),
            "governance",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use govchain_engine::compute_aggregate_stats;

    #[test]
    fn test_demo_data_is_consistent() {
        let all = demo_proposals();
        for p in &all {
            assert_eq!(p.total_votes, p.votes_for + p.votes_against);
            assert!(p.quorum_required > 0);
            assert!(p.end_date > p.created_at);
        }

        let stats = compute_aggregate_stats(&all);
        assert_eq!(stats.total_proposals, 3);
        assert_eq!(stats.active_proposals, 2);
        assert_eq!(stats.total_voters, 0);
    }
}
