use std::{collections::HashSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use govchain_common::{GovError, Proposal, ProposalStatus};

/// Keyword accepted by both filters to mean "no restriction".
pub const ALL: &str = "all";

/// Scale applied to the voters-per-proposal ratio in
/// [`AggregateStats::participation_rate`].
pub const PARTICIPATION_SCALE: f64 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProposalStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: ProposalStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = GovError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str(ALL),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s.to_string())
        })
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL),
            CategoryFilter::Only(category) => f.write_str(category),
        }
    }
}

/// Search box plus the two dropdowns of the proposal list.
///
/// The default value matches every proposal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProposalQuery {
    pub text: String,
    pub status: StatusFilter,
    pub category: CategoryFilter,
}

impl ProposalQuery {
    pub fn new(text: impl Into<String>, status: StatusFilter, category: CategoryFilter) -> Self {
        Self {
            text: text.into(),
            status,
            category,
        }
    }

    pub fn matches(&self, proposal: &Proposal) -> bool {
        self.matches_text(proposal)
            && self.status.matches(proposal.status)
            && self.category.matches(&proposal.category)
    }

    // Plain case-insensitive substring match on title or description.
    fn matches_text(&self, proposal: &Proposal) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        proposal.title.to_lowercase().contains(&needle)
            || proposal.description.to_lowercase().contains(&needle)
    }
}

/// Returns the proposals matching `query`, in their original order.
///
/// An empty result is not an error.
pub fn filter_proposals(all: &[Proposal], query: &ProposalQuery) -> Vec<Proposal> {
    let visible: Vec<Proposal> = all.iter().filter(|p| query.matches(p)).cloned().collect();
    tracing::trace!(
        total = all.len(),
        visible = visible.len(),
        text = %query.text,
        status = %query.status,
        category = %query.category,
        "proposals filtered"
    );
    visible
}

/// Dashboard header figures over the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_proposals: usize,
    pub active_proposals: usize,
    /// Distinct addresses across every proposal's voter list.
    pub total_voters: usize,
    /// `total_voters / total_proposals * 10`. Not a percentage of any
    /// eligible population, despite how it is displayed.
    pub participation_rate: f64,
}

impl AggregateStats {
    pub fn participation_display(&self) -> String {
        format!("{:.1}%", self.participation_rate)
    }
}

pub fn compute_aggregate_stats(all: &[Proposal]) -> AggregateStats {
    let active_proposals = all.iter().filter(|p| p.is_active()).count();
    let total_voters = all
        .iter()
        .flat_map(|p| p.voters.iter().map(String::as_str))
        .collect::<HashSet<&str>>()
        .len();

    let participation_rate = if all.is_empty() {
        0.0
    } else {
        (total_voters as f64 / all.len() as f64) * PARTICIPATION_SCALE
    };

    AggregateStats {
        total_proposals: all.len(),
        active_proposals,
        total_voters,
        participation_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use govchain_common::NewProposal;

    fn proposal(id: &str, title: &str, description: &str, status: ProposalStatus, category: &str) -> Proposal {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        let mut p = Proposal::from_form(NewProposal::new(title, description, category), "0xprop", id.to_string(), now);
        p.status = status;
        p
    }

    fn sample() -> Vec<Proposal> {
        vec![
            proposal("1", "Increase Block Rewards by 15%", "Raise mining rewards", ProposalStatus::Active, "protocol"),
            proposal("2", "Community Fund Allocation", "Allocate GOV tokens from treasury", ProposalStatus::Active, "treasury"),
            proposal("3", "Governance Parameter Update", "Update minimum quorum requirements", ProposalStatus::Completed, "governance"),
        ]
    }

    fn ids(proposals: &[Proposal]) -> Vec<&str> {
        proposals.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_identity_query_returns_everything_in_order() {
        let all = sample();
        assert_eq!(filter_proposals(&all, &ProposalQuery::default()), all);
    }

    #[test]
    fn test_text_matches_title_or_description_case_insensitively() {
        let all = sample();
        let by_title = ProposalQuery::new("BLOCK", StatusFilter::All, CategoryFilter::All);
        assert_eq!(ids(&filter_proposals(&all, &by_title)), vec!["1"]);

        let by_description = ProposalQuery::new("treasury", StatusFilter::All, CategoryFilter::All);
        assert_eq!(ids(&filter_proposals(&all, &by_description)), vec!["2"]);
    }

    #[test]
    fn test_text_is_substring_not_tokenized() {
        let all = sample();
        let query = ProposalQuery::new("rewards by", StatusFilter::All, CategoryFilter::All);
        assert_eq!(ids(&filter_proposals(&all, &query)), vec!["1"]);

        let out_of_order = ProposalQuery::new("by rewards", StatusFilter::All, CategoryFilter::All);
        assert!(filter_proposals(&all, &out_of_order).is_empty());
    }

    #[test]
    fn test_filters_compose() {
        let all = sample();
        let active = ProposalQuery::new("", StatusFilter::Only(ProposalStatus::Active), CategoryFilter::All);
        assert_eq!(ids(&filter_proposals(&all, &active)), vec!["1", "2"]);

        let active_treasury = ProposalQuery::new(
            "",
            StatusFilter::Only(ProposalStatus::Active),
            CategoryFilter::Only("treasury".to_string()),
        );
        assert_eq!(ids(&filter_proposals(&all, &active_treasury)), vec!["2"]);

        let none = ProposalQuery::new("rewards", StatusFilter::Only(ProposalStatus::Completed), CategoryFilter::All);
        assert!(filter_proposals(&all, &none).is_empty());
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "pending".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(ProposalStatus::Pending)
        );
        assert!("open".parse::<StatusFilter>().is_err());
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "technical".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only("technical".to_string())
        );
    }

    #[test]
    fn test_aggregate_with_no_voters() {
        let stats = compute_aggregate_stats(&sample());
        assert_eq!(stats.total_proposals, 3);
        assert_eq!(stats.active_proposals, 2);
        assert_eq!(stats.total_voters, 0);
        assert_eq!(stats.participation_rate, 0.0);
    }

    #[test]
    fn test_aggregate_counts_distinct_voters_across_proposals() {
        let mut all = sample();
        all[0].voters = vec!["0xA".to_string(), "0xB".to_string()];
        all[1].voters = vec!["0xB".to_string(), "0xC".to_string()];
        all[2].voters = vec!["0xA".to_string()];

        let stats = compute_aggregate_stats(&all);
        assert_eq!(stats.total_voters, 3);
        assert!((stats.participation_rate - 10.0).abs() < 1e-9);
        assert_eq!(stats.participation_display(), "10.0%");
    }

    #[test]
    fn test_aggregate_of_empty_collection() {
        let stats = compute_aggregate_stats(&[]);
        assert_eq!(stats.total_proposals, 0);
        assert_eq!(stats.participation_rate, 0.0);
    }
}
