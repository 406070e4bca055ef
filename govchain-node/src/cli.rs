use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use govchain_common::{NewProposal, UserRole, VoteChoice};
use govchain_engine::{CategoryFilter, ProposalQuery, StatusFilter};

#[derive(Parser)]
#[command(name = "govchain")]
#[command(about = "GovChain governance dashboard (in-memory)")]
pub struct Cli {
    /// Path to the JSON config; created with defaults when missing
    #[arg(short, long, value_name = "FILE", default_value = "govchain.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List proposals matching the filters
    List(FilterArgs),
    /// Print dashboard statistics
    Stats,
    /// Start an interactive session on stdin
    Shell,
}

/// Search box and dropdown filters.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text matched against title and description
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// draft, pending, active, completed, failed or all
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// Category tag or all
    #[arg(long, default_value = "all")]
    pub category: CategoryFilter,
}

impl FilterArgs {
    pub fn to_query(&self) -> ProposalQuery {
        ProposalQuery::new(self.search.clone(), self.status, self.category.clone())
    }
}

/// One line typed into the interactive shell.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// List proposals matching the filters
    List(FilterArgs),
    /// Dashboard statistics
    Stats,
    /// Show one proposal
    Show { id: String },
    /// Vote for or against an active proposal
    Vote { id: String, choice: VoteChoice },
    /// Submit a new proposal (admin and proposer roles)
    Create(CreateArgs),
    /// Act as admin, proposer or voter
    Role { role: UserRole },
    /// Print the current identity
    Whoami,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub category: String,

    #[arg(long, default_value_t = govchain_common::env::proposal::DEFAULT_QUORUM)]
    pub quorum: u64,

    #[arg(long, default_value_t = govchain_common::env::proposal::DEFAULT_DURATION_DAYS)]
    pub duration_days: u32,
}

impl From<CreateArgs> for NewProposal {
    fn from(args: CreateArgs) -> Self {
        NewProposal {
            title: args.title,
            description: args.description,
            category: args.category,
            quorum_required: args.quorum,
            duration_days: args.duration_days,
        }
    }
}

/// Splits a shell line into words. Double quotes group words; there is
/// no escaping.
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    words.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        words.push(current);
    }
    words
}
