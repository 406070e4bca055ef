use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::debug;

use govchain_common::{utils::time, Result};
use govchain_engine::Governance;

use crate::{
    cli::{split_words, ShellCommand, ShellLine},
    view,
};

pub const PROMPT: &str = "govchain> ";

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs the line-oriented session until `quit` or end of input.
///
/// Rejected actions (double votes, bad forms, unknown ids) are reported on
/// `out` and the session continues. Only I/O failures end it early.
pub fn run<R: BufRead, W: Write>(gov: &mut Governance, input: R, out: &mut W) -> Result<()> {
    writeln!(out, "{}", view::render_user(gov.user()))?;
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let words = split_words(&line);
        if !words.is_empty() {
            match ShellLine::try_parse_from(words) {
                Ok(parsed) => {
                    if execute(gov, parsed.command, out, time::now())? == Flow::Quit {
                        return Ok(());
                    }
                }
                Err(e) => write!(out, "{}", e)?,
            }
        }
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

/// Applies one command to the session and prints its result.
pub fn execute<W: Write>(gov: &mut Governance, command: ShellCommand, out: &mut W, now: DateTime<Utc>) -> Result<Flow> {
    debug!("shell command: {:?}", command);
    match command {
        ShellCommand::List(filters) => {
            let visible = gov.proposals(&filters.to_query())?;
            writeln!(out, "{}", view::render_list(&visible, gov.user(), now))?;
        }
        ShellCommand::Stats => {
            let stats = gov.stats()?;
            writeln!(out, "{}", view::render_stats(&stats))?;
        }
        ShellCommand::Show { id } => match gov.details(&id) {
            Ok((proposal, note)) => {
                writeln!(out, "{}", note)?;
                writeln!(out, "{}", view::render_card(&proposal, gov.user(), now))?;
            }
            Err(e) => writeln!(out, "Error: {}", e)?,
        },
        ShellCommand::Vote { id, choice } => match gov.vote_at(&id, choice, now) {
            Ok((_, note)) => writeln!(out, "{}", note)?,
            Err(e) => writeln!(out, "Error: {}", e)?,
        },
        ShellCommand::Create(args) => match gov.create_proposal_at(args.into(), now) {
            Ok((proposal, note)) => {
                writeln!(out, "{}", note)?;
                writeln!(out, "{}", view::render_card(&proposal, gov.user(), now))?;
            }
            Err(e) => writeln!(out, "Error: {}", e)?,
        },
        ShellCommand::Role { role } => {
            let note = gov.switch_role(role);
            writeln!(out, "{}", note)?;
        }
        ShellCommand::Whoami => writeln!(out, "{}", view::render_user(gov.user()))?,
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
