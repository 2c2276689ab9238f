//! Interactive session loop.
//!
//! Each input line is split into words and parsed with clap, so the shell
//! grammar gets the same help and error output as the binary itself.

use std::io::{BufRead, IsTerminal, Write};

use anyhow::Result;
use apptcal_core::clock::{Clock, SystemClock};
use apptcal_core::config::SchedulerConfig;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::commands;
use crate::commands::book::BookArgs;
use crate::render::Render;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Show a month: YYYY-MM, "next", "prev" or "today" (default: the current one)
    Month {
        month: Option<String>,

        #[arg(long)]
        search: Option<String>,
    },
    /// Show the next month
    Next,
    /// Show the previous month
    Prev,
    /// List appointments active on a day
    Day {
        day: String,

        #[arg(long)]
        search: Option<String>,
    },
    /// List appointments starting after today
    Upcoming {
        #[arg(long)]
        search: Option<String>,
    },
    /// Set the standing search query (no words clears it)
    Search { query: Vec<String> },
    /// Book a new appointment
    Book(BookArgs),
    /// Replace an existing appointment
    Edit {
        id: u64,

        #[command(flatten)]
        fields: BookArgs,
    },
    /// List the doctor directory
    Doctors,
    /// List the patient directory
    Patients,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Outcome of one shell line.
enum Step {
    Output(String),
    Quit,
}

pub fn run(config: &SchedulerConfig) -> Result<()> {
    let mut session = Session::new(config, SystemClock)?;
    let interactive = std::io::stdin().is_terminal();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print_prompt(&session)?;
        }

        let Some(line) = lines.next() else { break };
        let line = line?;

        let words = match split_words(&line) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("{}", e.to_string().red());
                continue;
            }
        };
        if words.is_empty() {
            continue;
        }

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e) => {
                // Help and usage errors alike
                e.print()?;
                continue;
            }
        };

        match execute(&mut session, parsed.command, interactive) {
            Ok(Step::Output(out)) => {
                if !out.is_empty() {
                    println!("{}", out);
                }
            }
            Ok(Step::Quit) => break,
            Err(e) => eprintln!("{}", format!("Error: {:#}", e).red()),
        }
    }

    debug!(appointments = session.store.len(), "session ended");
    Ok(())
}

fn execute<C: Clock>(session: &mut Session<C>, command: ShellCommand, interactive: bool) -> Result<Step> {
    let out = match command {
        ShellCommand::Month { month, search } => {
            commands::month::run(session, month.as_deref(), search.as_deref())?
        }
        ShellCommand::Next => commands::month::run(session, Some("next"), None)?,
        ShellCommand::Prev => commands::month::run(session, Some("prev"), None)?,
        ShellCommand::Day { day, search } => commands::day::run(session, &day, search.as_deref())?,
        ShellCommand::Upcoming { search } => commands::upcoming::run(session, search.as_deref()),
        ShellCommand::Search { query } => {
            session.search = query.join(" ");
            if session.search.trim().is_empty() {
                "Search cleared".dimmed().to_string()
            } else {
                format!("Searching for \"{}\"", session.search).dimmed().to_string()
            }
        }
        ShellCommand::Book(fields) => commands::book::create(session, fields, interactive)?,
        ShellCommand::Edit { id, fields } => commands::book::edit(session, id, fields)?,
        ShellCommand::Doctors => commands::directory::render_doctors(&session.doctors),
        ShellCommand::Patients => commands::directory::render_patients(&session.patients),
        ShellCommand::Quit => return Ok(Step::Quit),
    };

    Ok(Step::Output(out))
}

fn print_prompt<C: Clock>(session: &Session<C>) -> Result<()> {
    let mut stdout = std::io::stdout();
    if let Some(notification) = session.banner.current() {
        writeln!(stdout, "{}", notification.render())?;
    }
    if !session.search.trim().is_empty() {
        write!(stdout, "{} ", format!("[{}]", session.search.trim()).dimmed())?;
    }
    write!(stdout, "{} ", "apptcal>".purple().bold())?;
    stdout.flush()?;
    Ok(())
}

/// Split a line into words, honoring single and double quotes.
fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        anyhow::bail!("Unclosed quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
