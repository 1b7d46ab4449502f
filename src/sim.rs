//! Headless session driver.
//!
//! A script is plain text, one step per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! left
//! rotate
//! tick 18
//! down
//! pause
//! resume
//! restart
//! ```
//!
//! Command names are the ones [`Command::from_str`] accepts; `tick N` repeats
//! a gravity tick `N` times.

use std::fmt;
use std::fs;
use std::io::BufRead;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::core::{Config, GameSession, PieceSource, TickOutcome};
use crate::types::{Command, SessionState};

/// Environment switch that silences [`Reporter`] output
pub const QUIET_ENV: &str = "BLOCKFALL_QUIET";

/// One parsed script line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Command(Command),
    Tick(u32),
    Restart,
}

impl Step {
    /// Parse a script line; `Ok(None)` for blanks and comments
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default();
        let step = match head.to_lowercase().as_str() {
            "tick" => {
                let count = match words.next() {
                    Some(n) => n
                        .parse::<u32>()
                        .with_context(|| format!("bad tick count in {:?}", line))?,
                    None => 1,
                };
                Step::Tick(count)
            }
            "restart" => Step::Restart,
            _ => match Command::from_str(head) {
                Some(command) => Step::Command(command),
                None => bail!("unknown step {:?}", head),
            },
        };

        if let Some(extra) = words.next() {
            bail!("unexpected {:?} after {:?}", extra, head);
        }
        Ok(Some(step))
    }
}

/// Prefixed stderr reporting for the runner
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Quiet when `BLOCKFALL_QUIET` is `1` or `true`
    pub fn from_env() -> Self {
        let quiet = std::env::var(QUIET_ENV)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);
        Self { quiet }
    }

    pub fn report(&self, msg: impl fmt::Display) {
        if !self.quiet {
            eprintln!("[blockfall] {}", msg);
        }
    }
}

/// Totals for a finished script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: usize,
    pub ticks: u32,
    pub locks: u32,
    pub lines_cleared: u32,
    pub restarts: u32,
}

/// Load a JSON config file; missing fields take their defaults
pub fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: Config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

/// Apply every step of `script` to `session`
pub fn run_script<S: PieceSource>(
    session: &mut GameSession<S>,
    script: impl BufRead,
    reporter: &Reporter,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (lineno, line) in script.lines().enumerate() {
        let line = line.context("reading script")?;
        let Some(step) =
            Step::parse(&line).with_context(|| format!("script line {}", lineno + 1))?
        else {
            continue;
        };
        summary.steps = summary.steps.saturating_add(1);

        match step {
            Step::Command(Command::SoftDrop) => {
                let outcome = session.soft_drop()?;
                summary.record(session, outcome, reporter);
            }
            Step::Command(command) => {
                let before = session.state();
                session.handle_command(command)?;
                if session.state() != before {
                    reporter.report(format_args!(
                        "{} -> {}",
                        command.as_str(),
                        session.state().as_str()
                    ));
                }
            }
            Step::Tick(count) => {
                for _ in 0..count {
                    let outcome = session.tick()?;
                    summary.record_tick(session, outcome, reporter);
                }
            }
            Step::Restart => {
                session.restart()?;
                summary.restarts = summary.restarts.saturating_add(1);
                reporter.report(format_args!("episode {} started", session.episode_id()));
            }
        }
    }

    if session.state() == SessionState::Lost {
        reporter.report("script ended on a lost session");
    }
    Ok(summary)
}

impl RunSummary {
    fn record_tick<S: PieceSource>(
        &mut self,
        session: &GameSession<S>,
        outcome: TickOutcome,
        reporter: &Reporter,
    ) {
        self.ticks = self.ticks.saturating_add(1);
        self.record(session, outcome, reporter);
    }

    /// Count a lock from a tick or soft-drop
    fn record<S: PieceSource>(
        &mut self,
        session: &GameSession<S>,
        outcome: TickOutcome,
        reporter: &Reporter,
    ) {
        let TickOutcome::Locked(event) = outcome else {
            return;
        };
        self.locks = self.locks.saturating_add(1);
        let cleared = u32::try_from(event.cleared_rows.len()).unwrap_or(u32::MAX);
        self.lines_cleared = self.lines_cleared.saturating_add(cleared);
        if !event.cleared_rows.is_empty() {
            reporter.report(format_args!(
                "cleared rows {:?} (+{})",
                event.cleared_rows, event.line_score
            ));
        }
        if event.lost {
            reporter.report(format_args!("session lost with score {}", session.score()));
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} steps, {} ticks, {} locks, {} lines, {} restarts",
            self.steps, self.ticks, self.locks, self.lines_cleared, self.restarts
        )
    }
}
