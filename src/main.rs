//! Headless session runner (default binary).
//!
//! Drives one session from a step script and prints the final view.
//!
//! ```text
//! blockfall-sim [--config PATH] [--json] [SCRIPT]
//! ```
//!
//! The script is read from `SCRIPT`, or from stdin when omitted.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use blockfall::core::{Config, GameSession};
use blockfall::sim::{load_config, run_script, Reporter};

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    script: Option<PathBuf>,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            "--json" => args.json = true,
            flag if flag.starts_with("--") => bail!("unknown flag {}", flag),
            path => {
                if args.script.is_some() {
                    bail!("only one script may be given");
                }
                args.script = Some(PathBuf::from(path));
            }
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    let args = parse_args()?;
    let reporter = Reporter::from_env();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    let mut session = GameSession::new(config)?;
    reporter.report(format_args!(
        "session {}x{} seed {}",
        config.width, config.height, config.seed
    ));

    let summary = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            run_script(&mut session, BufReader::new(file), &reporter)?
        }
        None => run_script(&mut session, io::stdin().lock(), &reporter)?,
    };
    reporter.report(summary);

    let view = session.view();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view);
    }
    Ok(())
}
