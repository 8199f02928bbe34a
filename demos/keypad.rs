//! Keypad Session
//!
//! Drives a calculator session from standard input. Each line is split into
//! keys: single characters, or named keys written in angle brackets such as
//! `<Enter>` and `<Escape>`. The display is printed after every line.
//!
//! Key concepts:
//! - The session is the only owner of the state
//! - A subscription serializes dispatch for the lifetime of the loop
//! - Unbound keys are dropped before they reach the core
//!
//! Run with: cargo run --example keypad -- --config keys.toml
//! Set RUST_LOG=keycalc=debug to watch each transition.

use anyhow::Context;
use clap::Parser;
use keycalc::{Session, SessionConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Interactive keypad calculator")]
struct Args {
    /// Session config file (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the transition journal on exit
    #[arg(long)]
    journal: bool,
}

fn split_keys(line: &str) -> Vec<String> {
    let mut keys = Vec::new();
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c == '<' {
            let name: String = chars.by_ref().take_while(|&n| n != '>').collect();
            keys.push(name);
        } else {
            keys.push(c.to_string());
        }
    }
    keys
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SessionConfig::default(),
    };

    let mut session = Session::new(&config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", session.display())?;

    {
        let mut subscription = session.subscribe();
        for line in io::stdin().lock().lines() {
            for key in split_keys(&line?) {
                subscription.dispatch(&key);
            }
            writeln!(out, "{}", subscription.display())?;
        }
    }

    if args.journal {
        for entry in session.journal().transitions() {
            writeln!(
                out,
                "{}  {}  {} -> {}",
                entry.timestamp.format("%H:%M:%S%.3f"),
                entry.input,
                entry.from.display(),
                entry.to.display()
            )?;
        }
    }

    Ok(())
}
