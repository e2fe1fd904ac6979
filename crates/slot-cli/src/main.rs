//! `slots` CLI — resolve bookable meeting times from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Filter candidates in a JSON request (stdin → stdout)
//! cat request.json | slots resolve
//!
//! # From file to file, dropping windows whose boundary falls in a DST gap
//! slots resolve -i request.json -o valid.json --dst-policy skip
//!
//! # Per-candidate verdicts with reasons
//! slots -v explain -i request.json
//!
//! # Caller-side labels
//! slots describe --minutes 90
//! slots offset --timezone America/Chicago --at 2024-07-01T12:00:00Z
//! ```

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use slot_engine::display::{format_event_description, format_timezone_offset};
use slot_engine::request::parse_instant;
use slot_engine::schedule::parse_timezone;
use slot_engine::{DstPolicy, ResolveOptions, ResolveRequest, Resolver};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Resolve bookable meeting times against a weekly availability schedule"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bookable subset of the request's candidates as a JSON array
    Resolve {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Print a verdict with its reason for every candidate
    Explain {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Print a human-readable event length (e.g., "1 hr 30 mins")
    Describe {
        /// Event duration in minutes
        #[arg(long)]
        minutes: u32,
    },
    /// Print the short GMT offset label of a timezone (e.g., "GMT-6")
    Offset {
        /// IANA timezone identifier
        #[arg(long)]
        timezone: String,
        /// Instant at which to evaluate the offset (defaults to now)
        #[arg(long)]
        at: Option<String>,
    },
}

#[derive(clap::Args)]
struct IoArgs {
    /// Request JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// How to treat window boundaries that fall in a DST gap
    #[arg(long, value_enum, default_value_t = DstPolicyArg::ShiftForward)]
    dst_policy: DstPolicyArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum DstPolicyArg {
    ShiftForward,
    Skip,
}

impl From<DstPolicyArg> for DstPolicy {
    fn from(arg: DstPolicyArg) -> Self {
        match arg {
            DstPolicyArg::ShiftForward => DstPolicy::ShiftForward,
            DstPolicyArg::Skip => DstPolicy::Skip,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Resolve { io } => {
            let (request, resolver) = load(&io)?;
            let valid = resolver
                .resolve(&request.candidates, &request.busy, request.duration_minutes)
                .context("Failed to resolve candidates")?;
            let rendered: Vec<String> = valid
                .iter()
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
                .collect();
            write_output(io.output.as_deref(), &serde_json::to_string_pretty(&rendered)?)?;
        }
        Commands::Explain { io } => {
            let (request, resolver) = load(&io)?;
            let evaluations = resolver
                .explain(&request.candidates, &request.busy, request.duration_minutes)
                .context("Failed to evaluate candidates")?;
            write_output(io.output.as_deref(), &serde_json::to_string_pretty(&evaluations)?)?;
        }
        Commands::Describe { minutes } => {
            println!("{}", format_event_description(minutes));
        }
        Commands::Offset { timezone, at } => {
            let tz = parse_timezone(&timezone)?;
            let at = match at {
                Some(s) => parse_instant(&s)?,
                None => Utc::now(),
            };
            println!("{}", format_timezone_offset(&tz, at));
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Read and validate the request, then prepare a resolver for its schedule.
fn load(io: &IoArgs) -> Result<(ResolveRequest, Resolver)> {
    let json = read_input(io.input.as_deref())?;
    let request = ResolveRequest::from_json(&json).context("Failed to load request")?;
    log::debug!(
        "loaded request: {} candidates, {} busy intervals, {} windows in {}",
        request.candidates.len(),
        request.busy.len(),
        request.schedule.windows.len(),
        request.schedule.timezone
    );
    let options = ResolveOptions {
        dst_policy: io.dst_policy.into(),
    };
    let resolver = Resolver::with_options(&request.schedule, options);
    Ok((request, resolver))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
