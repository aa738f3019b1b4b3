//! `json-object` CLI: parse JSON and poke at the resulting value tree.
//!
//! ## Usage
//!
//! ```sh
//! # Parse stdin, print the rendered value and the consumed length
//! echo '{"work":996,"school":[985,211]}' | json-object parse
//!
//! # Parse a file, rejecting anything after the first value
//! json-object parse -i data.json --strict
//!
//! # Run the driver on the built-in sample document
//! json-object demo
//!
//! # Inspect a document interactively (commands on stdin)
//! json-object inspect -i data.json
//!
//! # Log parser activity
//! json-object -vv parse -i data.json
//! ```

mod inspect;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use json_object::ParseOptions;
use log::{info, LevelFilter};
use std::io::{self, Read};

const SAMPLE_DOCUMENT: &str = r#"{
    "work": 996,
    "school": [985, 211],
    "my_school": {
        "name": "UofT",
        "rank": 21
    }
}
"#;

#[derive(Parser)]
#[command(
    name = "json-object",
    version,
    about = "Parse JSON into a value tree, render it, and inspect it"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and print the rendered value and consumed length
    Parse {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Reject content after the first value
        #[arg(long)]
        strict: bool,
        /// Maximum container nesting depth
        #[arg(long, default_value_t = ParseOptions::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Parse the built-in sample document
    Demo,
    /// Parse a document, then read inspector commands from stdin
    Inspect {
        /// Input file
        #[arg(short, long)]
        input: String,
        /// Maximum container nesting depth
        #[arg(long, default_value_t = ParseOptions::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Re-parse with --help to show usage (clap handles this)
            Cli::parse_from(["json-object", "--help"]);
            unreachable!();
        }
    };

    match command {
        Commands::Parse {
            input,
            strict,
            max_depth,
        } => {
            let text = read_input(input.as_deref())?;
            let options = ParseOptions::new().max_depth(max_depth);
            drive(&text, &options, strict)?;
        }
        Commands::Demo => {
            drive(SAMPLE_DOCUMENT, &ParseOptions::default(), false)?;
        }
        Commands::Inspect { input, max_depth } => {
            let text = read_input(Some(input.as_str()))?;
            let options = ParseOptions::new().max_depth(max_depth);
            let value = json_object::parse_document_with(&text, &options)
                .with_context(|| format!("Failed to parse {}", input))?;
            info!("loaded {} ({} bytes)", input, text.len());
            inspect::run(&value, io::stdin().lock(), io::stdout().lock())
                .context("Inspector I/O failed")?;
        }
    }

    Ok(())
}

/// Parse `text` and print the rendering followed by the consumed length.
fn drive(text: &str, options: &ParseOptions, strict: bool) -> Result<()> {
    let (value, len) = json_object::parse_with(text, options).context("Failed to parse document")?;
    if strict {
        json_object::reject_trailing(text, len).context("Failed to parse document")?;
    }
    info!("parsed a {} spanning {} of {} bytes", value.type_name(), len, text.len());
    println!("{}", value);
    println!("{}", len);
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
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
