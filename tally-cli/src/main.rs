use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use tally_arith::{ArithConfig, Calculator};
use tracing_subscriber::EnvFilter;

mod demo;
mod report;

use report::EvaluationReport;

/// A calculator with an operation log, plus a base64 encoder.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file for the calculator
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Do not record operations in the history
    #[arg(long, global = true)]
    no_history: bool,

    /// Output format (summary or json)
    #[arg(short, long, global = true, default_value = "summary")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate expressions such as "add 10 5" in order, then show the history
    Eval {
        /// Expressions to evaluate, one per argument
        #[arg(required = true, allow_hyphen_values = true)]
        expressions: Vec<String>,
    },
    /// Evaluate one expression per line from a file or stdin
    Batch {
        /// Path to the input file. If not provided, reads from stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Base64-encode text
    Encode {
        /// Text to encode
        text: Option<String>,
        /// Read the text from stdin
        #[arg(long, conflicts_with = "text")]
        stdin: bool,
    },
    /// Walk through every operation and print the results
    Demo,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum OutputFormat {
    Summary,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid format: {s}")),
        }
    }
}

#[derive(Serialize)]
struct EncodeOutput<'a> {
    input: &'a str,
    encoded: &'a str,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Eval { expressions } => {
            let mut calc = build_calculator(args.config.as_deref(), args.no_history)?;
            let report = EvaluationReport::evaluate_all(&mut calc, expressions);
            report.print(args.format)
        }
        Commands::Batch { input } => {
            let content = read_input(input.as_deref())?;
            let expressions = content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string);

            let mut calc = build_calculator(args.config.as_deref(), args.no_history)?;
            let report = EvaluationReport::evaluate_all(&mut calc, expressions);
            report.print(args.format)
        }
        Commands::Encode { text, stdin } => {
            // A single trailing line ending from stdin is not part of the text
            let text = if stdin {
                let content = read_input(None)?;
                let content = content
                    .strip_suffix('\n')
                    .map(|s| s.strip_suffix('\r').unwrap_or(s))
                    .unwrap_or(&content);
                Some(content.to_string())
            } else {
                text
            };
            let encoded = tally_encode::encode(text.as_deref())?;

            match args.format {
                OutputFormat::Summary => println!("{encoded}"),
                OutputFormat::Json => {
                    let output = EncodeOutput {
                        input: text.as_deref().unwrap_or_default(),
                        encoded: &encoded,
                    };
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }
            Ok(())
        }
        Commands::Demo => {
            let mut calc = build_calculator(args.config.as_deref(), args.no_history)?;
            demo::run(&mut calc, &mut io::stdout().lock())?;
            Ok(())
        }
    }
}

fn build_calculator(config_path: Option<&Path>, no_history: bool) -> anyhow::Result<Calculator> {
    let mut config = match config_path {
        Some(path) => ArithConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ArithConfig::default(),
    };
    if no_history {
        config = config.with_history(false);
    }
    Ok(Calculator::with_config(config))
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    let content = if let Some(path) = path {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };
    Ok(content)
}
