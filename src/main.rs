use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use verity::{EngineConfig, Evaluator, Rule, VerityError};

/// Evaluates a rule against JSON documents and prints one result per document.
///
/// Exits with 0 when every document matches, 1 when any does not, and 2 on error.
#[derive(Parser, Debug)]
#[command(name = "verity", version)]
struct Cli {
    /// The rule to evaluate, e.g. "$.age >= 18 && $.active"
    rule: String,

    /// JSON files to evaluate. Reads standard input when omitted.
    data: Vec<PathBuf>,

    /// Treat inputs as JSON Lines (one document per line)
    #[arg(long)]
    lines: bool,

    /// Engine configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig, VerityError> {
    match path {
        Some(path) => Ok(EngineConfig::from_json(&fs::read_to_string(path)?)?),
        None => Ok(EngineConfig::default()),
    }
}

fn run(cli: &Cli) -> Result<bool, VerityError> {
    let config = load_config(cli.config.as_ref())?;
    let evaluator = Evaluator::builder().config(config).build();
    let rule = Rule::parse(&cli.rule)?;
    log::info!("Evaluating rule: {}", rule.root());

    let documents = if cli.data.is_empty() {
        verity::read_stdin_documents(cli.lines)?
    } else {
        let mut all = Vec::new();
        for path in &cli.data {
            all.extend(verity::read_documents(path, cli.lines)?);
        }
        all
    };

    let results = rule.matches_all(&evaluator, &documents);
    for result in &results {
        println!("{}", result);
    }
    Ok(results.iter().all(|matched| *matched))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
