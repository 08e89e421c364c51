//! Cairn REPL - the interactive entry point of the Cairn database.
//!
//! Reads one line at a time after the `db > ` prompt. Lines starting with `.`
//! are meta-commands (`.exit` ends the session); anything else is prepared
//! as a statement and executed.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use cairn_executor::PlaceholderExecutor;
use cairn_repl::{BufferedReader, EditorReader, LineReader, Repl, ReplConfig, SessionEnd};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Cairn command interpreter
#[derive(Parser, Debug)]
#[command(name = "cairn", version, about = "Interactive command interpreter for Cairn")]
struct Args {
    /// Configuration file path
    #[arg(long, value_name = "FILE", env = "CAIRN_CONFIG")]
    config: Option<PathBuf>,

    /// History file path
    #[arg(long, value_name = "FILE", env = "CAIRN_HISTORY_FILE")]
    history_file: Option<PathBuf>,

    /// Do not load or save line history
    #[arg(long)]
    no_history: bool,

    /// Print a message for lines that are not recognized statements
    #[arg(long)]
    report_unrecognized: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(args.verbose);

    match run(&args) {
        Ok(end) => {
            debug!(?end, "exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<SessionEnd> {
    let config = load_config(args)?;
    let stdout = io::stdout();

    if io::stdin().is_terminal() {
        let reader = EditorReader::new(&config).context("failed to start line editor")?;
        run_session(reader, &config, stdout)
    } else {
        let reader = BufferedReader::new(io::stdin().lock());
        run_session(reader, &config, stdout)
    }
}

fn run_session<R: LineReader>(
    reader: R,
    config: &ReplConfig,
    out: impl Write,
) -> Result<SessionEnd> {
    let mut repl = Repl::new(reader, PlaceholderExecutor::new(), out)
        .report_unrecognized_statements(config.report_unrecognized_statements);

    repl.run().context("session failed")
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("cairn=debug,cairn_repl=debug,cairn_executor=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn load_config(args: &Args) -> Result<ReplConfig> {
    let mut config = if let Some(path) = &args.config {
        ReplConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?
    } else {
        ReplConfig::load_default().context("failed to load default config")?
    };

    // Command line overrides the file
    if let Some(path) = &args.history_file {
        config.history_file = Some(path.clone());
    }
    if args.no_history {
        config.save_history = false;
    }
    if args.report_unrecognized {
        config.report_unrecognized_statements = true;
    }

    Ok(config)
}
