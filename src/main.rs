use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};

#[derive(Parser)]
#[command(name = "logtally", about = "Summarise a newline-delimited JSON log file")]
struct Cli {
    /// Path to the JSON log file (one object per line).
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: Option<PathBuf>,

    /// Extra TOML config layered over ~/.config/logtally/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug diagnostics to stderr (RUST_LOG takes precedence).
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(file) = cli.file.as_deref() else {
        eprintln!("usage: logtally -f <log file>");
        eprintln!("example: logtally -f app.json");
        eprintln!("{}", Cli::command().render_help());
        return ExitCode::FAILURE;
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "warn" })
            }),
        )
        .init();

    match run(file, cli.config.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(file: &Path, config: Option<&Path>) -> anyhow::Result<()> {
    let config = logtally::Config::load(config).context("failed to load configuration")?;
    let summary = logtally::summarize_file(file, &config)?;

    for skipped in &summary.skipped {
        tracing::warn!(
            line = skipped.line_number,
            reason = %skipped.reason,
            raw = %skipped.raw,
            "skipped malformed line"
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    logtally::render(&summary.metrics, &mut out).context("failed to write report")?;
    out.flush().context("failed to write report")?;
    Ok(())
}
