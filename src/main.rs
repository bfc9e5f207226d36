use anyhow::{Context, Result};
use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use doc_include::config::load_dialect_table;
use doc_include::include::{Layout, include_all};

#[derive(Parser)]
#[command(name = "doc-include")]
#[command(
	author,
	version,
	about = "Copy files from the parent directory into the current docs directory, rewriting /docs/ links"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Files to include, relative to the parent directory
	#[arg(required = true, value_name = "FILE")]
	files: Vec<String>,
}

fn main() -> ExitCode {
	init_tracing();

	match run() {
		Ok(code) => code,
		Err(e) => {
			error!("{e:#}");
			ExitCode::FAILURE
		}
	}
}

/// Log to stderr at INFO unless `RUST_LOG` says otherwise.
fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(false)
		.with_target(false)
		.without_time()
		.compact()
		.init();
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let table = load_dialect_table(&cwd).context("Failed to load configuration")?;

	let report = include_all(&cli.files, &table, &Layout::default());

	for (filename, e) in report.failures() {
		error!(file = filename, "{}", error_chain(e));
	}

	info!(
		"Included {} of {} files",
		report.succeeded(),
		report.files.len()
	);

	if report.is_success() {
		Ok(ExitCode::SUCCESS)
	} else {
		Ok(ExitCode::FAILURE)
	}
}

/// Render an error and its sources as `outer: inner: ...`.
fn error_chain(e: &(dyn Error + 'static)) -> String {
	std::iter::successors(Some(e), |&e| e.source())
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join(": ")
}
