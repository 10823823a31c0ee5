//! userfetch — fetch user records and list those whose city matches a prefix.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::Cli;
use userfetch::config::Config;
use userfetch::env::Env;
use userfetch::fetch::HttpUserSource;
use userfetch::filter::CityFilter;
use userfetch::logging;
use userfetch::pipeline::{self, RunOutcome};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let result = run().await;
    if let Err(err) = &result {
        eprintln!("Error: {err:#}");
    }
    process::exit(exit_code(&result));
}

/// Exit status for a finished run.
///
/// Fetch failures are part of the report and still exit 0; only errors that
/// stop the report itself (config, client setup, stdout) exit 1.
fn exit_code(result: &Result<RunOutcome>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

async fn run() -> Result<RunOutcome> {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    cli::apply_color_choice(cli.no_color);

    let work_dir = std::env::current_dir().ok();
    let mut config = Config::load(work_dir.as_deref(), &Env::real())
        .context("failed to load configuration")?;
    config.apply_overrides(cli.url, cli.filter);

    let source = HttpUserSource::new(config.source.url.as_str())
        .context("failed to build HTTP client")?;
    let filter = CityFilter::new(config.filter.city_prefix);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    pipeline::run(&source, &filter, &mut out)
        .await
        .context("failed to write report")
}
