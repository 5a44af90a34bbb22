//! reqmin CLI binary.
//!
//! This is the entry point for the `reqmin` command-line tool. It loads the
//! configuration, initializes logging via `tracing`, parses arguments with
//! `clap`, and dispatches to the solve prompt or the self-test runner.

mod cli;
mod commands;

use reqmin_core::config::ReqminConfig;
use reqmin_util::errors::ReqminResult;

fn main() -> ReqminResult<()> {
    let args = cli::parse();
    let config = match &args.config {
        Some(path) => ReqminConfig::load(path)?,
        None => ReqminConfig::load_default()?,
    };

    let fallback = if args.verbose {
        "debug"
    } else {
        config.log.filter.as_str()
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .init();

    commands::dispatch(args, &config)
}
