//! Command dispatch and handler modules.

mod selftest;
mod solve;

use reqmin_core::config::ReqminConfig;
use reqmin_util::errors::ReqminResult;

use crate::cli::Cli;

/// Route a parsed CLI invocation to the appropriate handler.
pub fn dispatch(cli: Cli, config: &ReqminConfig) -> ReqminResult<()> {
    if cli.test {
        return selftest::exec();
    }
    solve::exec(&cli.requirements, &config.cli.prompt)
}
