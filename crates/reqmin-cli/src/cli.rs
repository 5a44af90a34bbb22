//! CLI argument definitions for reqmin.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "reqmin",
    version,
    about = "Version inequalities minimizer/validator",
    long_about = "reqmin reduces a list of version requirements such as `>2 >=2.1 <4 !=4.5` \
                  to the minimal equivalent list, or reports that no version satisfies them."
)]
pub struct Cli {
    /// Requirements to reduce; prompts for a line on stdin when omitted
    pub requirements: Vec<String>,

    /// Run the built-in test cases
    #[arg(short, long)]
    pub test: bool,

    /// Configuration file (defaults to ~/.reqmin/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
