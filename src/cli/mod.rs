pub mod commands;
pub mod context;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

/// Run docker-compose with the override files of an environment.
///
/// `doc up local` runs
/// `docker-compose -f docker-compose.yml -f docker-compose.local.yml ... up`
/// from the context directory.
#[derive(Parser, Debug)]
#[command(name = "doc", version, about, long_about = None)]
pub struct Cli {
    /// docker-compose command to run (up, ps, logs, ...)
    pub command: String,

    /// Target environment (default: default_environment from settings.yml)
    pub env: Option<String>,

    /// Extra arguments passed to docker-compose after the command
    #[arg(last = true)]
    pub args: Vec<String>,

    /// Project directory containing settings.yml and the compose files
    #[arg(short = 'C', long, env = "DOC_CONTEXT")]
    pub context: Option<PathBuf>,

    /// Print the docker-compose command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
