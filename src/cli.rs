use std::path::PathBuf;

use clap::Parser;

use crate::loader::ParsePolicy;
use crate::orchestrator::Config;

/// Query a CSV file of movies by year and language.
#[derive(Debug, Parser)]
#[command(version, about, after_help = "Example usage: movie_catalog movies_sample_1.csv")]
pub struct Cli {
    /// CSV file to load. The first line is treated as a header.
    pub file: PathBuf,

    /// Abort on the first malformed line instead of skipping it.
    #[arg(long)]
    pub strict: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            path: cli.file,
            policy: if cli.strict {
                ParsePolicy::Strict
            } else {
                ParsePolicy::Skip
            },
        }
    }
}
