use::std::process;

use clap::Parser;
use env_logger::Env;
use log::info;

use movie_catalog::cli::Cli;
use movie_catalog::{run, Config, Error};

fn main() {
    // Exits with status 2 and a usage message when the file argument is missing
    let config: Config = Cli::parse().into();

    // Initialize logger (respect RUST_LOG env var if set)
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    info!("starting movie catalog with file: {}", config.path.display());

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        if let Error::FileNotFound { .. } = e {
            eprintln!("Example usage: movie_catalog movies_sample_1.csv");
        }
        process::exit(1);
    }
}
