use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::loader::{load_movies, ParsePolicy};
use crate::menu::Menu;
use crate::ratings::RatingsByYear;

#[derive(Debug, Clone)]
pub struct Config {
    pub path: PathBuf,
    pub policy: ParsePolicy,
}

/// Run the catalog against the process console.
pub fn run(config: &Config) -> Result<(), Error> {
    run_with(config, io::stdin().lock(), io::stdout().lock())
}

/// Load the catalog, build the best-per-year index and hand both to the interactive menu.
pub fn run_with<R: BufRead, W: Write>(config: &Config, input: R, mut output: W) -> Result<(), Error> {
    let catalog = load_movies(&config.path, config.policy)?;

    writeln!(
        output,
        "\nProcessed file \"{}\" and parsed data for {} movies\n",
        config.path.display(),
        catalog.len()
    )?;
    if catalog.skipped > 0 {
        writeln!(output, "Skipped {} malformed lines\n", catalog.skipped)?;
    }

    let ratings = RatingsByYear::from_movies(&catalog.movies);
    info!("indexed best ratings for {} years", ratings.len());

    Menu::new(&catalog.movies, &ratings).run(input, output)?;
    Ok(())
}
