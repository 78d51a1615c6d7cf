use std::io::{self, BufRead, Write};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::movies::MovieRecord;
use crate::queries::{best_per_year, movies_in_language, movies_in_year, LanguageQuery, YearQuery};
use crate::ratings::RatingsByYear;

const MENU: &str = "1. Show movies released in the specified year\n\
                    2. Show highest rated movie for each year\n\
                    3. Show the title and year of release of all movies in a specific language\n\
                    4. Exit from program\n\n\
                    Enter a choice from 1 to 4: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    MoviesInYear,
    BestPerYear,
    MoviesInLanguage,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::MoviesInYear),
            "2" => Some(MenuChoice::BestPerYear),
            "3" => Some(MenuChoice::MoviesInLanguage),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Interactive console front end over a loaded catalog.
pub struct Menu<'a> {
    movies: &'a [MovieRecord],
    ratings: &'a RatingsByYear,
}

impl<'a> Menu<'a> {
    pub fn new(movies: &'a [MovieRecord], ratings: &'a RatingsByYear) -> Self {
        Self { movies, ratings }
    }

    /// Run until the user picks exit or the input is exhausted.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        loop {
            let Some(choice) = prompt(&mut input, &mut output, MENU)? else {
                return Ok(());
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::MoviesInYear) => {
                    let Some(year) = prompt(
                        &mut input,
                        &mut output,
                        "Enter the year for which you want to see movies: ",
                    )?
                    else {
                        return Ok(());
                    };
                    match year.trim().parse::<i32>() {
                        Ok(year) => self.show_year(year, &mut output)?,
                        Err(_) => writeln!(output, "Invalid year \"{}\"", year.trim())?,
                    }
                }
                Some(MenuChoice::BestPerYear) => self.show_best_per_year(&mut output)?,
                Some(MenuChoice::MoviesInLanguage) => {
                    let Some(language) = prompt(
                        &mut input,
                        &mut output,
                        "Enter the language for which you want to see movies: ",
                    )?
                    else {
                        return Ok(());
                    };
                    self.show_language(language.trim(), &mut output)?;
                }
                Some(MenuChoice::Exit) => {
                    writeln!(output)?;
                    return Ok(());
                }
                None => writeln!(output, "Invalid choice, please try again\n")?,
            }
            writeln!(output)?;
        }
    }

    fn show_year<W: Write>(&self, year: i32, output: &mut W) -> io::Result<()> {
        match movies_in_year(self.movies, year) {
            YearQuery::Titles(titles) => {
                for title in titles {
                    writeln!(output, "** {}", title)?;
                }
            }
            YearQuery::NoData => {
                writeln!(output, "** No data about movies released in the year {}", year)?
            }
        }
        Ok(())
    }

    fn show_best_per_year<W: Write>(&self, output: &mut W) -> io::Result<()> {
        for best in best_per_year(self.ratings) {
            writeln!(
                output,
                "** {} {} {}",
                best.year,
                format_rating(best.rating),
                best.title
            )?;
        }
        Ok(())
    }

    fn show_language<W: Write>(&self, language: &str, output: &mut W) -> io::Result<()> {
        match movies_in_language(self.movies, language) {
            LanguageQuery::Movies(movies) => {
                for (year, title) in movies {
                    writeln!(output, "** {} {}", year, title)?;
                }
            }
            LanguageQuery::NoData => {
                writeln!(output, "** No data about movies released in {}", language)?
            }
        }
        Ok(())
    }
}

/// Write `text`, then read one line. `None` once the input is exhausted.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Ratings are shown with exactly one decimal place.
pub fn format_rating(rating: Decimal) -> String {
    let mut rounded = rating.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    rounded.to_string()
}
