use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use crate::movies::MovieRecord;

/// The highest rated movie seen for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearBestRating {
    pub year: i32,
    pub rating: Decimal,
    pub title: String,
}

/// Best movie per year, iterated in the order each year first appears in the source.
#[derive(Debug, Default)]
pub struct RatingsByYear {
    entries: Vec<YearBestRating>,
    index: HashMap<i32, usize>,
}

impl RatingsByYear {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_movies(movies: &[MovieRecord]) -> Self {
        let mut ratings = Self::new();
        for movie in movies {
            ratings.record(movie);
        }
        ratings
    }

    /// Fold one movie into the index. An existing entry is only replaced by a strictly
    /// higher rating, so the first of several equally rated movies is kept.
    pub fn record(&mut self, movie: &MovieRecord) {
        match self.index.get(&movie.year) {
            Some(&pos) => {
                let best = &mut self.entries[pos];
                if movie.rating > best.rating {
                    debug!(
                        "{}: {} ({}) replaces {} ({})",
                        movie.year, movie.title, movie.rating, best.title, best.rating
                    );
                    best.rating = movie.rating;
                    best.title = movie.title.clone();
                }
            }
            None => {
                self.index.insert(movie.year, self.entries.len());
                self.entries.push(YearBestRating {
                    year: movie.year,
                    rating: movie.rating,
                    title: movie.title.clone(),
                });
            }
        }
    }

    pub fn get(&self, year: i32) -> Option<&YearBestRating> {
        self.index.get(&year).map(|&pos| &self.entries[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &YearBestRating> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
