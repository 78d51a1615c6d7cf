use crate::movies::MovieRecord;
use crate::ratings::{RatingsByYear, YearBestRating};

/// Result of looking up the movies released in a year.
#[derive(Debug, PartialEq)]
pub enum YearQuery<'a> {
    Titles(Vec<&'a str>),
    NoData,
}

/// Result of looking up the movies available in a language.
#[derive(Debug, PartialEq)]
pub enum LanguageQuery<'a> {
    Movies(Vec<(i32, &'a str)>),
    NoData,
}

/// Titles of every movie released in `year`, in file order.
pub fn movies_in_year(movies: &[MovieRecord], year: i32) -> YearQuery<'_> {
    let titles: Vec<&str> = movies
        .iter()
        .filter(|m| m.year == year)
        .map(|m| m.title.as_str())
        .collect();

    if titles.is_empty() {
        YearQuery::NoData
    } else {
        YearQuery::Titles(titles)
    }
}

pub fn best_per_year(ratings: &RatingsByYear) -> impl Iterator<Item = &YearBestRating> {
    ratings.iter()
}

/// `(year, title)` of every movie with an exact, case-sensitive match for `language`.
pub fn movies_in_language<'a>(movies: &'a [MovieRecord], language: &str) -> LanguageQuery<'a> {
    let matches: Vec<(i32, &str)> = movies
        .iter()
        .filter(|m| m.speaks(language))
        .map(|m| (m.year, m.title.as_str()))
        .collect();

    if matches.is_empty() {
        LanguageQuery::NoData
    } else {
        LanguageQuery::Movies(matches)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn movies() -> Vec<MovieRecord> {
        [
            "Furious 7,2015,[English;Mandarin],7.2",
            "Minions,2015,[English;Russian],6.4",
            "Rogue One,2016,[English;French],7.8",
            "Amélie,2001,[French],8.3",
        ]
        .iter()
        .map(|line| line.parse().unwrap())
        .collect()
    }

    #[test]
    fn test_movies_in_year() {
        let movies = movies();
        assert_eq!(
            movies_in_year(&movies, 2015),
            YearQuery::Titles(vec!["Furious 7", "Minions"])
        );
    }

    #[test]
    fn test_movies_in_year_no_data() {
        let movies = movies();
        assert_eq!(movies_in_year(&movies, 1999), YearQuery::NoData);
        assert_eq!(movies_in_year(&[], 2015), YearQuery::NoData);
    }

    #[test]
    fn test_movies_in_year_matches_parsed_year_exactly() {
        let movies = movies();
        for year in [2001, 2015, 2016] {
            let expected: Vec<&str> = movies
                .iter()
                .filter(|m| m.year == year)
                .map(|m| m.title.as_str())
                .collect();
            assert_eq!(movies_in_year(&movies, year), YearQuery::Titles(expected));
        }
    }

    #[test]
    fn test_movies_in_language() {
        let movies = movies();
        assert_eq!(
            movies_in_language(&movies, "Russian"),
            LanguageQuery::Movies(vec![(2015, "Minions")])
        );
        assert_eq!(
            movies_in_language(&movies, "French"),
            LanguageQuery::Movies(vec![(2016, "Rogue One"), (2001, "Amélie")])
        );
    }

    #[test]
    fn test_movies_in_language_is_case_sensitive() {
        let movies = movies();
        assert_eq!(movies_in_language(&movies, "russian"), LanguageQuery::NoData);
        assert_eq!(movies_in_language(&movies, "Klingon"), LanguageQuery::NoData);
    }

    #[test]
    fn test_best_per_year() {
        let movies = movies();
        let ratings = RatingsByYear::from_movies(&movies);
        let report: Vec<(i32, &str)> = best_per_year(&ratings)
            .map(|r| (r.year, r.title.as_str()))
            .collect();
        assert_eq!(
            report,
            vec![(2015, "Furious 7"), (2016, "Rogue One"), (2001, "Amélie")]
        );
    }
}
