use std::str::FromStr;

use log::debug;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Maximum number of languages kept per movie. Extra entries are dropped.
pub const MAX_LANGUAGES: usize = 5;

/// Number of top-level fields in a movie row.
pub const FIELD_COUNT: usize = 4;

/// A movie row exactly as it appears in the CSV file, before any field is interpreted.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRow {
    pub title: String,
    pub year: String,
    pub languages: String,
    pub rating: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub year: i32,
    pub languages: Vec<String>,
    pub rating: Decimal,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),
    #[error("title is empty")]
    EmptyTitle,
    #[error("invalid year {0:?}")]
    InvalidYear(String),
    #[error("invalid rating {0:?}")]
    InvalidRating(String),
    #[error("invalid language list {0:?}")]
    InvalidLanguages(String),
    #[error("field is not valid UTF-8")]
    InvalidEncoding,
}

impl MovieRecord {
    pub fn speaks(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }
}

impl TryFrom<MovieRow> for MovieRecord {
    type Error = ParseError;

    fn try_from(row: MovieRow) -> Result<Self, Self::Error> {
        let title = row.title.trim();
        if title.is_empty() {
            return Err(ParseError::EmptyTitle);
        }

        let year = row
            .year
            .trim()
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidYear(row.year.clone()))?;

        let languages = parse_languages(&row.languages)?;

        let rating = Decimal::from_str(row.rating.trim())
            .map_err(|_| ParseError::InvalidRating(row.rating.clone()))?;

        Ok(MovieRecord {
            title: title.to_string(),
            year,
            languages,
            rating,
        })
    }
}

impl FromStr for MovieRecord {
    type Err = ParseError;

    /// Parses a single data line such as `Rogue One,2016,[English;French],7.8`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(',').collect();
        if fields.len() != FIELD_COUNT {
            return Err(ParseError::FieldCount(fields.len()));
        }

        MovieRecord::try_from(MovieRow {
            title: fields[0].to_string(),
            year: fields[1].to_string(),
            languages: fields[2].to_string(),
            rating: fields[3].to_string(),
        })
    }
}

/// Parses a `[lang1;lang2;...]` field into at most `MAX_LANGUAGES` non-empty entries.
pub fn parse_languages(field: &str) -> Result<Vec<String>, ParseError> {
    let body = field
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| ParseError::InvalidLanguages(field.to_string()))?;

    let all: Vec<&str> = body
        .split(';')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if all.is_empty() {
        return Err(ParseError::InvalidLanguages(field.to_string()));
    }
    if all.len() > MAX_LANGUAGES {
        debug!(
            "dropping {} language(s) beyond the first {} in {}",
            all.len() - MAX_LANGUAGES,
            MAX_LANGUAGES,
            field
        );
    }

    Ok(all
        .into_iter()
        .take(MAX_LANGUAGES)
        .map(String::from)
        .collect())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_parse_line() {
        let movie: MovieRecord = "Rogue One,2016,[English;French],7.8".parse().unwrap();
        assert_eq!(
            movie,
            MovieRecord {
                title: "Rogue One".to_string(),
                year: 2016,
                languages: vec!["English".to_string(), "French".to_string()],
                rating: decimal("7.8"),
            }
        );
    }

    #[test]
    fn test_single_language() {
        let movie: MovieRecord = "Minions,2015,[English],6.4\n".parse().unwrap();
        assert_eq!(movie.languages, vec!["English".to_string()]);
        assert_eq!(movie.rating, decimal("6.4"));
    }

    #[test]
    fn test_languages_capped_at_five() {
        let movie: MovieRecord = "Babel,2006,[English;Arabic;Spanish;Japanese;Berber;French],7.5"
            .parse()
            .unwrap();
        assert_eq!(movie.languages.len(), MAX_LANGUAGES);
        assert_eq!(movie.languages.last().unwrap(), "Berber");
        assert!(!movie.speaks("French"));
    }

    #[test]
    fn test_empty_language_slots_are_dropped() {
        let languages = parse_languages("[English;;Hindi;]").unwrap();
        assert_eq!(languages, vec!["English".to_string(), "Hindi".to_string()]);
    }

    #[test]
    fn test_no_range_validation() {
        let movie: MovieRecord = "Future,9999,[English],-1.5".parse().unwrap();
        assert_eq!(movie.year, 9999);
        assert_eq!(movie.rating, decimal("-1.5"));
    }

    #[test]
    fn test_too_few_fields() {
        let result = "Rogue One,2016,7.8".parse::<MovieRecord>();
        assert_eq!(result, Err(ParseError::FieldCount(3)));
    }

    #[test]
    fn test_invalid_year() {
        let result = "Rogue One,twenty,[English],7.8".parse::<MovieRecord>();
        assert_eq!(result, Err(ParseError::InvalidYear("twenty".to_string())));
    }

    #[test]
    fn test_invalid_rating() {
        let result = "Rogue One,2016,[English],great".parse::<MovieRecord>();
        assert_eq!(result, Err(ParseError::InvalidRating("great".to_string())));
    }

    #[test]
    fn test_missing_brackets() {
        let result = "Rogue One,2016,English;French,7.8".parse::<MovieRecord>();
        assert!(matches!(result, Err(ParseError::InvalidLanguages(_))));
    }

    #[test]
    fn test_empty_language_list() {
        let result = "Rogue One,2016,[],7.8".parse::<MovieRecord>();
        assert!(matches!(result, Err(ParseError::InvalidLanguages(_))));
    }

    #[test]
    fn test_empty_title() {
        let result = " ,2016,[English],7.8".parse::<MovieRecord>();
        assert_eq!(result, Err(ParseError::EmptyTitle));
    }

    #[test]
    fn test_speaks_is_case_sensitive() {
        let movie: MovieRecord = "Furious 7,2015,[English;Mandarin],7.2".parse().unwrap();
        assert!(movie.speaks("Mandarin"));
        assert!(!movie.speaks("mandarin"));
    }
}
