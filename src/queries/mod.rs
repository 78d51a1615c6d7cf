pub mod queries;

pub use queries::{best_per_year, movies_in_language, movies_in_year, LanguageQuery, YearQuery};
