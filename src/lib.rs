pub mod cli;
pub mod error;
pub mod loader;
pub mod menu;
pub mod movies;
pub mod orchestrator;
pub mod queries;
pub mod ratings;

pub use error::Error;
pub use loader::{load_movies, Catalog, ParsePolicy};
pub use movies::{MovieRecord, ParseError};
pub use orchestrator::{run, Config};
pub use ratings::{RatingsByYear, YearBestRating};
