pub mod year_best;

pub use year_best::{RatingsByYear, YearBestRating};
