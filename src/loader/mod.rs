pub mod loader;

pub use loader::{load_movies, read_movies, Catalog, ParsePolicy};
