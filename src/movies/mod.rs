pub mod movie;

pub use movie::{MovieRecord, MovieRow, ParseError, MAX_LANGUAGES};
