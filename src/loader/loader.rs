use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use log::{info, warn};

use crate::error::Error;
use crate::movies::movie::FIELD_COUNT;
use crate::movies::{MovieRecord, MovieRow, ParseError};

/// What to do with a row that cannot be parsed into a movie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Log a warning, count the row as skipped and keep going.
    #[default]
    Skip,
    /// Stop loading at the first malformed row.
    Strict,
}

/// Movies loaded from one file, in file order.
#[derive(Debug, Default)]
pub struct Catalog {
    pub movies: Vec<MovieRecord>,
    pub skipped: usize,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

/// Load every movie from the CSV file at `path`. The first line is a header and is ignored.
pub fn load_movies<P: AsRef<Path>>(path: P, policy: ParsePolicy) -> Result<Catalog, Error> {
    let path = path.as_ref();
    let not_found = || Error::FileNotFound {
        path: path.to_path_buf(),
    };
    // Directories open fine on some platforms and only fail on the first read
    if !path.is_file() {
        return Err(not_found());
    }
    let file = File::open(path).map_err(|_| not_found())?;

    let catalog = read_movies(file, policy)?;
    info!(
        "loaded {} movies from {} ({} skipped)",
        catalog.len(),
        path.display(),
        catalog.skipped
    );
    Ok(catalog)
}

pub fn read_movies<R: Read>(reader: R, policy: ParsePolicy) -> Result<Catalog, Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut catalog = Catalog::default();

    for result in rdr.byte_records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        match parse_record(&record) {
            Ok(movie) => catalog.movies.push(movie),
            Err(source) if policy == ParsePolicy::Strict => {
                return Err(Error::MalformedRow { line, source });
            }
            Err(source) => {
                warn!("skipping line {}: {}", line, source);
                catalog.skipped += 1;
            }
        }
    }

    Ok(catalog)
}

fn parse_record(record: &ByteRecord) -> Result<MovieRecord, ParseError> {
    if record.len() != FIELD_COUNT {
        return Err(ParseError::FieldCount(record.len()));
    }
    // Every field is a String, so the only way this fails is a field that is not UTF-8
    let row: MovieRow = record
        .deserialize(None)
        .map_err(|_| ParseError::InvalidEncoding)?;
    MovieRecord::try_from(row)
}

fn is_blank(record: &ByteRecord) -> bool {
    record.iter().all(|field| field.is_empty())
}
