//! Catalog loading from the tabular book source.

use super::{Book, Catalog, EmotionScores};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Columns the source file must carry. Checked up front so a misnamed
/// column fails with its name instead of a per-row deserialization error.
const REQUIRED_COLUMNS: [&str; 11] = [
    "isbn13",
    "title",
    "authors",
    "description",
    "simple_categories",
    "thumbnail",
    "joy",
    "surprise",
    "anger",
    "fear",
    "sadness",
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read catalog source {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog source is missing required column \"{0}\"")]
    MissingColumn(String),
    #[error("catalog source row is malformed: {0}")]
    MalformedRow(#[from] csv::Error),
    #[error("duplicate identifier {0} in catalog source")]
    DuplicateId(i64),
}

/// One row of the source file, in source form. Optional fields stay
/// optional here; defaults are applied when converting to [`Book`].
#[derive(Debug, Deserialize)]
struct BookRow {
    isbn13: i64,
    title: String,
    authors: String,
    description: String,
    simple_categories: Option<String>,
    thumbnail: Option<String>,
    joy: Option<f64>,
    surprise: Option<f64>,
    anger: Option<f64>,
    fear: Option<f64>,
    sadness: Option<f64>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Book {
        let image = Book::image_for_thumbnail(row.thumbnail.as_deref());
        let authors = row
            .authors
            .split(';')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        let category = row.simple_categories.filter(|label| !label.is_empty());
        Book {
            id: row.isbn13,
            title: row.title,
            authors,
            description: row.description,
            category,
            image,
            emotions: EmotionScores {
                joy: row.joy,
                surprise: row.surprise,
                anger: row.anger,
                fear: row.fear,
                sadness: row.sadness,
            },
        }
    }
}

/// Load the book catalog from a CSV file.
///
/// Fatal at startup: any unreadable file, missing column, malformed row
/// or duplicate identifier aborts the load. Missing thumbnails, categories
/// and emotion scores are recovered with documented defaults instead.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|err| {
        // Surface I/O problems as Unreadable with the offending path
        if matches!(err.kind(), csv::ErrorKind::Io(_)) {
            match err.into_kind() {
                csv::ErrorKind::Io(io) => LoadError::Unreadable {
                    path: path.display().to_string(),
                    source: io,
                },
                _ => unreachable!("kind checked above"),
            }
        } else {
            LoadError::MalformedRow(err)
        }
    })?;

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(LoadError::MissingColumn(column.to_string()));
        }
    }

    let mut books: Vec<Book> = Vec::new();
    let mut seen_ids: HashSet<i64> = HashSet::new();
    for row in reader.deserialize::<BookRow>() {
        let row = row?;
        if !seen_ids.insert(row.isbn13) {
            return Err(LoadError::DuplicateId(row.isbn13));
        }
        books.push(row.into());
    }

    info!("Catalog has {} books", books.len());
    Ok(Catalog::new(books))
}
