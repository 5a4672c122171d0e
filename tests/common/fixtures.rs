//! Test catalog fixtures
//!
//! Builds a small CSV catalog on disk. Descriptions are long enough that
//! every record lands in its own corpus chunk, so similarity search can
//! tell the records apart.

use super::constants::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

const HEADER: &str =
    "isbn13,title,authors,description,simple_categories,thumbnail,joy,surprise,anger,fear,sadness";

/// Repeat a distinctive phrase until the line is long enough to become
/// its own chunk. No commas: the fixture avoids CSV quoting on purpose.
fn long_description(phrase: &str) -> String {
    format!("{} ", phrase).repeat(80).trim_end().to_string()
}

struct FixtureBook {
    id: i64,
    title: &'static str,
    authors: &'static str,
    phrase: &'static str,
    category: &'static str,
    thumbnail: &'static str,
    joy: &'static str,
    surprise: &'static str,
    anger: &'static str,
    fear: &'static str,
    sadness: &'static str,
}

fn fixture_books() -> Vec<FixtureBook> {
    vec![
        FixtureBook {
            id: SEA_BOOK_ID,
            title: SEA_BOOK_TITLE,
            authors: "Ann Author",
            phrase: "ships sailing the open sea under grey skies",
            category: "Fiction",
            thumbnail: "http://covers.test/sea.jpg",
            joy: "0.2",
            surprise: "0.1",
            anger: "0.1",
            fear: "0.4",
            sadness: "0.3",
        },
        FixtureBook {
            id: STORM_BOOK_ID,
            title: STORM_BOOK_TITLE,
            authors: "Ann Author;Bob Builder",
            phrase: "a ship lost at sea in a violent storm",
            category: "Fiction",
            thumbnail: "http://covers.test/storm.jpg",
            joy: "0.9",
            surprise: "0.2",
            anger: "0.1",
            fear: "0.3",
            sadness: "0.1",
        },
        FixtureBook {
            id: BREAD_BOOK_ID,
            title: BREAD_BOOK_TITLE,
            authors: "Carol Cook",
            phrase: "recipes for baking sourdough bread at home",
            category: "Nonfiction",
            thumbnail: "",
            joy: "0.5",
            surprise: "0.1",
            anger: "0.1",
            fear: "0.1",
            sadness: "0.1",
        },
        FixtureBook {
            id: CRIME_BOOK_ID,
            title: CRIME_BOOK_TITLE,
            authors: "Dan Drake",
            phrase: "a detective solving murders in the dark city",
            category: "Fiction",
            thumbnail: "http://covers.test/crime.jpg",
            joy: "",
            surprise: "0.3",
            anger: "0.4",
            fear: "0.6",
            sadness: "0.7",
        },
    ]
}

/// Write the test catalog CSV into a temp dir. Returns the dir (keep it
/// alive for the duration of the test) and the CSV path.
pub fn create_test_catalog() -> std::io::Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let csv_path = dir.path().join("books_with_emotions.csv");

    let mut file = std::fs::File::create(&csv_path)?;
    writeln!(file, "{}", HEADER)?;
    for book in fixture_books() {
        writeln!(
            file,
            "{},{},{},{},{},{},{},{},{},{},{}",
            book.id,
            book.title,
            book.authors,
            long_description(book.phrase),
            book.category,
            book.thumbnail,
            book.joy,
            book.surprise,
            book.anger,
            book.fear,
            book.sadness,
        )?;
    }

    Ok((dir, csv_path))
}
