//! Display formatting at the presentation boundary.

use crate::catalog::Book;
use serde::Serialize;

/// Number of description words shown in a caption before the ellipsis.
const CAPTION_DESCRIPTION_WORDS: usize = 30;

/// One entry of a recommendation response: what a gallery needs to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayItem {
    pub image: String,
    pub caption: String,
}

impl DisplayItem {
    pub fn for_book(book: &Book) -> DisplayItem {
        DisplayItem {
            image: book.image.clone(),
            caption: caption(book),
        }
    }
}

/// `"<title> by <authors>: <first 30 words of description>..."`
pub fn caption(book: &Book) -> String {
    let truncated: Vec<&str> = book
        .description
        .split_whitespace()
        .take(CAPTION_DESCRIPTION_WORDS)
        .collect();
    format!(
        "{} by {}: {}...",
        book.title,
        format_authors(&book.authors),
        truncated.join(" ")
    )
}

/// Join author names for display: one name as-is, two joined with "and",
/// three or more Oxford-comma style with "and" before the last.
pub fn format_authors(authors: &[String]) -> String {
    match authors {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [head @ .., last] => format!("{}, and {}", head.join(", "), last),
    }
}
