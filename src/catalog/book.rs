use serde::Serialize;

/// Query-string suffix appended to stored thumbnail URLs to request a
/// larger rendition from the image host.
pub const THUMBNAIL_SUFFIX: &str = "&fife=w800";

/// Image reference used when a record has no thumbnail.
pub const PLACEHOLDER_COVER: &str = "cover-not-found.jpg";

/// Per-record emotion scores, derived externally and trusted as-is.
/// Higher means a stronger presence of that emotion. A missing score
/// ranks the record last when sorting by that emotion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EmotionScores {
    pub joy: Option<f64>,
    pub surprise: Option<f64>,
    pub anger: Option<f64>,
    pub fear: Option<f64>,
    pub sadness: Option<f64>,
}

/// A single catalog entry. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    /// Unique numeric catalog key (ISBN-13 in the source data).
    pub id: i64,
    pub title: String,
    /// Ordered author names, split from the semicolon-delimited source form.
    pub authors: Vec<String>,
    pub description: String,
    /// Category label, absent for unclassified records.
    pub category: Option<String>,
    /// Display image reference, derived from the thumbnail at load time.
    pub image: String,
    pub emotions: EmotionScores,
}

impl Book {
    /// Derive the display image reference from an optional thumbnail URL.
    pub fn image_for_thumbnail(thumbnail: Option<&str>) -> String {
        match thumbnail {
            Some(url) if !url.is_empty() => format!("{}{}", url, THUMBNAIL_SUFFIX),
            _ => PLACEHOLDER_COVER.to_string(),
        }
    }
}
