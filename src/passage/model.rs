use serde::Serialize;
use utoipa::ToSchema;

use crate::extractor::{VerseMap, reader::parse_leading_int};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassageRequest {
    pub book: String,
    /// `None` when the requested chapter is not a positive integer.
    pub chapter: Option<u32>,
    pub version: String,
}

impl PassageRequest {
    pub fn new(book: impl Into<String>, chapter: Option<u32>, version: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter,
            version: version.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PassageResult {
    #[schema(example = "Genesis")]
    pub book: String,
    #[schema(example = 1)]
    pub chapter: Option<u32>,
    #[schema(example = "NKJV")]
    pub version: String,
    /// Verse number (as a string key) to verse text.
    #[schema(value_type = Object)]
    pub verses: VerseMap,
}

impl PassageResult {
    pub fn empty(request: PassageRequest) -> Self {
        Self::new(request, VerseMap::new())
    }

    pub fn new(request: PassageRequest, verses: VerseMap) -> Self {
        Self {
            book: request.book,
            chapter: request.chapter,
            version: request.version,
            verses,
        }
    }
}

/// Leading-integer parse of a chapter path segment. Zero, negative and
/// non-numeric chapters come back as `None`.
pub fn parse_chapter(raw: &str) -> Option<u32> {
    parse_leading_int(raw)
        .filter(|chapter| *chapter > 0)
        .and_then(|chapter| u32::try_from(chapter).ok())
}
