pub mod cleaner;
pub mod model;
pub mod reader;

#[cfg(test)]
mod tests;

pub use cleaner::clean_verse_text;
pub use model::{
    Continuation, DEFAULT_MAX_VERSE, ExtractOptions, Extraction, ExtractionStats, VerseMap,
    VerseOffset,
};

use scraper::Html;
use tracing::debug;

/// Parse an upstream passage page into its verses.
///
/// Never fails: markup that does not fit the expected layout simply yields
/// fewer (or zero) verses, and the counters in `stats` say what was dropped.
pub fn extract(html: &str, options: &ExtractOptions) -> Extraction {
    let document = Html::parse_document(html);
    let extraction = reader::read_passage(&document, options);

    debug!(stats = ?extraction.stats, verses = extraction.verses.len(), "extracted passage");
    extraction
}

pub fn extract_verses(html: &str, options: &ExtractOptions) -> VerseMap {
    extract(html, options).verses
}
