use std::collections::BTreeMap;

/// Highest verse number kept unless configured otherwise.
pub const DEFAULT_MAX_VERSE: u32 = 58;

/// Verse number to cleaned verse text. Serializes with string keys.
pub type VerseMap = BTreeMap<u32, String>;

/// How a printed verse marker maps onto a `VerseMap` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerseOffset {
    /// Key = printed number − 1. Matches the output existing clients rely on.
    #[default]
    Legacy,
    /// Key = printed number.
    None,
}

impl VerseOffset {
    pub fn apply(self, printed: i64) -> i64 {
        match self {
            Self::Legacy => printed.saturating_sub(1),
            Self::None => printed,
        }
    }
}

/// What a `.text` element without a verse marker does to the current verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Continuation {
    /// The element's text replaces the entry, so the last fragment wins.
    #[default]
    Replace,
    /// The element's text is joined onto the entry with a single space.
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Highest verse number accepted into the map (inclusive).
    pub max_verse: u32,
    pub verse_offset: VerseOffset,
    pub continuation: Continuation,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_verse: DEFAULT_MAX_VERSE,
            verse_offset: VerseOffset::default(),
            continuation: Continuation::default(),
        }
    }
}

/// Counters describing what the walk saw and dropped. Diagnostic only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub container_found: bool,
    pub elements: usize,
    pub recorded: usize,
    pub continued: usize,
    pub unparsed_markers: usize,
    pub skipped_empty: usize,
    pub skipped_out_of_range: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub verses: VerseMap,
    pub stats: ExtractionStats,
}
