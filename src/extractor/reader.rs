use scraper::{ElementRef, Html, Selector};
use std::collections::btree_map::Entry;
use std::sync::LazyLock;

use crate::extractor::cleaner::clean_verse_text;
use crate::extractor::model::{Continuation, ExtractOptions, Extraction, ExtractionStats, VerseMap};

static PASSAGE_CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".passage-text").unwrap());
static VERSE_TEXT: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".text").unwrap());
static VERSE_NUMBER: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".versenum").unwrap());

/// Walk the first passage container and collect its verses.
pub fn read_passage(document: &Html, options: &ExtractOptions) -> Extraction {
    let mut extraction = Extraction::default();

    let Some(container) = document.select(&PASSAGE_CONTAINER).next() else {
        return extraction;
    };
    extraction.stats.container_found = true;

    let mut current: i64 = 0;
    for element in container.select(&VERSE_TEXT) {
        extraction.stats.elements += 1;

        let marker = marker_text(element);
        let parsed = parse_leading_int(&marker);
        let text = clean_verse_text(&strip_marker(element, &marker));

        match parsed {
            Some(printed) => current = options.verse_offset.apply(printed),
            None => extraction.stats.unparsed_markers += 1,
        }

        if current <= 0 || current > i64::from(options.max_verse) {
            extraction.stats.skipped_out_of_range += 1;
            continue;
        }
        if text.is_empty() {
            extraction.stats.skipped_empty += 1;
            continue;
        }

        // current is within (0, max_verse], so the cast is lossless
        let number = current as u32;
        match (parsed, options.continuation) {
            (None, Continuation::Append) => {
                append(&mut extraction.verses, number, text, &mut extraction.stats)
            }
            (None, Continuation::Replace) => {
                if extraction.verses.insert(number, text).is_some() {
                    extraction.stats.continued += 1;
                } else {
                    extraction.stats.recorded += 1;
                }
            }
            (Some(_), _) => {
                extraction.verses.insert(number, text);
                extraction.stats.recorded += 1;
            }
        }
    }

    extraction
}

/// A verse spread over several elements: later pieces extend the entry.
fn append(verses: &mut VerseMap, number: u32, text: String, stats: &mut ExtractionStats) {
    match verses.entry(number) {
        Entry::Occupied(mut entry) => {
            let existing = entry.get_mut();
            existing.push(' ');
            existing.push_str(&text);
            stats.continued += 1;
        }
        Entry::Vacant(entry) => {
            entry.insert(text);
            stats.recorded += 1;
        }
    }
}

fn marker_text(element: ElementRef<'_>) -> String {
    element
        .select(&VERSE_NUMBER)
        .flat_map(|marker| marker.text())
        .collect()
}

fn strip_marker(element: ElementRef<'_>, marker: &str) -> String {
    let full = element.text().collect::<String>();
    let full = full.trim();
    if marker.is_empty() {
        return full.to_string();
    }
    full.replacen(marker, "", 1).trim().to_string()
}

/// Integer prefix of `text`, read the way `parseInt(text, 10)` would: leading
/// whitespace is skipped, a sign is allowed, and parsing stops at the first
/// non-digit. `None` when no digit follows.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
