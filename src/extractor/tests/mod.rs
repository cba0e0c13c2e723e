use std::fs;

use crate::extractor::{Continuation, ExtractOptions, VerseOffset, extract, extract_verses};

const GENESIS_2: &str = "The earth was without form, and void; and darkness was on the face of the deep. And the Spirit of God was hovering over the face of the waters.";
const GENESIS_3: &str = "Then God said, \u{201c}Let there be light\u{201d}; and there was light.";
const GENESIS_4: &str = "that it was good;";
const GENESIS_4_JOINED: &str = "And God saw the light, that it was good;";
const GENESIS_5: &str = "God called the light Day, and the darkness He called Night. So the evening and the morning were the first day.";

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

/// Wrap `(marker, text)` pairs into a minimal passage page.
fn passage_page(elements: &[(Option<&str>, &str)]) -> String {
    let body: String = elements
        .iter()
        .map(|(marker, text)| match marker {
            Some(marker) => format!(
                r#"<span class="text"><sup class="versenum">{marker}</sup>{text}</span>"#
            ),
            None => format!(r#"<span class="text">{text}</span>"#),
        })
        .collect();
    format!(r#"<html><body><div class="passage-text"><p>{body}</p></div></body></html>"#)
}

#[test]
fn test_extract_genesis_with_legacy_offset() {
    let verses = extract_verses(&fixture("genesis1.html"), &ExtractOptions::default());

    assert_eq!(verses.len(), 4);
    assert_eq!(verses.get(&1).map(String::as_str), Some(GENESIS_2));
    assert_eq!(verses.get(&2).map(String::as_str), Some(GENESIS_3));
    assert_eq!(verses.get(&3).map(String::as_str), Some(GENESIS_4));
    assert_eq!(verses.get(&4).map(String::as_str), Some(GENESIS_5));
}

#[test]
fn test_extract_genesis_without_offset() {
    let options = ExtractOptions {
        verse_offset: VerseOffset::None,
        ..ExtractOptions::default()
    };
    let verses = extract_verses(&fixture("genesis1.html"), &options);

    assert_eq!(verses.keys().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    assert_eq!(verses.get(&2).map(String::as_str), Some(GENESIS_2));
    assert_eq!(verses.get(&5).map(String::as_str), Some(GENESIS_5));
}

#[test]
fn test_extract_genesis_joining_continuations() {
    let options = ExtractOptions {
        continuation: Continuation::Append,
        ..ExtractOptions::default()
    };
    let verses = extract_verses(&fixture("genesis1.html"), &options);

    assert_eq!(verses.len(), 4);
    assert_eq!(verses.get(&3).map(String::as_str), Some(GENESIS_4_JOINED));
    assert_eq!(verses.get(&4).map(String::as_str), Some(GENESIS_5));
}

#[test]
fn test_extract_genesis_stats() {
    let extraction = extract(&fixture("genesis1.html"), &ExtractOptions::default());
    let stats = extraction.stats;

    assert!(stats.container_found);
    assert_eq!(stats.elements, 8);
    assert_eq!(stats.recorded, 4);
    assert_eq!(stats.continued, 1);
    assert_eq!(stats.unparsed_markers, 4);
    // Both leading headings land before the first marker.
    assert_eq!(stats.skipped_out_of_range, 2);
    // The all-caps heading cleans to nothing.
    assert_eq!(stats.skipped_empty, 1);
}

#[test]
fn test_only_first_container_is_read() {
    let verses = extract_verses(&fixture("genesis1.html"), &ExtractOptions::default());
    assert!(verses.values().all(|text| !text.contains("second translation")));
    assert!(!verses.contains_key(&8));
}

#[test]
fn test_missing_container_yields_empty_map() {
    let extraction = extract(&fixture("no_results.html"), &ExtractOptions::default());
    assert!(extraction.verses.is_empty());
    assert!(!extraction.stats.container_found);
    assert_eq!(extraction.stats.elements, 0);
}

#[test]
fn test_empty_and_garbage_documents() {
    assert!(extract_verses("", &ExtractOptions::default()).is_empty());
    assert!(extract_verses("not html at all <<<>>>", &ExtractOptions::default()).is_empty());
}

#[test]
fn test_every_marker_in_bound_is_keyed_one_lower() {
    let markers: Vec<String> = (1..=58).map(|n| n.to_string()).collect();
    let elements: Vec<(Option<&str>, &str)> = markers
        .iter()
        .map(|marker| (Some(marker.as_str()), "And it was so."))
        .collect();

    let verses = extract_verses(&passage_page(&elements), &ExtractOptions::default());

    // Marker 1 maps to key 0, which is outside the accepted range.
    assert_eq!(verses.len(), 57);
    assert_eq!(verses.keys().next(), Some(&1));
    assert_eq!(verses.keys().last(), Some(&57));
}

#[test]
fn test_out_of_range_keys_are_dropped() {
    let html = passage_page(&[
        (Some("1"), "key zero"),
        (Some("59"), "key fifty-eight"),
        (Some("60"), "key fifty-nine"),
        (None, "still fifty-nine"),
        (Some("-3"), "negative"),
    ]);
    let verses = extract_verses(&html, &ExtractOptions::default());

    assert_eq!(verses.len(), 1);
    assert_eq!(verses.get(&58).map(String::as_str), Some("key fifty-eight"));

    let options = ExtractOptions {
        verse_offset: VerseOffset::None,
        ..ExtractOptions::default()
    };
    let verses = extract_verses(&passage_page(&[(Some("0"), "zero"), (Some("59"), "over")]), &options);
    assert!(verses.is_empty());
}

#[test]
fn test_custom_upper_bound() {
    let options = ExtractOptions {
        max_verse: 2,
        verse_offset: VerseOffset::None,
        ..ExtractOptions::default()
    };
    let html = passage_page(&[(Some("1"), "one"), (Some("2"), "two"), (Some("3"), "three")]);
    let verses = extract_verses(&html, &options);
    assert_eq!(verses.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_unmarked_element_replaces_current_verse() {
    let html = passage_page(&[
        (Some("2"), "The LORD is my shepherd;"),
        (None, "I shall not want."),
    ]);
    let extraction = extract(&html, &ExtractOptions::default());

    assert_eq!(extraction.verses.len(), 1);
    assert_eq!(
        extraction.verses.get(&1).map(String::as_str),
        Some("I shall not want.")
    );
    assert_eq!(extraction.stats.recorded, 1);
    assert_eq!(extraction.stats.continued, 1);
}

#[test]
fn test_unparseable_marker_continues_current_verse() {
    let html = passage_page(&[
        (Some("3"), "Blessed is the man"),
        (Some("a"), "who walks not"),
        (None, "in the counsel of the ungodly,"),
        (Some("4"), "But his delight"),
    ]);

    let verses = extract_verses(&html, &ExtractOptions::default());
    assert_eq!(
        verses.get(&2).map(String::as_str),
        Some("in the counsel of the ungodly,")
    );
    assert_eq!(verses.get(&3).map(String::as_str), Some("But his delight"));

    let options = ExtractOptions {
        continuation: Continuation::Append,
        ..ExtractOptions::default()
    };
    let verses = extract_verses(&html, &options);
    assert_eq!(
        verses.get(&2).map(String::as_str),
        Some("Blessed is the man who walks not in the counsel of the ungodly,")
    );
    assert_eq!(verses.get(&3).map(String::as_str), Some("But his delight"));
}

#[test]
fn test_unmarked_element_before_any_marker_is_dropped() {
    let html = passage_page(&[(None, "Preface"), (Some("2"), "first verse")]);
    let extraction = extract(&html, &ExtractOptions::default());

    assert_eq!(extraction.verses.len(), 1);
    assert_eq!(extraction.stats.skipped_out_of_range, 1);
}

#[test]
fn test_repeated_marker_starts_the_verse_over() {
    let html = passage_page(&[(Some("6"), "first reading"), (Some("6"), "second reading")]);
    let verses = extract_verses(&html, &ExtractOptions::default());
    assert_eq!(verses.get(&5).map(String::as_str), Some("second reading"));
}

#[test]
fn test_annotation_only_verses_are_skipped() {
    let html = passage_page(&[
        (Some("7"), "(A)"),
        (Some("8"), "[a][m2]"),
        (Some("9"), "THE GENEALOGY OF ADAM"),
        (Some("10"), "This is the book of the genealogy of Adam.[b]"),
    ]);
    let extraction = extract(&html, &ExtractOptions::default());

    assert_eq!(extraction.verses.len(), 1);
    assert_eq!(
        extraction.verses.get(&9).map(String::as_str),
        Some("This is the book of the genealogy of Adam.")
    );
    assert_eq!(extraction.stats.skipped_empty, 3);
}

#[test]
fn test_marker_text_removed_only_once() {
    let html = passage_page(&[(Some("12"), "He lived 12 years")]);
    let verses = extract_verses(&html, &ExtractOptions::default());
    assert_eq!(verses.get(&11).map(String::as_str), Some("He lived 12 years"));
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let _ = extract(&html, &ExtractOptions::default());
        }

        #[test]
        fn test_keys_respect_bound(
            markers in proptest::collection::vec("-?[0-9]{1,3}|[a-z ]{0,3}", 0..40),
            text in "[A-Za-z ,.\\[\\]()]{0,30}",
        ) {
            let elements: Vec<(Option<&str>, &str)> = markers
                .iter()
                .map(|marker| (Some(marker.as_str()), text.as_str()))
                .collect();
            let verses = extract_verses(&passage_page(&elements), &ExtractOptions::default());
            prop_assert!(verses.keys().all(|key| (1..=58).contains(key)));
            prop_assert!(verses.values().all(|text| !text.is_empty()));
        }
    }
}
