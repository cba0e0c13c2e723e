#![no_main]

use libfuzzer_sys::fuzz_target;

use passage::extractor::{ExtractOptions, clean_verse_text, extract};

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let html = String::from_utf8_lossy(data);

    // The extractor should never panic regardless of input
    let extraction = extract(&html, &ExtractOptions::default());
    assert!(extraction.verses.keys().all(|key| (1..=58).contains(key)));

    let _ = clean_verse_text(&html);
});
