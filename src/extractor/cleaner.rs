use regex::Regex;
use std::sync::LazyLock;

// Cross references such as (A) or (AB).
static CROSS_REFERENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([A-Z]+\)").unwrap());

// Footnotes such as [a].
static FOOTNOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[a-z]\]").unwrap());

// Any other bracketed annotation such as [m2] or [aa].
static ANNOTATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[a-z0-9]+\]").unwrap());

// A section heading that ended up on its own, e.g. "THE CREATION".
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z\s]+$").unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Strip annotation markers and headings from a verse, then normalize
/// whitespace. The result may be empty.
pub fn clean_verse_text(text: &str) -> String {
    let text = CROSS_REFERENCE.replace_all(text, "");
    let text = FOOTNOTE.replace_all(&text, "");
    let text = ANNOTATION.replace_all(&text, "");

    if HEADING.is_match(&text) {
        return String::new();
    }

    WHITESPACE.replace_all(&text, " ").trim().to_string()
}
