use crate::fetcher::types::{Charset, PageResponse};
use bytes::Bytes;
use chrono::Utc;
use encoding_rs::Encoding;
use regex::Regex;
use reqwest::StatusCode;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

/// How far into the body we look for a `<meta>` charset declaration.
const SNIFF_LEN: usize = 4096;

static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

pub fn process_response(
    url_final: Url,
    status: StatusCode,
    body_bytes: Bytes,
    content_type: &str,
) -> PageResponse {
    let charset = detect_charset(content_type, &body_bytes);
    let body_utf8 = decode_to_utf8(&body_bytes, &charset);

    PageResponse {
        url_final,
        status,
        body_raw: body_bytes,
        body_utf8,
        charset,
        fetched_at: Utc::now(),
    }
}

/// Header charset first, then `<meta charset>`, then `<meta http-equiv>`,
/// then a heuristic guess over the sniffed prefix.
fn detect_charset(content_type: &str, body_bytes: &[u8]) -> Charset {
    if let Some(encoding) = declared_encoding(&CHARSET_REGEX, content_type) {
        return Charset::from_encoding(encoding);
    }

    let sniffed = &body_bytes[..body_bytes.len().min(SNIFF_LEN)];
    let head = String::from_utf8_lossy(sniffed);

    for regex in [&*META_CHARSET_REGEX, &*META_HTTP_EQUIV_REGEX] {
        if let Some(encoding) = declared_encoding(regex, &head) {
            return Charset::from_encoding(encoding);
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(sniffed, sniffed.len() == body_bytes.len());
    Charset::from_encoding(detector.guess(None, true))
}

fn declared_encoding(regex: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = regex.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}

/// Malformed sequences become U+FFFD; the page is still worth parsing.
fn decode_to_utf8(body_bytes: &[u8], charset: &Charset) -> String {
    let encoding = charset.encoding();
    let (decoded, had_errors) = encoding.decode_without_bom_handling(body_bytes);

    if had_errors {
        debug!(
            encoding = encoding.name(),
            "body had malformed sequences, decoded with replacement characters"
        );
    }

    decoded.into_owned()
}
