use crate::fetcher::{errors::FetchError, pipeline::process_response, types::PageResponse};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_REDIRECTS: usize = 10;
const USER_AGENT: &str = concat!("passage-api/", env!("CARGO_PKG_VERSION"));

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// HTTP client bound to one upstream passage page.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    base_url: Url,
}

impl Fetcher {
    /// `timeout` bounds the whole request; `None` leaves it unbounded.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );

        let mut builder = ClientBuilder::new()
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Download the upstream page for one chapter.
    pub async fn fetch_passage(
        &self,
        book: &str,
        chapter: u32,
        version: &str,
    ) -> Result<PageResponse, FetchError> {
        let url = passage_url(&self.base_url, book, chapter, version);
        self.fetch(url.as_str()).await
    }

    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch(&self, url: &str) -> Result<PageResponse, FetchError> {
        let parsed_url = Url::parse(url)?;

        let response = self
            .client
            .get(parsed_url)
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        // Check content length before downloading
        if let Some(content_length) = response.content_length()
            && content_length > MAX_BODY_SIZE
        {
            return Err(FetchError::BodyTooLarge(content_length));
        }

        let final_url = response.url().clone();
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Http { status });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("text/html")
            .to_string();

        let body_bytes = response
            .bytes()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        // Content-Length may be missing or wrong for compressed bodies
        if body_bytes.len() as u64 > MAX_BODY_SIZE {
            return Err(FetchError::BodyTooLarge(body_bytes.len() as u64));
        }

        let page = process_response(final_url, status, body_bytes, &content_type);
        debug!(
            status = %page.status,
            charset = ?page.charset,
            bytes = page.body_raw.len(),
            fetched_at = %page.fetched_at,
            "fetched upstream page"
        );
        Ok(page)
    }
}

/// Build `base?search=<book>+<chapter>&version=<version>`.
///
/// The `+` stays literal: upstream reads it as the space between book and
/// chapter, while spaces inside the book name become `%20`.
pub fn passage_url(base: &Url, book: &str, chapter: u32, version: &str) -> Url {
    let query = format!(
        "search={}+{}&version={}",
        utf8_percent_encode(book, COMPONENT),
        chapter,
        utf8_percent_encode(version, COMPONENT),
    );
    let mut url = base.clone();
    url.set_query(Some(&query));
    url
}
