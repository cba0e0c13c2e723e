use async_trait::async_trait;

use crate::fetcher::{FetchError, Fetcher};

/// Where passage pages come from. `Fetcher` is the production source.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PassageSource: Send + Sync {
    /// Raw HTML for one chapter of `book` in `version`.
    async fn fetch_html(
        &self,
        book: &str,
        chapter: u32,
        version: &str,
    ) -> Result<String, FetchError>;
}

#[async_trait]
impl PassageSource for Fetcher {
    async fn fetch_html(
        &self,
        book: &str,
        chapter: u32,
        version: &str,
    ) -> Result<String, FetchError> {
        let page = self.fetch_passage(book, chapter, version).await?;
        Ok(page.body_utf8)
    }
}
