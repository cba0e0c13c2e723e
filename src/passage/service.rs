use tracing::{info, instrument, warn};

use crate::extractor::{ExtractOptions, extract};
use crate::passage::{PassageError, PassageRequest, PassageResult, PassageSource};

/// Fetch and extract one passage.
///
/// `Ok(None)` means the upstream page could not be obtained. A page that
/// simply holds no verses is still `Ok(Some(..))` with an empty map.
#[instrument(
    skip_all,
    fields(book = %request.book, chapter = ?request.chapter, version = %request.version)
)]
pub async fn lookup(
    source: &dyn PassageSource,
    request: PassageRequest,
    options: ExtractOptions,
) -> Result<Option<PassageResult>, PassageError> {
    let Some(chapter) = request.chapter else {
        info!("chapter is not a positive integer, returning an empty passage");
        return Ok(Some(PassageResult::empty(request)));
    };

    let html = match source
        .fetch_html(&request.book, chapter, &request.version)
        .await
    {
        Ok(html) => html,
        Err(error) => {
            warn!(
                %error,
                upstream_status = error.upstream_status().map(|status| status.as_u16()),
                "failed to fetch passage"
            );
            return Ok(None);
        }
    };

    // The parsed DOM is !Send and parsing is CPU bound.
    let extraction = tokio::task::spawn_blocking(move || extract(&html, &options)).await?;

    info!(verses = extraction.verses.len(), "passage extracted");
    Ok(Some(PassageResult::new(request, extraction.verses)))
}
