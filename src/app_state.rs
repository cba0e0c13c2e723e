use std::sync::Arc;

use crate::config::Config;
use crate::extractor::ExtractOptions;
use crate::fetcher::{FetchError, Fetcher};
use crate::passage::PassageSource;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PassageSource>,
    pub options: ExtractOptions,
    pub default_version: Arc<str>,
}

impl AppState {
    pub fn new(
        source: Arc<dyn PassageSource>,
        options: ExtractOptions,
        default_version: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            source,
            options,
            default_version: default_version.into(),
        }
    }

    /// Production state: an HTTP fetcher against the configured upstream.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let fetcher = Fetcher::new(config.upstream_base_url().clone(), config.fetch_timeout())?;
        Ok(Self::new(
            Arc::new(fetcher),
            config.extract_options(),
            config.default_version(),
        ))
    }
}
