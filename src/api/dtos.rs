use serde::{Deserialize, Serialize};
use url::form_urlencoded;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PassageQuery {
    /// Translation code, e.g. `NKJV` or `ESV`.
    pub version: Option<String>,
}

impl PassageQuery {
    /// Read the raw query string. Unknown keys are ignored and the first
    /// `version` wins when it is repeated.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let version = raw.and_then(|raw| {
            form_urlencoded::parse(raw.as_bytes())
                .find(|(key, _)| key == "version")
                .map(|(_, value)| value.into_owned())
        });
        Self { version }
    }

    /// The requested version, or `default` when absent or empty.
    pub fn version_or(self, default: &str) -> String {
        self.version
            .filter(|version| !version.is_empty())
            .unwrap_or_else(|| default.to_string())
    }
}
