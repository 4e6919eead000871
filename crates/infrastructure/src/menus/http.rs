use async_trait::async_trait;
use menuvault_application::ports::MenuSource;
use menuvault_domain::{DomainError, MenuType};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Fetches menu envelopes from an upstream serving `GET /api/menus/{type}`.
///
/// Only transport concerns are handled here: a non-2xx status, a connection
/// failure or a body that is not JSON become `DomainError::Transport`. The
/// envelope's own `code` is left for the orchestrator to validate.
pub struct HttpMenuSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpMenuSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            DomainError::InvalidParameter(format!("invalid upstream URL '{base_url}': {e}"))
        })?;

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    pub fn endpoint(&self, menu: MenuType) -> String {
        format!(
            "{}/api/menus/{}",
            self.base_url.as_str().trim_end_matches('/'),
            menu
        )
    }
}

#[async_trait]
impl MenuSource for HttpMenuSource {
    #[instrument(skip(self))]
    async fn fetch(&self, menu: MenuType) -> Result<Value, DomainError> {
        let url = self.endpoint(menu);
        debug!(url = %url, "Requesting upstream menu");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Transport(format!(
                "{} returned HTTP {}: {}",
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| DomainError::Transport(format!("invalid JSON from {url}: {e}")))
    }
}
