//! Generic UAPI client.
//!
//! [`UapiClient`] owns the connection settings and a pooled
//! [`reqwest::Client`]. Each [`call`](UapiClient::call) is exactly one
//! authenticated round trip: build the `/execute/{module}/{function}`
//! URL, send the parameters as query pairs, check the HTTP status,
//! unwrap the response envelope. There are no retries and no pagination.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::CpanelConfig;
use crate::error::{Result, UapiError};
use crate::types::UapiResponse;

/// Fixed request timeout. Expiry surfaces as [`UapiError::Transport`].
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connects to one cPanel account via API token and makes UAPI calls.
///
/// Cheap to share: the underlying HTTP client pools connections and is
/// safe for concurrent use, and the configuration is immutable.
pub struct UapiClient {
    config: CpanelConfig,
    http: reqwest::Client,
}

impl UapiClient {
    /// Create a client from connection settings.
    pub fn new(config: CpanelConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { config, http })
    }

    /// Returns the connection settings.
    pub fn config(&self) -> &CpanelConfig {
        &self.config
    }

    /// The URL for a UAPI function, `{base}/execute/{module}/{function}`.
    fn execute_url(&self, module: &str, function: &str) -> String {
        format!("{}/execute/{module}/{function}", self.config.base_url())
    }

    /// Call a UAPI function and return its `data` payload.
    ///
    /// `module` is the UAPI module (e.g. `"Email"`), `function` the
    /// function within it (e.g. `"add_pop"`), and `params` the
    /// name/value pairs the function expects.
    ///
    /// Failures map onto the error kinds in [`UapiError`]: transport
    /// failures, non-2xx HTTP statuses, non-JSON bodies, and envelopes
    /// whose `status` reports failure (the remote error text is carried
    /// verbatim).
    pub async fn call(
        &self,
        module: &str,
        function: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value> {
        let url = self.execute_url(module, function);

        debug!(module, function, "calling cPanel UAPI");

        let response = self
            .http
            .get(&url)
            .header("Authorization", self.config.auth_header())
            .header("Content-Type", "application/json")
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(module, function, status = status.as_u16(), "UAPI request rejected");
            return Err(UapiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: UapiResponse = serde_json::from_str(&body)
            .map_err(|e| UapiError::InvalidResponse(format!("failed to parse envelope: {e}")))?;

        if !envelope.is_success() {
            let text = envelope.error_text();
            warn!(module, function, error = %text, "cPanel API reported failure");
            return Err(UapiError::Api(text));
        }

        debug!(module, function, "UAPI call succeeded");
        Ok(envelope.data)
    }
}

impl std::fmt::Debug for UapiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UapiClient")
            .field("config", &self.config)
            .finish()
    }
}
