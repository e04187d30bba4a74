//! Delivery of payloads to the lead-capture webhook.

use std::future::Future;
use std::time::Duration;

use ready_core::Payload;

use crate::error::SubmitError;
use crate::http::check_response;

/// Something that can deliver a payload once.
pub trait LeadTransport {
    /// POST the payload and return the HTTP status on success.
    fn post(&self, payload: &Payload) -> impl Future<Output = Result<u16, SubmitError>> + Send;

    /// Where payloads go, for logging.
    fn target(&self) -> &str;
}

/// reqwest-backed JSON POST to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Build a transport with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Http`] if the underlying client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("aiready/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

impl LeadTransport for HttpTransport {
    async fn post(&self, payload: &Payload) -> Result<u16, SubmitError> {
        let body = serde_json::to_vec(payload)?;
        let resp = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        Ok(resp.status().as_u16())
    }

    fn target(&self) -> &str {
        &self.endpoint
    }
}
