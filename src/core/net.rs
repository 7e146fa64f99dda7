// src/core/net.rs
//
// Form-encoded POST to the single remote endpoint. Every remote operation is
// selected by the `method` form field, so one primitive covers them all.

use std::io::Read;
use std::time::Duration;

use thiserror::Error;

use crate::config::consts::{HTTP_TIMEOUT_SECS, ORIGIN, REFERER, USER_AGENT};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP {code} from {url}")]
    Status { code: u16, url: String },
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("failed to read response body: {0}")]
    Body(#[from] std::io::Error),
}

impl TransportError {
    /// The authenticated client itself is unusable: the credential was rejected.
    /// Nothing session-scoped can recover from this, so it aborts the run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, TransportError::Status { code: 401 | 403, .. })
    }
}

/// The authenticated client as seen by the harvest.
///
/// Implementations already carry valid authentication state.
pub trait Transport {
    /// Post `params` form-encoded and return the response body as text.
    fn post_form(&self, params: &[(&str, &str)]) -> Result<String, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_form(&self, params: &[(&str, &str)]) -> Result<String, TransportError> {
        (**self).post_form(params)
    }
}

/// Blocking client over a `ureq` agent, authenticated by a browser session cookie.
pub struct UreqClient {
    agent: ureq::Agent,
    endpoint: String,
    cookie: String,
}

impl UreqClient {
    pub fn new(endpoint: impl Into<String>, cookie: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, cookie, Duration::from_secs(HTTP_TIMEOUT_SECS))
    }

    pub fn with_timeout(endpoint: impl Into<String>, cookie: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();
        Self { agent, endpoint: endpoint.into(), cookie: cookie.into() }
    }
}

impl Transport for UreqClient {
    fn post_form(&self, params: &[(&str, &str)]) -> Result<String, TransportError> {
        let resp = self
            .agent
            .post(&self.endpoint)
            .set("Cookie", &self.cookie)
            .set("Referer", REFERER)
            .set("Origin", ORIGIN)
            .set("X-Requested-With", "XMLHttpRequest")
            .send_form(params)
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => TransportError::Status {
                    code,
                    url: self.endpoint.clone(),
                },
                ureq::Error::Transport(t) => TransportError::Network {
                    url: self.endpoint.clone(),
                    message: t.to_string(),
                },
            })?;

        // `into_string` caps bodies at 10 MB; bulk shot payloads can be larger.
        let mut body = String::new();
        resp.into_reader().read_to_string(&mut body)?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_auth_rejections_are_fatal() {
        let status = |code| TransportError::Status { code, url: "x".into() };
        assert!(status(401).is_fatal());
        assert!(status(403).is_fatal());
        assert!(!status(500).is_fatal());
        assert!(!status(404).is_fatal());

        let net = TransportError::Network { url: "x".into(), message: "reset".into() };
        assert!(!net.is_fatal());
    }
}
