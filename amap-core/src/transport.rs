use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use thiserror::Error;

/// Successful transport result: status line plus the raw body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// A failed transport call. Non-2xx statuses are reported here as well,
/// carrying the status in `code`; pure network failures have no code.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    pub code: Option<u16>,
}

impl TransportError {
    pub fn new(message: impl Into<String>, code: Option<u16>) -> Self {
        Self { message: message.into(), code }
    }

    fn from_reqwest(err: reqwest::Error) -> Self {
        let code = err.status().map(|status| status.as_u16());
        Self { message: err.to_string(), code }
    }
}

/// Abstraction over the network GET request, so tests can substitute a mock
/// without touching the wire.
#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse, TransportError>;
}

/// Configuration applied to the transport when it is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportOptions {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl TransportOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    fn apply(&self, mut builder: reqwest::ClientBuilder) -> reqwest::ClientBuilder {
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        builder
    }
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    options: TransportOptions,
}

impl ReqwestTransport {
    pub fn new(options: TransportOptions) -> Self {
        Self { options }
    }

    /// The options this transport was built with.
    pub fn options(&self) -> &TransportOptions {
        &self.options
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse, TransportError> {
        let client = self
            .options
            .apply(reqwest::Client::builder())
            .build()
            .map_err(TransportError::from_reqwest)?;

        let res = client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(TransportError::from_reqwest)?;

        let status = res.status();
        let body = res.text().await.map_err(TransportError::from_reqwest)?;

        if !status.is_success() {
            return Err(TransportError::new(
                format!("weather request failed with status {}: {}", status, truncate_body(&body)),
                Some(status.as_u16()),
            ));
        }

        Ok(HttpResponse { status: status.as_u16(), body })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_reflects_its_options() {
        let options = TransportOptions::default()
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("amap-core-test");

        let transport = ReqwestTransport::new(options.clone());
        assert_eq!(transport.options(), &options);
        assert_eq!(transport.options().timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn default_options_are_empty() {
        let options = TransportOptions::default();
        assert!(options.timeout.is_none());
        assert!(options.connect_timeout.is_none());
        assert!(options.user_agent.is_none());
    }

    #[test]
    fn transport_error_display_is_the_message() {
        let err = TransportError::new("request timeout", None);
        assert_eq!(err.to_string(), "request timeout");
    }

    #[test]
    fn truncate_body_limits_long_bodies() {
        let long = "x".repeat(300);
        let truncated = truncate_body(&long);
        assert!(truncated.len() < long.len());
        assert!(truncated.ends_with("..."));

        assert_eq!(truncate_body("short"), "short");
    }
}
