use thiserror::Error;

/// Errors surfaced by [`crate::WeatherClient`].
#[derive(Debug, Error)]
pub enum Error {
    /// A `type`/`format` argument outside the accepted set. Raised before any
    /// network call; the caller must fix the input.
    #[error("{0}")]
    InvalidArgument(String),

    /// The transport failed (timeout, connection failure, non-2xx status).
    /// Carries the underlying message and status code when one exists.
    #[error("{message}")]
    Http { message: String, code: Option<u16> },

    /// Upstream returned a body that is not valid JSON although `output=json`
    /// was requested.
    #[error("failed to decode json response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Http { code, .. } => *code,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_displays_message_verbatim() {
        let err = Error::InvalidArgument("Invalid type value(base/all): foo".to_string());
        assert_eq!(err.to_string(), "Invalid type value(base/all): foo");
    }

    #[test]
    fn http_error_displays_underlying_message() {
        let err = Error::Http { message: "request timeout".to_string(), code: None };
        assert_eq!(err.to_string(), "request timeout");
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn http_error_carries_status_code() {
        let err = Error::Http { message: "upstream said no".to_string(), code: Some(502) };
        assert_eq!(err.status_code(), Some(502));
    }
}
