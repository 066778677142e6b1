//! Error types for the bootcamp API client.
//!
//! # Design
//! Not-found has no variant of its own: every non-2xx response lands in
//! `HttpStatus` with the raw status and body so the caller can show the
//! server's own error detail. `is_not_found` covers the common check.

use thiserror::Error;

/// Errors returned by the request builder, response parser and transport.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response: DNS, connection, or deadline.
    #[error("transport error: {message}")]
    Transport { message: String, timed_out: bool },

    /// The server answered with a status other than 200 or 201.
    #[error("status: {status}, body: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body is not valid JSON or has the wrong shape.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("encode failed: {0}")]
    Encode(String),
}

impl ApiError {
    /// The HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport { timed_out: true, .. })
    }
}

/// Errors raised while resolving provider configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "missing or empty host: set the host value in the configuration or use the HOST environment variable"
    )]
    MissingHost,

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// A failed resource lifecycle step, naming what was being attempted.
#[derive(Debug, Error)]
#[error("{context}: {source}")]
pub struct ResourceError {
    pub context: String,
    #[source]
    pub source: ApiError,
}

impl ResourceError {
    pub fn new(context: impl Into<String>, source: ApiError) -> Self {
        Self {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_display_includes_body() {
        let err = ApiError::HttpStatus {
            status: 422,
            body: "name is required".to_string(),
        };
        assert_eq!(err.to_string(), "status: 422, body: name is required");
        assert_eq!(err.status(), Some(422));
        assert!(!err.is_not_found());
    }

    #[test]
    fn transport_errors_carry_no_status() {
        let err = ApiError::Transport {
            message: "timed out".to_string(),
            timed_out: true,
        };
        assert_eq!(err.status(), None);
        assert!(err.is_timeout());
    }

    #[test]
    fn resource_error_prefixes_context() {
        let err = ResourceError::new(
            "could not read dev D1",
            ApiError::HttpStatus {
                status: 404,
                body: "not found".to_string(),
            },
        );
        assert_eq!(err.to_string(), "could not read dev D1: status: 404, body: not found");
        assert!(err.source.is_not_found());
    }
}
