// src/error.rs - Structured error handling shared by the UI, API client, and platform layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Transport-level failure: the request never produced a well-formed
    /// application response (fetch rejected, connection refused, bad status).
    Network {
        status_code: Option<u16>,
        endpoint: Option<String>,
    },
    /// Application-level failure: the backend answered with a well-formed
    /// envelope carrying `success: false`.
    Api {
        endpoint: Option<String>,
    },
    /// Missing or rejected bearer token. Checked before any request is sent.
    Authentication {
        reason: String,
    },
    /// Platform feature unavailable (localStorage missing, fetch unsupported).
    Platform {
        platform: String,
        feature: String,
    },
    Configuration {
        key: Option<String>,
    },
    Validation {
        field: Option<String>,
    },
    Serialization,
    Io,
    Application,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub id: Uuid,
    pub kind: ErrorKind,
    pub message: String,
    pub severity: ErrorSeverity,
    pub source: String,
    pub timestamp: DateTime<Utc>,
    pub causes: Vec<String>,
}

impl Error {
    /// Creates a new error with the specified kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            severity: ErrorSeverity::Medium,
            source: "unknown".to_string(),
            timestamp: Utc::now(),
            causes: Vec::new(),
        }
    }

    /// Sets the error severity
    pub fn severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the error source
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Adds a cause to the error chain
    pub fn caused_by(mut self, cause: impl fmt::Display) -> Self {
        self.causes.push(cause.to_string());
        self
    }

    /// Creates a transport-level network error
    pub fn network(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Network {
                status_code: None,
                endpoint: Some(endpoint.into()),
            },
            message,
        )
    }

    /// Creates a network error carrying the HTTP status that came back
    pub fn http_status(endpoint: impl Into<String>, status_code: u16) -> Self {
        Self::new(
            ErrorKind::Network {
                status_code: Some(status_code),
                endpoint: Some(endpoint.into()),
            },
            format!("HTTP {}", status_code),
        )
    }

    /// Creates an application-level error from a `success: false` envelope
    pub fn api(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Api {
                endpoint: Some(endpoint.into()),
            },
            message,
        )
    }

    /// Creates an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        let msg = message.into();
        Self::new(ErrorKind::Authentication { reason: msg.clone() }, msg)
            .severity(ErrorSeverity::High)
    }

    /// Creates a platform-specific error
    pub fn platform(
        platform: impl Into<String>,
        feature: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            ErrorKind::Platform {
                platform: platform.into(),
                feature: feature.into(),
            },
            message,
        )
    }

    /// Creates a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration { key: None }, message).severity(ErrorSeverity::High)
    }

    /// Creates a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    /// True when the failure happened before any request went out
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication { .. })
    }

    /// Message suitable for the inline error banner on a page
    pub fn user_message(&self) -> String {
        match &self.kind {
            ErrorKind::Authentication { .. } => {
                "Authentication required. Please log in again.".to_string()
            }
            ErrorKind::Network { status_code, .. } => match status_code {
                Some(code) => format!("Request failed ({})", code),
                None => "Network error. Check your connection and try again.".to_string(),
            },
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.severity, self.source, self.id, self.message
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let mut error = Error::new(ErrorKind::Io, err.to_string());
        error.source = "std::io::Error".to_string();
        error.severity = ErrorSeverity::High;
        error
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::serialization(err.to_string()).source("serde_json")
    }
}

/// Extension trait for Results to add context
pub trait ResultExt<T> {
    /// Adds context to an error
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Sets the error source
    fn with_source(self, source: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Error::new(ErrorKind::Application, f()).caused_by(e))
    }

    fn with_source(self, source: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            Error::new(ErrorKind::Application, e.to_string())
                .source(source)
                .caused_by(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_error() {
        let error = Error::authentication("No token in session");
        assert!(error.is_authentication());
        assert_eq!(error.severity, ErrorSeverity::High);
        assert_eq!(
            error.user_message(),
            "Authentication required. Please log in again."
        );
    }

    #[test]
    fn test_network_error_with_status() {
        let error = Error::http_status("/api/admin/orders", 503);
        assert!(matches!(
            error.kind,
            ErrorKind::Network {
                status_code: Some(503),
                ..
            }
        ));
        assert_eq!(error.user_message(), "Request failed (503)");
    }

    #[test]
    fn test_api_error_surfaces_backend_message() {
        let error = Error::api("/api/reviews/admin/all", "Review not found");
        assert_eq!(error.user_message(), "Review not found");
        assert!(!error.is_authentication());
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let error = result
            .with_context(|| "reading session file".to_string())
            .unwrap_err();
        assert_eq!(error.message, "reading session file");
        assert_eq!(error.causes.len(), 1);
    }
}
