//! Error types for escroll
//!
//! Every failure in a scroll session is terminal. Nothing in the core recovers
//! locally: errors travel up as `Result<T, Error>` to the CLI runner, which
//! turns the [`ErrorKind`] into a log line and an exit status.

use thiserror::Error;

/// The main error type for escroll
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Session Errors
    // ============================================================================
    #[error("Refusing to run: {message}")]
    PolicyViolation { message: String },

    #[error("Invalid request: {message}")]
    Validation { message: String },

    #[error("Cannot reach search backend: {message}")]
    Connectivity { message: String },

    #[error("{}", fetch_message(*status, body))]
    Fetch { status: Option<u16>, body: String },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Scroll cancelled")]
    Cancelled,

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // Configuration and I/O Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("{0}")]
    Other(String),
}

fn fetch_message(status: Option<u16>, body: &str) -> String {
    match status {
        Some(status) => format!("Fetch failed with HTTP {status}: {body}"),
        None => format!("Fetch failed: {body}"),
    }
}

/// Coarse classification of an [`Error`], used to pick an exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    PolicyViolation,
    Validation,
    Connectivity,
    Fetch,
    Decode,
    Cancelled,
    Other,
}

impl ErrorKind {
    /// Process exit status for this kind of failure
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Other => 1,
            ErrorKind::Validation => 2,
            ErrorKind::PolicyViolation => 3,
            ErrorKind::Connectivity => 4,
            ErrorKind::Fetch => 5,
            ErrorKind::Decode => 6,
            ErrorKind::Cancelled => 130,
        }
    }
}

impl Error {
    /// Create a policy violation error
    pub fn policy(message: impl Into<String>) -> Self {
        Self::PolicyViolation {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a connectivity error
    pub fn connectivity(message: impl Into<String>) -> Self {
        Self::Connectivity {
            message: message.into(),
        }
    }

    /// Create a fetch error for a non-success HTTP status
    pub fn fetch_status(status: u16, body: impl Into<String>) -> Self {
        Self::Fetch {
            status: Some(status),
            body: body.into(),
        }
    }

    /// Create a fetch error for a transport failure (no status available)
    pub fn fetch_transport(message: impl Into<String>) -> Self {
        Self::Fetch {
            status: None,
            body: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::PolicyViolation { .. } => ErrorKind::PolicyViolation,
            Error::Validation { .. } => ErrorKind::Validation,
            Error::Connectivity { .. } => ErrorKind::Connectivity,
            Error::Fetch { .. } => ErrorKind::Fetch,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Cancelled => ErrorKind::Cancelled,
            _ => ErrorKind::Other,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}

/// Result type alias for escroll
pub type Result<T> = std::result::Result<T, Error>;
