//! Error types for URL parsing and parser registration.
//!
//! Parse errors never carry the URL itself, since JDBC URLs routinely embed
//! credentials and these errors end up in logs.
//!
//! ```rust
//! use jdbcinfo_parser::{ParseError, RegistryError};
//!
//! let err = ParseError::InvalidPort("abc".to_string());
//! assert_eq!(err.to_string(), "Invalid port number: abc");
//!
//! let err = RegistryError::InvalidArgument("prefix");
//! assert!(err.to_string().contains("prefix"));
//! ```

use thiserror::Error;

/// Errors raised by a vendor parser or by the strict dispatch path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The URL was empty.
    #[error("Connection URL is empty")]
    EmptyUrl,

    /// No registered prefix matches the URL.
    #[error("No parser registered for this connection URL")]
    UnsupportedUrl,

    /// The URL matched a vendor but names no host.
    #[error("Connection URL has no host")]
    MissingHost,

    /// A structural part of the URL is missing.
    #[error("Connection URL is missing '{0}'")]
    MissingSection(&'static str),

    /// The port is empty, non-numeric or out of range.
    #[error("Invalid port number: {0}")]
    InvalidPort(String),

    /// The host could not be read (e.g. an unterminated IPv6 literal).
    #[error("Invalid host: {0}")]
    InvalidHost(String),

    /// Environment variable not found.
    #[error("Environment variable not found: {0}")]
    EnvNotFound(String),
}

/// Errors raised when registering a parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A required registration argument was absent.
    #[error("Invalid argument: {0} can not be empty")]
    InvalidArgument(&'static str),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
