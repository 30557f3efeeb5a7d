//! Top-level parse entry point.
//!
//! [`UrlParser`] lowercases a URL for matching, asks its [`ParserRegistry`]
//! for the first matching prefix and hands the original URL to that parser.
//! [`UrlParser::parse`] never fails: empty input, an unmatched prefix or a
//! vendor error all come back as [`UNKNOWN_CONNECTION_INFO`].
//!
//! ```rust
//! use jdbcinfo_parser::{DatabaseVendor, UrlParser};
//!
//! let parser = UrlParser::new();
//!
//! let info = parser.parse("JDBC:MYSQL://db.example.com:3306/Orders");
//! assert_eq!(info.vendor(), &DatabaseVendor::MySql);
//! assert_eq!(info.instance(), Some("Orders"));
//!
//! assert!(parser.parse("jdbc:sqlite:memory").is_unknown());
//! assert!(parser.parse("jdbc:mysql://").is_unknown());
//! assert!(parser.parse("").is_unknown());
//! ```

use crate::env::{DEFAULT_URL_VAR, EnvSource, StdEnvSource};
use crate::error::{ParseError, ParseResult, RegistryResult};
use crate::info::{ConnectionInfo, UNKNOWN_CONNECTION_INFO};
use crate::parser::ConnectionUrlParser;
use crate::registry::{ParserRegistry, SharedParser};
use smol_str::SmolStr;
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace, warn};

static GLOBAL: LazyLock<UrlParser> = LazyLock::new(UrlParser::new);

/// Get the process-wide parser, created with the built-in vendors on first use.
pub fn global() -> &'static UrlParser {
    &GLOBAL
}

/// Parse a URL with the process-wide parser.
pub fn parse(url: &str) -> ConnectionInfo {
    GLOBAL.parse(url)
}

/// Register a parser on the process-wide parser.
pub fn register_connection_parser<P>(prefix: &str, parser: P) -> RegistryResult<()>
where
    P: ConnectionUrlParser + 'static,
{
    GLOBAL.register_connection_parser(prefix, parser)
}

/// Dispatches connection URLs to the registered vendor parsers.
///
/// Cloning is cheap and clones share the same registry.
#[derive(Debug, Clone)]
pub struct UrlParser {
    registry: Arc<ParserRegistry>,
}

impl UrlParser {
    /// Create a parser with the built-in vendors registered.
    pub fn new() -> Self {
        Self::with_registry(Arc::new(ParserRegistry::with_builtin()))
    }

    /// Create a parser with no vendors registered.
    pub fn empty() -> Self {
        Self::with_registry(Arc::new(ParserRegistry::new()))
    }

    /// Create a parser over an existing registry.
    pub fn with_registry(registry: Arc<ParserRegistry>) -> Self {
        Self { registry }
    }

    /// Get the underlying registry.
    pub fn registry(&self) -> &Arc<ParserRegistry> {
        &self.registry
    }

    /// Register a parser for a URL prefix. Replaces any parser already
    /// registered for the same (case-insensitive) prefix.
    pub fn register_connection_parser<P>(&self, prefix: &str, parser: P) -> RegistryResult<()>
    where
        P: ConnectionUrlParser + 'static,
    {
        self.registry.register(prefix, parser)
    }

    /// Parse a URL into connection info.
    ///
    /// Returns [`UNKNOWN_CONNECTION_INFO`] when the URL is empty, matches no
    /// registered prefix, or is rejected by the matched parser. Parser
    /// failures are logged at WARN.
    pub fn parse(&self, url: &str) -> ConnectionInfo {
        if url.is_empty() {
            return UNKNOWN_CONNECTION_INFO.clone();
        }

        let Some((prefix, parser)) = self.lookup(url) else {
            trace!(url_len = url.len(), "No connection parser matches URL");
            return UNKNOWN_CONNECTION_INFO.clone();
        };

        match parser.parse(url) {
            Ok(info) => {
                debug!(
                    prefix = %prefix,
                    vendor = %info.vendor(),
                    peer = info.peer(),
                    "Connection URL parsed"
                );
                info
            }
            Err(e) => {
                warn!(prefix = %prefix, error = %e, "error occurs when parsing jdbc url");
                UNKNOWN_CONNECTION_INFO.clone()
            }
        }
    }

    /// Parse a URL, reporting why it could not be parsed.
    ///
    /// Unlike [`parse`](Self::parse) this neither logs nor falls back.
    pub fn try_parse(&self, url: &str) -> ParseResult<ConnectionInfo> {
        if url.is_empty() {
            return Err(ParseError::EmptyUrl);
        }
        let (_, parser) = self.lookup(url).ok_or(ParseError::UnsupportedUrl)?;
        parser.parse(url)
    }

    /// Parse the URL held in an environment variable.
    ///
    /// A missing variable yields [`UNKNOWN_CONNECTION_INFO`].
    pub fn parse_env(&self, var: &str) -> ConnectionInfo {
        self.parse_env_from(&StdEnvSource, var)
    }

    /// Parse the URL held in [`DEFAULT_URL_VAR`].
    pub fn parse_default_env(&self) -> ConnectionInfo {
        self.parse_env(DEFAULT_URL_VAR)
    }

    /// Parse the URL held in a variable of a custom environment source.
    pub fn parse_env_from<S: EnvSource + ?Sized>(&self, source: &S, var: &str) -> ConnectionInfo {
        match source.get(var) {
            Some(url) => self.parse(&url),
            None => {
                debug!(var, "Connection URL variable not set");
                ConnectionInfo::unknown()
            }
        }
    }

    /// Strict variant of [`parse_env_from`](Self::parse_env_from).
    pub fn try_parse_env_from<S: EnvSource + ?Sized>(
        &self,
        source: &S,
        var: &str,
    ) -> ParseResult<ConnectionInfo> {
        let url = source
            .get(var)
            .ok_or_else(|| ParseError::EnvNotFound(var.to_string()))?;
        self.try_parse(&url)
    }

    fn lookup(&self, url: &str) -> Option<(SmolStr, SharedParser)> {
        self.registry.find_match(&url.to_lowercase())
    }
}

impl Default for UrlParser {
    fn default() -> Self {
        Self::new()
    }
}
