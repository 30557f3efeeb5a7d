//! Ordered prefix → parser registry.
//!
//! Lookup is first-match in insertion order, not longest match. When one
//! registered prefix is a textual prefix of another, whichever was registered
//! first wins for URLs that match both.
//!
//! ```rust
//! use jdbcinfo_parser::ParserRegistry;
//!
//! let registry = ParserRegistry::with_builtin();
//! assert_eq!(
//!     registry.prefixes(),
//!     ["jdbc:mysql", "jdbc:oracle", "jdbc:h2", "jdbc:postgresql"]
//! );
//! assert!(registry.find_parser("jdbc:h2:mem:test").is_some());
//! assert!(registry.find_parser("jdbc:sqlite:memory").is_none());
//! ```

use crate::error::{RegistryError, RegistryResult};
use crate::parser::ConnectionUrlParser;
use crate::vendor::{H2UrlParser, MySqlUrlParser, OracleUrlParser, PostgresUrlParser};
use indexmap::IndexMap;
use parking_lot::RwLock;
use smol_str::SmolStr;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Shared handle to a registered parser.
pub type SharedParser = Arc<dyn ConnectionUrlParser>;

/// Registry of URL prefix parsers.
///
/// Reads and writes share a reader/writer lock, so a registration is either
/// fully visible to a lookup or not at all. Re-registering an existing prefix
/// replaces its parser but keeps its original position.
#[derive(Default)]
pub struct ParserRegistry {
    parsers: RwLock<IndexMap<SmolStr, SharedParser>>,
}

impl ParserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in vendor parsers.
    ///
    /// MySQL goes first; the remaining order is Oracle, H2, PostgreSQL.
    pub fn with_builtin() -> Self {
        let builtin: [(&'static str, SharedParser); 4] = [
            (MySqlUrlParser::PREFIX, Arc::new(MySqlUrlParser)),
            (OracleUrlParser::PREFIX, Arc::new(OracleUrlParser)),
            (H2UrlParser::PREFIX, Arc::new(H2UrlParser)),
            (PostgresUrlParser::PREFIX, Arc::new(PostgresUrlParser)),
        ];

        let parsers: IndexMap<SmolStr, SharedParser> = builtin
            .into_iter()
            .map(|(prefix, parser)| (SmolStr::new_static(prefix), parser))
            .collect();

        Self {
            parsers: RwLock::new(parsers),
        }
    }

    /// Register a parser for a prefix, replacing any parser already there.
    ///
    /// The prefix is lowercased before it is stored. Empty or whitespace-only
    /// prefixes are rejected and leave the registry unchanged.
    pub fn register<P>(&self, prefix: &str, parser: P) -> RegistryResult<()>
    where
        P: ConnectionUrlParser + 'static,
    {
        self.register_shared(prefix, Arc::new(parser))
    }

    /// Register an already shared parser.
    pub fn register_shared(&self, prefix: &str, parser: SharedParser) -> RegistryResult<()> {
        if prefix.trim().is_empty() {
            return Err(RegistryError::InvalidArgument("urlPrefix"));
        }

        let prefix = SmolStr::new(prefix.to_lowercase());
        let replaced = self.parsers.write().insert(prefix.clone(), parser).is_some();
        debug!(prefix = %prefix, replaced, "Connection parser registered");
        Ok(())
    }

    /// Find the parser for an already lowercased URL.
    pub fn find_parser(&self, lowercase_url: &str) -> Option<SharedParser> {
        self.find_match(lowercase_url).map(|(_, parser)| parser)
    }

    /// Find the first matching prefix and its parser.
    ///
    /// The lock is released before returning, so the caller can run the
    /// parser without blocking registrations.
    pub fn find_match(&self, lowercase_url: &str) -> Option<(SmolStr, SharedParser)> {
        self.parsers
            .read()
            .iter()
            .find(|(prefix, _)| lowercase_url.starts_with(prefix.as_str()))
            .map(|(prefix, parser)| (prefix.clone(), Arc::clone(parser)))
    }

    /// Check whether a prefix is registered.
    pub fn contains(&self, prefix: &str) -> bool {
        self.parsers.read().contains_key(prefix.to_lowercase().as_str())
    }

    /// Get the registered prefixes in lookup order.
    pub fn prefixes(&self) -> Vec<SmolStr> {
        self.parsers.read().keys().cloned().collect()
    }

    /// Get the number of registered prefixes.
    pub fn len(&self) -> usize {
        self.parsers.read().len()
    }

    /// Check if no prefix is registered.
    pub fn is_empty(&self) -> bool {
        self.parsers.read().is_empty()
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("prefixes", &self.prefixes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseResult;
    use crate::info::{ConnectionInfo, DatabaseVendor};

    fn tagged(tag: &'static str) -> impl Fn(&str) -> ParseResult<ConnectionInfo> {
        move |_url: &str| {
            Ok(ConnectionInfo::builder(DatabaseVendor::other(tag))
                .endpoint("localhost", None)
                .build())
        }
    }

    fn vendor_of(registry: &ParserRegistry, url: &str) -> Option<String> {
        let parser = registry.find_parser(url)?;
        Some(parser.parse(url).unwrap().vendor().to_string())
    }

    #[test]
    fn test_builtin_order() {
        let registry = ParserRegistry::with_builtin();
        assert_eq!(registry.len(), 4);
        assert_eq!(
            registry.prefixes(),
            ["jdbc:mysql", "jdbc:oracle", "jdbc:h2", "jdbc:postgresql"]
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = ParserRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.find_parser("jdbc:mysql://localhost/db").is_none());
    }

    #[test]
    fn test_register_lowercases_prefix() {
        let registry = ParserRegistry::new();
        registry.register("JDBC:SQLite", tagged("sqlite")).unwrap();

        assert!(registry.contains("jdbc:sqlite"));
        assert!(registry.contains("JDBC:SQLITE"));
        assert_eq!(registry.prefixes(), ["jdbc:sqlite"]);
        assert_eq!(
            vendor_of(&registry, "jdbc:sqlite:memory").as_deref(),
            Some("sqlite")
        );
    }

    #[test]
    fn test_register_rejects_blank_prefix() {
        let registry = ParserRegistry::with_builtin();

        assert_eq!(
            registry.register("", tagged("x")),
            Err(RegistryError::InvalidArgument("urlPrefix"))
        );
        assert_eq!(
            registry.register("   ", tagged("x")),
            Err(RegistryError::InvalidArgument("urlPrefix"))
        );
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_first_registered_prefix_wins() {
        let registry = ParserRegistry::new();
        registry.register("jdbc:my", tagged("short")).unwrap();
        registry.register("jdbc:mysql", tagged("long")).unwrap();

        assert_eq!(
            vendor_of(&registry, "jdbc:mysql://h/db").as_deref(),
            Some("short")
        );
        assert_eq!(vendor_of(&registry, "jdbc:mydb").as_deref(), Some("short"));
    }

    #[test]
    fn test_specific_prefix_first_is_reachable() {
        let registry = ParserRegistry::new();
        registry.register("jdbc:mysql", tagged("long")).unwrap();
        registry.register("jdbc:my", tagged("short")).unwrap();

        assert_eq!(
            vendor_of(&registry, "jdbc:mysql://h/db").as_deref(),
            Some("long")
        );
        assert_eq!(vendor_of(&registry, "jdbc:mydb").as_deref(), Some("short"));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let registry = ParserRegistry::new();
        registry.register("jdbc:a", tagged("a1")).unwrap();
        registry.register("jdbc:b", tagged("b")).unwrap();
        registry.register("jdbc:a", tagged("a2")).unwrap();

        assert_eq!(registry.prefixes(), ["jdbc:a", "jdbc:b"]);
        assert_eq!(vendor_of(&registry, "jdbc:a:x").as_deref(), Some("a2"));
    }

    #[test]
    fn test_find_match_reports_prefix() {
        let registry = ParserRegistry::with_builtin();
        let (prefix, _) = registry.find_match("jdbc:oracle:thin:@h:1521:orcl").unwrap();
        assert_eq!(prefix, "jdbc:oracle");
    }

    #[test]
    fn test_debug_lists_prefixes() {
        let registry = ParserRegistry::new();
        registry.register("jdbc:x", tagged("x")).unwrap();
        assert!(format!("{registry:?}").contains("jdbc:x"));
    }
}
