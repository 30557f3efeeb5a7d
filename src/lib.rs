//! # jdbcinfo
//!
//! Resolve JDBC connection URLs into structured connection metadata: vendor,
//! hosts and ports, database or service name, and user.
//!
//! jdbcinfo provides:
//! - An ordered, case-insensitive prefix registry of vendor parsers
//! - Built-in parsers for MySQL, Oracle, H2 and PostgreSQL
//! - A total `parse` entry point that falls back to an "unknown" result
//!   instead of failing
//!
//! ## Quick Start
//!
//! ```rust
//! use jdbcinfo::prelude::*;
//!
//! let parser = UrlParser::new();
//! let info = parser.parse("jdbc:postgresql://pg1:5432,pg2:5433/billing?user=app");
//!
//! assert_eq!(info.vendor(), &DatabaseVendor::PostgreSql);
//! assert_eq!(info.peer(), "pg1:5432,pg2:5433");
//! assert_eq!(info.instance(), Some("billing"));
//! assert_eq!(info.user(), Some("app"));
//!
//! assert!(parser.parse("jdbc:unknown:whatever").is_unknown());
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Registry, dispatcher and vendor parsers.
pub mod parser {
    pub use jdbcinfo_parser::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::parser::{
        ConnectionInfo, ConnectionUrlParser, DatabaseVendor, ParseError, ParseResult,
        ParserRegistry, RegistryError, UNKNOWN_CONNECTION_INFO, UrlParser,
    };
}

// Re-export key types at the crate root
pub use jdbcinfo_parser::{
    ConnectionInfo, DatabaseVendor, ParseError, RegistryError, UNKNOWN_CONNECTION_INFO, UrlParser,
    parse, register_connection_parser,
};
