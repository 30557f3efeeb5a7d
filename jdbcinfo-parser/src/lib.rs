//! # jdbcinfo-parser
//!
//! Resolves JDBC connection URLs into structured connection metadata.
//!
//! A [`ParserRegistry`] maps lowercase URL prefixes to vendor parsers in
//! insertion order. [`UrlParser`] matches a URL against it case-insensitively,
//! hands the original URL to the first matching parser and falls back to
//! [`UNKNOWN_CONNECTION_INFO`] when nothing matches or the parser fails.
//!
//! Built-in parsers, registered in this order:
//!
//! | Prefix            | Parser                | Default port |
//! |-------------------|-----------------------|--------------|
//! | `jdbc:mysql`      | [`MySqlUrlParser`]    | 3306         |
//! | `jdbc:oracle`     | [`OracleUrlParser`]   | 1521         |
//! | `jdbc:h2`         | [`H2UrlParser`]       | 9092         |
//! | `jdbc:postgresql` | [`PostgresUrlParser`] | 5432         |
//!
//! ## Parsing
//!
//! ```rust
//! use jdbcinfo_parser::{DatabaseVendor, UrlParser};
//!
//! let parser = UrlParser::new();
//! let info = parser.parse("jdbc:oracle:thin:@db.example.com:1521:ORCL");
//!
//! assert_eq!(info.vendor(), &DatabaseVendor::Oracle);
//! assert_eq!(info.host(), Some("db.example.com"));
//! assert_eq!(info.port(), Some(1521));
//! assert_eq!(info.instance(), Some("ORCL"));
//! ```
//!
//! ## Process-wide parser
//!
//! ```rust
//! use jdbcinfo_parser::{ConnectionInfo, DatabaseVendor, ParseResult};
//!
//! jdbcinfo_parser::register_connection_parser(
//!     "jdbc:sqlserver",
//!     |_url: &str| -> ParseResult<ConnectionInfo> {
//!         Ok(ConnectionInfo::builder(DatabaseVendor::other("sqlserver"))
//!             .endpoint("localhost", Some(1433))
//!             .build())
//!     },
//! )
//! .unwrap();
//!
//! let info = jdbcinfo_parser::parse("jdbc:sqlserver://localhost;databaseName=x");
//! assert_eq!(info.vendor().name(), "sqlserver");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod dispatch;
pub mod env;
pub mod error;
pub mod info;
pub mod logging;
pub mod parser;
pub mod registry;
pub mod vendor;

pub use dispatch::{UrlParser, global, parse, register_connection_parser};
pub use env::{DEFAULT_URL_VAR, EnvSource, MapEnvSource, StdEnvSource};
pub use error::{ParseError, ParseResult, RegistryError, RegistryResult};
pub use info::{
    ConnectionInfo, ConnectionInfoBuilder, DatabaseVendor, Endpoint, UNKNOWN_CONNECTION_INFO,
};
pub use parser::ConnectionUrlParser;
pub use registry::{ParserRegistry, SharedParser};
pub use vendor::{H2UrlParser, MySqlUrlParser, OracleUrlParser, PostgresUrlParser};

// Re-export logging utilities
pub use logging::{LogSettings, init as init_logging};
