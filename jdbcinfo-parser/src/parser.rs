//! The capability every vendor parser implements.

use crate::error::ParseResult;
use crate::info::ConnectionInfo;

/// Parses a connection URL of one vendor into [`ConnectionInfo`].
///
/// Implementations receive the URL exactly as the caller passed it (not
/// lowercased), must not mutate shared state and must be safe to call from
/// many threads at once.
///
/// Closures with the right signature implement this trait, which keeps ad-hoc
/// registrations short:
///
/// ```rust
/// use jdbcinfo_parser::{ConnectionInfo, DatabaseVendor, ParseResult, UrlParser};
///
/// let parser = UrlParser::new();
/// parser
///     .register_connection_parser("jdbc:sqlite", |url: &str| -> ParseResult<ConnectionInfo> {
///         let path = url.splitn(3, ':').nth(2).unwrap_or_default();
///         Ok(ConnectionInfo::builder(DatabaseVendor::other("sqlite"))
///             .endpoint("localhost", None)
///             .instance(path)
///             .build())
///     })
///     .unwrap();
///
/// let info = parser.parse("jdbc:sqlite:/tmp/app.db");
/// assert_eq!(info.instance(), Some("/tmp/app.db"));
/// ```
pub trait ConnectionUrlParser: Send + Sync {
    /// Parse the URL.
    fn parse(&self, url: &str) -> ParseResult<ConnectionInfo>;
}

impl<F> ConnectionUrlParser for F
where
    F: Fn(&str) -> ParseResult<ConnectionInfo> + Send + Sync,
{
    fn parse(&self, url: &str) -> ParseResult<ConnectionInfo> {
        self(url)
    }
}
