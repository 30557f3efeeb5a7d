//! Connection metadata produced by the parsers.

use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use smol_str::SmolStr;
use std::fmt;
use std::sync::LazyLock;

/// Peer reported when no endpoint could be determined.
pub const UNKNOWN_PEER: &str = "unknown_peer";

/// Instance reported by [`UNKNOWN_CONNECTION_INFO`].
pub const UNKNOWN_INSTANCE: &str = "unknown_instance";

/// The "could not determine" result.
///
/// Returned by the dispatcher whenever a URL is empty, matches no registered
/// prefix, or fails to parse.
pub static UNKNOWN_CONNECTION_INFO: LazyLock<ConnectionInfo> = LazyLock::new(|| {
    ConnectionInfo::builder(DatabaseVendor::Unknown)
        .instance(UNKNOWN_INSTANCE)
        .build()
});

/// Database vendor identified from a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DatabaseVendor {
    /// MySQL / MariaDB Connector/J
    MySql,
    /// Oracle thin / OCI
    Oracle,
    /// H2
    H2,
    /// PostgreSQL
    PostgreSql,
    /// A vendor supplied by a custom parser.
    Other(SmolStr),
    /// Could not be determined.
    Unknown,
}

impl DatabaseVendor {
    /// Get the vendor name.
    pub fn name(&self) -> &str {
        match self {
            Self::MySql => "mysql",
            Self::Oracle => "oracle",
            Self::H2 => "h2",
            Self::PostgreSql => "postgresql",
            Self::Other(name) => name.as_str(),
            Self::Unknown => "unknown_type",
        }
    }

    /// Get the default listener port for this vendor.
    pub fn default_port(&self) -> Option<u16> {
        match self {
            Self::MySql => Some(3306),
            Self::Oracle => Some(1521),
            Self::H2 => Some(9092),
            Self::PostgreSql => Some(5432),
            Self::Other(_) | Self::Unknown => None,
        }
    }

    /// Get the JDBC URL prefix of a built-in vendor.
    pub fn jdbc_prefix(&self) -> Option<&'static str> {
        match self {
            Self::MySql => Some("jdbc:mysql"),
            Self::Oracle => Some("jdbc:oracle"),
            Self::H2 => Some("jdbc:h2"),
            Self::PostgreSql => Some("jdbc:postgresql"),
            Self::Other(_) | Self::Unknown => None,
        }
    }

    /// Create a vendor for a custom parser.
    pub fn other(name: impl Into<SmolStr>) -> Self {
        Self::Other(name.into())
    }
}

impl fmt::Display for DatabaseVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for DatabaseVendor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A single `host[:port]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Endpoint {
    /// Host name or address. IPv6 literals keep their brackets.
    pub host: SmolStr,
    /// Port, if the vendor listens on one.
    pub port: Option<u16>,
}

impl Endpoint {
    /// Create a new endpoint.
    pub fn new(host: impl Into<SmolStr>, port: Option<u16>) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => f.write_str(&self.host),
        }
    }
}

/// Structured metadata extracted from a connection URL.
///
/// Immutable once built; construct with [`ConnectionInfo::builder`].
///
/// ```rust
/// use jdbcinfo_parser::{ConnectionInfo, DatabaseVendor};
///
/// let info = ConnectionInfo::builder(DatabaseVendor::MySql)
///     .endpoint("db1", Some(3306))
///     .endpoint("db2", Some(3307))
///     .instance("orders")
///     .build();
///
/// assert_eq!(info.host(), Some("db1"));
/// assert_eq!(info.port(), Some(3306));
/// assert_eq!(info.peer(), "db1:3306,db2:3307");
/// assert_eq!(info.peer_service(), "orders[mysql(db1:3306,db2:3307)]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConnectionInfo {
    vendor: DatabaseVendor,
    user: Option<SmolStr>,
    instance: Option<SmolStr>,
    endpoints: SmallVec<[Endpoint; 1]>,
    peer: SmolStr,
}

impl ConnectionInfo {
    /// Start building connection info for a vendor.
    pub fn builder(vendor: DatabaseVendor) -> ConnectionInfoBuilder {
        ConnectionInfoBuilder::new(vendor)
    }

    /// Get a copy of [`UNKNOWN_CONNECTION_INFO`].
    pub fn unknown() -> Self {
        UNKNOWN_CONNECTION_INFO.clone()
    }

    /// Check whether this equals [`UNKNOWN_CONNECTION_INFO`].
    ///
    /// Custom parsers may report [`DatabaseVendor::Unknown`] alongside real
    /// endpoints; such results are not the sentinel.
    pub fn is_unknown(&self) -> bool {
        *self == *UNKNOWN_CONNECTION_INFO
    }

    /// Get the vendor.
    pub fn vendor(&self) -> &DatabaseVendor {
        &self.vendor
    }

    /// Get the user named in the URL.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Get the database, SID or service name.
    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    /// Get the first host.
    pub fn host(&self) -> Option<&str> {
        self.endpoints.first().map(|e| e.host.as_str())
    }

    /// Get the port of the first host.
    pub fn port(&self) -> Option<u16> {
        self.endpoints.first().and_then(|e| e.port)
    }

    /// Get every endpoint, in URL order.
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Get the comma-separated `host:port` list.
    pub fn peer(&self) -> &str {
        &self.peer
    }

    /// Get the peer service label, `instance[vendor(peer)]`.
    pub fn peer_service(&self) -> String {
        format!(
            "{}[{}({})]",
            self.instance.as_deref().unwrap_or_default(),
            self.vendor,
            self.peer
        )
    }
}

impl fmt::Display for ConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.peer_service())
    }
}

/// Builder for [`ConnectionInfo`].
#[derive(Debug, Clone)]
pub struct ConnectionInfoBuilder {
    vendor: DatabaseVendor,
    user: Option<SmolStr>,
    instance: Option<SmolStr>,
    endpoints: SmallVec<[Endpoint; 1]>,
}

impl ConnectionInfoBuilder {
    /// Create a builder for a vendor.
    pub fn new(vendor: DatabaseVendor) -> Self {
        Self {
            vendor,
            user: None,
            instance: None,
            endpoints: SmallVec::new(),
        }
    }

    /// Append an endpoint.
    pub fn endpoint(mut self, host: impl Into<SmolStr>, port: Option<u16>) -> Self {
        self.endpoints.push(Endpoint::new(host, port));
        self
    }

    /// Append several endpoints.
    pub fn endpoints(mut self, endpoints: impl IntoIterator<Item = Endpoint>) -> Self {
        self.endpoints.extend(endpoints);
        self
    }

    /// Set the user.
    pub fn user(mut self, user: impl Into<SmolStr>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the database, SID or service name. Empty names are ignored.
    pub fn instance(mut self, instance: impl Into<SmolStr>) -> Self {
        let instance = instance.into();
        self.instance = (!instance.is_empty()).then_some(instance);
        self
    }

    /// Build the connection info.
    pub fn build(self) -> ConnectionInfo {
        let peer = if self.endpoints.is_empty() {
            SmolStr::new_static(UNKNOWN_PEER)
        } else {
            let joined: Vec<String> = self.endpoints.iter().map(ToString::to_string).collect();
            SmolStr::new(joined.join(","))
        };

        ConnectionInfo {
            vendor: self.vendor,
            user: self.user,
            instance: self.instance,
            endpoints: self.endpoints,
            peer,
        }
    }
}
