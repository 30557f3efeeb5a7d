//! Environment variable sources for connection URLs.

use std::collections::HashMap;

/// Variable read by [`UrlParser::parse_default_env`](crate::UrlParser::parse_default_env).
pub const DEFAULT_URL_VAR: &str = "JDBC_URL";

/// Source for environment variables, read by the `parse_env*` methods and by
/// [`LogSettings`](crate::logging::LogSettings).
pub trait EnvSource: Send + Sync {
    /// Get an environment variable value.
    fn get(&self, name: &str) -> Option<String>;
}

/// Default environment source using std::env.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }
}

/// Environment source backed by a HashMap.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// Create a new map-based environment source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_source() {
        let source = MapEnvSource::new().set("JDBC_URL", "jdbc:h2:mem:test");
        assert_eq!(source.get("JDBC_URL").as_deref(), Some("jdbc:h2:mem:test"));
        assert_eq!(source.get("OTHER"), None);
    }

    #[test]
    fn test_std_source_missing_var() {
        assert_eq!(StdEnvSource.get("JDBCINFO_TEST_SURELY_UNSET_VAR"), None);
    }
}
