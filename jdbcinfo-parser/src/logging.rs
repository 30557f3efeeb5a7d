//! Logging setup.
//!
//! The library itself only emits `tracing` events: DEBUG when a URL is
//! dispatched or a parser is registered, WARN when a matched parser rejects
//! a URL. Raw URLs are never logged since they may hold credentials.
//!
//! # Environment Variables
//!
//! - `JDBCINFO_DEBUG=true` - Enable debug logging
//! - `JDBCINFO_LOG_LEVEL=debug|info|warn|error|trace` - Set specific log level
//! - `JDBCINFO_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! # Usage
//!
//! ```rust,no_run
//! use jdbcinfo_parser::logging;
//!
//! // Initialize logging (call once at startup)
//! logging::init();
//! ```

use crate::env::{EnvSource, StdEnvSource};
use std::sync::Once;

/// Enables DEBUG output when set to `true`, `1` or `yes`.
pub const DEBUG_VAR: &str = "JDBCINFO_DEBUG";
/// Explicit level filter for `jdbcinfo` targets.
pub const LOG_LEVEL_VAR: &str = "JDBCINFO_LOG_LEVEL";
/// Output format: `json`, `pretty` or `compact`.
pub const LOG_FORMAT_VAR: &str = "JDBCINFO_LOG_FORMAT";

static INIT: Once = Once::new();

/// Logging configuration resolved from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    /// Level filter applied to the `jdbcinfo` targets.
    pub level: &'static str,
    /// Output format.
    pub format: &'static str,
    /// Whether [`init`] should install a subscriber at all.
    pub enabled: bool,
}

impl LogSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_source(&StdEnvSource)
    }

    /// Read settings from an environment source.
    ///
    /// `JDBCINFO_LOG_LEVEL` wins when it names a known level; otherwise the
    /// level is `debug` if `JDBCINFO_DEBUG` is on and `warn` if not.
    pub fn from_source<S: EnvSource + ?Sized>(source: &S) -> Self {
        let debug = source
            .get(DEBUG_VAR)
            .is_some_and(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"));
        let requested = source.get(LOG_LEVEL_VAR);

        let level = requested
            .as_deref()
            .and_then(known_level)
            .unwrap_or(if debug { "debug" } else { "warn" });

        let format = match source.get(LOG_FORMAT_VAR).map(|f| f.to_lowercase()).as_deref() {
            Some("pretty") => "pretty",
            Some("compact") => "compact",
            _ => "json",
        };

        Self {
            level,
            format,
            enabled: debug || requested.is_some(),
        }
    }

    #[cfg(feature = "tracing-subscriber")]
    fn filter_directive(&self) -> String {
        format!("jdbcinfo={0},jdbcinfo_parser={0}", self.level)
    }
}

fn known_level(level: &str) -> Option<&'static str> {
    match level.to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

/// Initialize logging from the process environment.
///
/// Does nothing unless `JDBCINFO_DEBUG` or `JDBCINFO_LOG_LEVEL` is set, or
/// when the `tracing-subscriber` feature is off. Subsequent calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        let settings = LogSettings::from_env();
        if !settings.enabled {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let filter = EnvFilter::try_new(settings.filter_directive())
                .unwrap_or_else(|_| EnvFilter::new("warn"));

            // try_init: the host application may already own the global subscriber
            let installed = match settings.format {
                "json" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().json())
                    .try_init(),
                "compact" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().compact())
                    .try_init(),
                _ => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().pretty())
                    .try_init(),
            };

            if installed.is_ok() {
                tracing::info!(
                    level = settings.level,
                    format = settings.format,
                    "jdbcinfo logging initialized"
                );
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnvSource;
    use pretty_assertions::assert_eq;

    fn settings(vars: &[(&str, &str)]) -> LogSettings {
        let source = vars
            .iter()
            .fold(MapEnvSource::new(), |source, (k, v)| source.set(*k, *v));
        LogSettings::from_source(&source)
    }

    #[test]
    fn test_defaults_leave_logging_off() {
        assert_eq!(
            settings(&[]),
            LogSettings {
                level: "warn",
                format: "json",
                enabled: false,
            }
        );
    }

    #[test]
    fn test_debug_flag_lowers_level() {
        for flag in ["true", "1", "YES"] {
            let s = settings(&[(DEBUG_VAR, flag)]);
            assert_eq!(s.level, "debug");
            assert!(s.enabled);
        }
        let s = settings(&[(DEBUG_VAR, "off")]);
        assert_eq!(s.level, "warn");
        assert!(!s.enabled);
    }

    #[test]
    fn test_explicit_level_wins_over_debug_flag() {
        let s = settings(&[(DEBUG_VAR, "1"), (LOG_LEVEL_VAR, "Error")]);
        assert_eq!(s.level, "error");

        let s = settings(&[(LOG_LEVEL_VAR, "trace")]);
        assert_eq!(s.level, "trace");
        assert!(s.enabled);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        assert_eq!(settings(&[(LOG_LEVEL_VAR, "loud")]).level, "warn");
        assert_eq!(
            settings(&[(LOG_LEVEL_VAR, "loud"), (DEBUG_VAR, "true")]).level,
            "debug"
        );
        // still counts as a request for logging
        assert!(settings(&[(LOG_LEVEL_VAR, "loud")]).enabled);
    }

    #[test]
    fn test_log_format() {
        assert_eq!(settings(&[(LOG_FORMAT_VAR, "PRETTY")]).format, "pretty");
        assert_eq!(settings(&[(LOG_FORMAT_VAR, "compact")]).format, "compact");
        assert_eq!(settings(&[(LOG_FORMAT_VAR, "xml")]).format, "json");
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
