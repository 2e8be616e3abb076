//! Client configuration from environment variables.
//!
//! - `OFC_SERVER_URL`: service base URL (default: "http://127.0.0.1:5000")
//! - `OFC_REQUEST_TIMEOUT_MS`: per-request timeout; unset or 0 means none
//! - `OFC_LINE_CAPACITY`: `top,middle,bottom` (default: "3,5,5"), or "off"
//! - `OFC_LOG_PATH`: file receiving tracing output; unset disables logging

use std::time::Duration;

use tracing::warn;

use crate::types::LineCapacity;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server_url: String,
    pub request_timeout: Option<Duration>,
    pub line_capacity: LineCapacity,
    pub log_path: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout: None,
            line_capacity: LineCapacity::default(),
            log_path: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let server_url = non_empty("OFC_SERVER_URL").unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        let request_timeout = non_empty("OFC_REQUEST_TIMEOUT_MS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        let line_capacity = match non_empty("OFC_LINE_CAPACITY") {
            Some(raw) => LineCapacity::parse(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "ignoring invalid OFC_LINE_CAPACITY");
                LineCapacity::default()
            }),
            None => LineCapacity::default(),
        };

        Self {
            server_url,
            request_timeout,
            line_capacity,
            log_path: non_empty("OFC_LOG_PATH"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), ClientConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let cfg = config(&[
            ("OFC_SERVER_URL", "http://cards.local:8080/"),
            ("OFC_REQUEST_TIMEOUT_MS", "2500"),
            ("OFC_LINE_CAPACITY", "off"),
            ("OFC_LOG_PATH", "/tmp/ofc.log"),
        ]);
        assert_eq!(cfg.server_url, "http://cards.local:8080/");
        assert_eq!(cfg.request_timeout, Some(Duration::from_millis(2500)));
        assert_eq!(cfg.line_capacity, LineCapacity::unbounded());
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/ofc.log"));
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = config(&[
            ("OFC_REQUEST_TIMEOUT_MS", "soon"),
            ("OFC_LINE_CAPACITY", "3,5"),
            ("OFC_LOG_PATH", "  "),
        ]);
        assert_eq!(cfg.request_timeout, None);
        assert_eq!(cfg.line_capacity, LineCapacity::default());
        assert_eq!(cfg.log_path, None);
    }
}
