//! Dashboard configuration

use std::time::Duration;

pub const DEFAULT_PRODUCTS_URL: &str = "https://67e642d66530dbd3110f3f9a.mockapi.io";

/// Runtime settings, read from `DASHBOARD_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Simulated latency of the bulk order fetch
    pub fetch_delay: Duration,
    /// Simulated latency of a single status update
    pub update_delay: Duration,
    /// Take the failure path of the simulated fetch
    pub simulate_load_failure: bool,
    /// Base URL of the products API
    pub products_url: String,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
    /// Whether the demo binary calls the products endpoint
    pub fetch_products: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            fetch_delay: Duration::from_millis(1000),
            update_delay: Duration::from_millis(500),
            simulate_load_failure: false,
            products_url: DEFAULT_PRODUCTS_URL.to_string(),
            http_timeout: 30,
            fetch_products: false,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Unparseable values use the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let millis = |name: &str, default: Duration| {
            lookup(name)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(default)
        };
        let flag = |name: &str, default: bool| {
            lookup(name)
                .and_then(|v| match v.trim().to_ascii_lowercase().as_str() {
                    "1" | "true" | "yes" | "on" => Some(true),
                    "0" | "false" | "no" | "off" => Some(false),
                    _ => None,
                })
                .unwrap_or(default)
        };

        Self {
            fetch_delay: millis("DASHBOARD_FETCH_DELAY_MS", defaults.fetch_delay),
            update_delay: millis("DASHBOARD_UPDATE_DELAY_MS", defaults.update_delay),
            simulate_load_failure: flag(
                "DASHBOARD_SIMULATE_LOAD_FAILURE",
                defaults.simulate_load_failure,
            ),
            products_url: lookup("DASHBOARD_PRODUCTS_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.products_url),
            http_timeout: lookup("DASHBOARD_HTTP_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.http_timeout),
            fetch_products: flag("DASHBOARD_FETCH_PRODUCTS", defaults.fetch_products),
        }
    }

    /// No artificial latency; used by tests.
    pub fn without_delays(mut self) -> Self {
        self.fetch_delay = Duration::ZERO;
        self.update_delay = Duration::ZERO;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DashboardConfig::from_lookup(|_| None);
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.fetch_delay, Duration::from_secs(1));
        assert_eq!(config.update_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            ("DASHBOARD_FETCH_DELAY_MS", "10"),
            ("DASHBOARD_SIMULATE_LOAD_FAILURE", "true"),
            ("DASHBOARD_PRODUCTS_URL", "http://localhost:3000"),
            ("DASHBOARD_FETCH_PRODUCTS", "1"),
        ]));

        assert_eq!(config.fetch_delay, Duration::from_millis(10));
        assert!(config.simulate_load_failure);
        assert_eq!(config.products_url, "http://localhost:3000");
        assert!(config.fetch_products);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            ("DASHBOARD_UPDATE_DELAY_MS", "soon"),
            ("DASHBOARD_HTTP_TIMEOUT_SECS", "-3"),
            ("DASHBOARD_SIMULATE_LOAD_FAILURE", "maybe"),
        ]));

        assert_eq!(config.update_delay, Duration::from_millis(500));
        assert_eq!(config.http_timeout, 30);
        assert!(!config.simulate_load_failure);
    }

    #[test]
    fn test_without_delays() {
        let config = DashboardConfig::default().without_delays();
        assert_eq!(config.fetch_delay, Duration::ZERO);
        assert_eq!(config.update_delay, Duration::ZERO);
    }
}
