//! # Gateway configuration
//!
//! Everything the gateway needs at startup comes from environment variables.
//! Unset or empty variables take their default; a value that is set but does
//! not parse stops the process before it binds.
//!
//! | Variable                    | Default                 |
//! |-----------------------------|-------------------------|
//! | `DASHBOARD_HOST`            | `127.0.0.1`             |
//! | `DASHBOARD_PORT`            | `8080`                  |
//! | `LOYALTY_API_URL`           | `http://localhost:8000` |
//! | `LOYALTY_API_FALLBACK_URL`  | unset                   |
//! | `LOYALTY_API_TIMEOUT_SECS`  | `15`                    |
//! | `DASHBOARD_UPLOAD_LIMIT_MB` | `20`                    |
//! | `DASHBOARD_OPEN_BROWSER`    | `true`                  |

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_UPSTREAM: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_UPLOAD_LIMIT_MB: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}: expected {expected}")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Primary loyalty API base URL, without trailing slash.
    pub upstream_url: String,
    /// Second base URL tried once when the primary fails.
    pub fallback_url: Option<String>,
    pub timeout: Duration,
    pub upload_limit_bytes: usize,
    pub open_browser: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let upload_limit_mb: usize = parse(
            "DASHBOARD_UPLOAD_LIMIT_MB",
            var("DASHBOARD_UPLOAD_LIMIT_MB"),
            DEFAULT_UPLOAD_LIMIT_MB,
            "a whole number of megabytes",
        )?;

        Ok(Config {
            host: var("DASHBOARD_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse(
                "DASHBOARD_PORT",
                var("DASHBOARD_PORT"),
                DEFAULT_PORT,
                "a port number",
            )?,
            upstream_url: trim_url(
                &var("LOYALTY_API_URL").unwrap_or_else(|| DEFAULT_UPSTREAM.to_string()),
            ),
            fallback_url: var("LOYALTY_API_FALLBACK_URL").map(|url| trim_url(&url)),
            timeout: Duration::from_secs(parse(
                "LOYALTY_API_TIMEOUT_SECS",
                var("LOYALTY_API_TIMEOUT_SECS"),
                DEFAULT_TIMEOUT_SECS,
                "a whole number of seconds",
            )?),
            upload_limit_bytes: upload_limit_mb * 1024 * 1024,
            open_browser: parse_flag(var("DASHBOARD_OPEN_BROWSER"))?,
        })
    }

    pub fn public_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn upload_limit_mb(&self) -> usize {
        self.upload_limit_bytes / (1024 * 1024)
    }
}

fn trim_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn parse<T: FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            name,
            value,
            expected,
        }),
    }
}

fn parse_flag(raw: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = raw else {
        return Ok(true);
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name: "DASHBOARD_OPEN_BROWSER",
            value,
            expected: "true or false",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream_url, "http://localhost:8000");
        assert_eq!(config.fallback_url, None);
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.upload_limit_mb(), 20);
        assert!(config.open_browser);
        assert_eq!(config.public_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn urls_lose_trailing_slashes() {
        let config = config(&[
            ("LOYALTY_API_URL", "https://api.example.com/"),
            ("LOYALTY_API_FALLBACK_URL", "http://10.0.0.5:8000//"),
        ])
        .unwrap();
        assert_eq!(config.upstream_url, "https://api.example.com");
        assert_eq!(config.fallback_url.as_deref(), Some("http://10.0.0.5:8000"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config(&[("LOYALTY_API_FALLBACK_URL", "  "), ("DASHBOARD_PORT", "")]).unwrap();
        assert_eq!(config.fallback_url, None);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn bad_numbers_fail_startup() {
        let err = config(&[("DASHBOARD_PORT", "eighty")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "DASHBOARD_PORT",
                ..
            }
        ));
        assert!(config(&[("LOYALTY_API_TIMEOUT_SECS", "-1")]).is_err());
        assert!(config(&[("DASHBOARD_OPEN_BROWSER", "maybe")]).is_err());
    }

    #[test]
    fn browser_flag_accepts_common_spellings() {
        assert!(!config(&[("DASHBOARD_OPEN_BROWSER", "false")]).unwrap().open_browser);
        assert!(!config(&[("DASHBOARD_OPEN_BROWSER", "0")]).unwrap().open_browser);
        assert!(config(&[("DASHBOARD_OPEN_BROWSER", "TRUE")]).unwrap().open_browser);
    }
}
