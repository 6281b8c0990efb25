// src/config.rs
use std::net::{IpAddr, Ipv4Addr};

const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
}

impl Config {
    /// Reads settings from the process environment. Call after `dotenv()`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let host = lookup("HOST")
            .and_then(|h| h.parse::<IpAddr>().ok())
            .unwrap_or(DEFAULT_HOST);

        let port = lookup("PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Self {
            database_url,
            host,
            port,
            max_connections,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::default();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn reads_values_from_environment() {
        let config = config_with(&[
            ("DATABASE_URL", "sqlite://shop.db"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("DATABASE_MAX_CONNECTIONS", "10"),
        ]);
        assert_eq!(config.database_url, "sqlite://shop.db");
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_connections, 10);
    }

    #[test]
    fn garbage_values_fall_back_to_defaults() {
        let config = config_with(&[
            ("DATABASE_URL", "   "),
            ("HOST", "not-an-ip"),
            ("PORT", "99999"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
        ]);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }
}
