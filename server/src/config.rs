//! Server configuration read from the environment.
//!
//! | Variable             | Default          | Meaning                              |
//! |----------------------|------------------|--------------------------------------|
//! | `LEDGER_BIND_ADDR`   | `127.0.0.1:3000` | socket address the server listens on |
//! | `LEDGER_CORS_ORIGIN` | unset (any)      | single origin allowed by CORS        |
//! | `LEDGER_SEED_DEMO`   | `false`          | seed two demo accounts at startup    |
//!
//! Log filtering is configured separately through `RUST_LOG`.

use std::net::SocketAddr;

use anyhow::{bail, Context, Result};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

pub const BIND_ADDR_VAR: &str = "LEDGER_BIND_ADDR";
pub const CORS_ORIGIN_VAR: &str = "LEDGER_CORS_ORIGIN";
pub const SEED_DEMO_VAR: &str = "LEDGER_SEED_DEMO";

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: Option<HeaderValue>,
    pub seed_demo_accounts: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            cors_origin: None,
            seed_demo_accounts: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, unset keys keep their default
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = addr
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {:?}", BIND_ADDR_VAR, addr))?;
        }

        if let Some(origin) = lookup(CORS_ORIGIN_VAR) {
            let origin = origin.trim();
            if !origin.is_empty() {
                config.cors_origin = Some(
                    origin
                        .parse::<HeaderValue>()
                        .with_context(|| format!("Invalid {}: {:?}", CORS_ORIGIN_VAR, origin))?,
                );
            }
        }

        if let Some(flag) = lookup(SEED_DEMO_VAR) {
            config.seed_demo_accounts = parse_flag(SEED_DEMO_VAR, &flag)?;
        }

        Ok(config)
    }

    pub fn cors_layer(&self) -> CorsLayer {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(Any);

        match &self.cors_origin {
            Some(origin) => cors.allow_origin(origin.clone()),
            None => cors.allow_origin(Any),
        }
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("Invalid {}: expected true or false, got {:?}", key, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert!(config.cors_origin.is_none());
        assert!(!config.seed_demo_accounts);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (BIND_ADDR_VAR, "0.0.0.0:8081"),
            (CORS_ORIGIN_VAR, "http://localhost:8080"),
            (SEED_DEMO_VAR, "TRUE"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8081".parse().unwrap());
        assert_eq!(
            config.cors_origin,
            Some(HeaderValue::from_static("http://localhost:8080"))
        );
        assert!(config.seed_demo_accounts);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let err = config_from(&[(BIND_ADDR_VAR, "localhost")]).unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_VAR));

        let err = config_from(&[(SEED_DEMO_VAR, "maybe")]).unwrap_err();
        assert!(err.to_string().contains(SEED_DEMO_VAR));
    }
}
