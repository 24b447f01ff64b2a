//! Daemon configuration (environment variables, read once at startup)

use std::collections::HashMap;
use std::time::Duration;
use todo_core::application::todo::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use todo_core::application::ServiceConfig;
use todo_core::error::{AppError, Result};

const DEFAULT_DB_PATH: &str = "~/.todo/todo.db";
const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9530;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone)]
pub struct DaemonConfig {
    pub db_path: String,
    pub rpc_host: String,
    pub rpc_port: u16,
    pub request_timeout: Duration,
    pub db_max_connections: u32,
    pub service: ServiceConfig,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Production: JSON structured logging
    Json,
    /// Development: pretty formatting with colors
    Pretty,
}

impl DaemonConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Build from an explicit variable map
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let db_path = match vars.get("TODO_DB_PATH") {
            Some(path) => path.clone(),
            None => shellexpand::tilde(DEFAULT_DB_PATH).into_owned(),
        };

        let default_page_size = parse(vars, "TODO_DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let max_page_size = parse(vars, "TODO_MAX_PAGE_SIZE", MAX_PAGE_SIZE)?;
        if default_page_size == 0 || max_page_size == 0 {
            return Err(AppError::Config("page sizes must be positive".to_string()));
        }
        if default_page_size > max_page_size {
            return Err(AppError::Config(format!(
                "TODO_DEFAULT_PAGE_SIZE ({}) exceeds TODO_MAX_PAGE_SIZE ({})",
                default_page_size, max_page_size
            )));
        }

        let log_format = match vars.get("TODO_LOG_FORMAT").map(String::as_str) {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            db_path,
            rpc_host: vars
                .get("TODO_RPC_HOST")
                .cloned()
                .unwrap_or_else(|| DEFAULT_RPC_HOST.to_string()),
            rpc_port: parse(vars, "TODO_RPC_PORT", DEFAULT_RPC_PORT)?,
            request_timeout: Duration::from_millis(parse(
                vars,
                "TODO_REQUEST_TIMEOUT_MS",
                DEFAULT_REQUEST_TIMEOUT_MS,
            )?),
            db_max_connections: parse(vars, "TODO_DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            service: ServiceConfig {
                default_page_size,
                max_page_size,
            },
            log_format,
        })
    }
}

fn parse<T: std::str::FromStr>(vars: &HashMap<String, String>, key: &str, default: T) -> Result<T> {
    match vars.get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} has invalid value {:?}", key, raw))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = DaemonConfig::from_vars(&HashMap::new()).unwrap();
        assert_eq!(config.rpc_host, "127.0.0.1");
        assert_eq!(config.rpc_port, 9530);
        assert_eq!(config.request_timeout, Duration::from_millis(5000));
        assert_eq!(config.service.default_page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.service.max_page_size, MAX_PAGE_SIZE);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.db_path.ends_with(".todo/todo.db"));
    }

    #[test]
    fn test_overrides() {
        let config = DaemonConfig::from_vars(&vars(&[
            ("TODO_DB_PATH", "sqlite::memory:"),
            ("TODO_RPC_PORT", "7000"),
            ("TODO_DEFAULT_PAGE_SIZE", "5"),
            ("TODO_LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.db_path, "sqlite::memory:");
        assert_eq!(config.rpc_port, 7000);
        assert_eq!(config.service.default_page_size, 5);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_number_is_config_error() {
        let err = tokio_test::assert_err!(DaemonConfig::from_vars(&vars(&[(
            "TODO_RPC_PORT",
            "not-a-port"
        )])));
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_default_page_larger_than_max_rejected() {
        let err = DaemonConfig::from_vars(&vars(&[
            ("TODO_DEFAULT_PAGE_SIZE", "50"),
            ("TODO_MAX_PAGE_SIZE", "10"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
