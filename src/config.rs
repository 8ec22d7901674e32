// src/config.rs

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_CSV_PATH: &str = "2024_price.csv";
pub const DEFAULT_BIND_IP: [u8; 4] = [127, 0, 0, 1];
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub csv_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            bind_addr: SocketAddr::from((DEFAULT_BIND_IP, DEFAULT_PORT)),
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}

impl AppConfig {
    /// Reads `LISTINGS_CSV`, `BIND_ADDR` and `MAX_WORKERS`.
    /// Unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let csv_path = lookup("LISTINGS_CSV")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.csv_path);

        let bind_addr = parse_or_default(&lookup, "BIND_ADDR", defaults.bind_addr);

        let max_workers = parse_or_default(&lookup, "MAX_WORKERS", defaults.max_workers);
        let max_workers = if max_workers == 0 {
            tracing::warn!("MAX_WORKERS must be positive, using {DEFAULT_MAX_WORKERS}");
            DEFAULT_MAX_WORKERS
        } else {
            max_workers
        };

        Self {
            csv_path,
            bind_addr,
            max_workers,
        }
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "invalid config value, using {default}");
            default
        }),
    }
}
