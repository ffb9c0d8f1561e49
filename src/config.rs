// src/config.rs
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_WHATSAPP_PHONE: &str = "6285156083920";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite file backing the key/value store.
    pub db_path: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Number that receives order messages.
    pub whatsapp_phone: String,
    /// Keep the batch record in memory only; nothing survives a restart.
    pub ephemeral: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: "tepache.sqlite3".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            whatsapp_phone: DEFAULT_WHATSAPP_PHONE.to_string(),
            ephemeral: false,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `TEPACHE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Some(path) = lookup("TEPACHE_DB_PATH") {
            cfg.db_path = path;
        }
        if let Some(raw) = lookup("TEPACHE_BIND_ADDR") {
            cfg.bind_addr = parse_var("TEPACHE_BIND_ADDR", &raw)?;
        }
        if let Some(raw) = lookup("TEPACHE_MAX_WORKERS") {
            cfg.max_workers = parse_var("TEPACHE_MAX_WORKERS", &raw)?;
            if cfg.max_workers == 0 {
                return Err(ConfigError::Invalid {
                    var: "TEPACHE_MAX_WORKERS",
                    value: raw,
                    reason: "must be at least 1".into(),
                });
            }
        }
        if let Some(phone) = lookup("TEPACHE_WHATSAPP_PHONE") {
            if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
                return Err(ConfigError::Invalid {
                    var: "TEPACHE_WHATSAPP_PHONE",
                    value: phone,
                    reason: "expected digits only, with country code".into(),
                });
            }
            cfg.whatsapp_phone = phone;
        }
        if let Some(raw) = lookup("TEPACHE_EPHEMERAL") {
            cfg.ephemeral = parse_var("TEPACHE_EPHEMERAL", &raw)?;
        }

        Ok(cfg)
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
