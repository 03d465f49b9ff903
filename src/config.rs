//! Environment configuration for the SSR host.
//!
//! Leptos supplies the defaults (`site-addr`, `site-root` from
//! `[package.metadata.leptos]`); `BIND_ADDR`, `STATIC_DIR` and `RUST_LOG` in
//! the environment or a `.env` file override them.

use std::net::SocketAddr;
use std::path::PathBuf;

use leptos::config::LeptosOptions;

use crate::common::ConfigError;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub site_root: PathBuf,
    pub log_filter: String,
}

impl ServerConfig {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env(default_addr: SocketAddr, default_root: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| dotenvy::var(key).ok(), default_addr, default_root)
    }

    pub fn from_lookup<F>(
        lookup: F,
        default_addr: SocketAddr,
        default_root: &str,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let bind_addr = match value("BIND_ADDR") {
            Some(raw) => raw
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddr { value: raw, source })?,
            None => default_addr,
        };

        let site_root = value("STATIC_DIR").unwrap_or_else(|| default_root.to_string());
        if site_root.is_empty() {
            return Err(ConfigError::Empty("STATIC_DIR"));
        }

        Ok(Self {
            bind_addr,
            site_root: PathBuf::from(site_root),
            log_filter: value("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    pub fn pkg_dir(&self, pkg: &str) -> PathBuf {
        self.site_root.join(pkg)
    }

    /// `defaults` with the site root and address replaced by this config's.
    pub fn leptos_options(&self, defaults: &LeptosOptions) -> LeptosOptions {
        let mut options = defaults.clone();
        options.site_root = self.site_root.to_string_lossy().into_owned().into();
        options.site_addr = self.bind_addr;
        options
    }
}
