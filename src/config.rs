//! Host configuration.
//!
//! Leptos settings come from `[package.metadata.leptos]` (or the `LEPTOS_*`
//! variables cargo-leptos exports). `PORT` overrides the listen port so the
//! binary can run behind platforms that assign one.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use leptos::prelude::{LeptosOptions, get_configuration};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub leptos_options: LeptosOptions,
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns an error if the Leptos configuration cannot be loaded or
    /// `PORT` is not a valid port number.
    pub fn load() -> Result<Self, ConfigError> {
        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let leptos_options = conf.leptos_options;
        let port = std::env::var("PORT").ok();
        let addr = resolve_addr(leptos_options.site_addr, port.as_deref())?;
        Ok(Self { leptos_options, addr })
    }
}

/// Apply an optional `PORT` override to the configured site address.
fn resolve_addr(site_addr: SocketAddr, port: Option<&str>) -> Result<SocketAddr, ConfigError> {
    let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(site_addr);
    };
    let port: u16 = raw
        .parse()
        .map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?;
    Ok(SocketAddr::new(site_addr.ip(), port))
}
