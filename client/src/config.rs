//! Build-time client configuration.
//!
//! The browser bundle has no runtime environment, so the backend location is
//! baked in when the crate is compiled. Set `AUTH_API_BASE_URL` during the
//! build to point the forms at another backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `AUTH_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";

/// Path the sign-up flow navigates to after an account is created.
pub const HOME_PATH: &str = "/";

/// Base URL of the auth backend, without a trailing slash requirement.
#[must_use]
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("AUTH_API_BASE_URL"))
}

fn resolve_base_url(configured: Option<&'static str>) -> &'static str {
    match configured {
        Some(url) if !url.trim().is_empty() => url.trim(),
        _ => DEFAULT_API_BASE_URL,
    }
}
