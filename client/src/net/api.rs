//! HTTP capability for the auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sent with
//! credentials so the backend can set its session cookie.
//! Server-side (SSR): the call fails with a transport error, since forms are
//! only ever submitted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Send failures and undecodable bodies both surface as [`TransportError`].
//! HTTP status codes are not inspected; the JSON body alone decides the
//! outcome.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResponse, SignUpRequest};
use crate::error::TransportError;

/// Anything that can deliver a sign-up request and return the decoded reply.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Post `request` to the sign-up endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no decodable reply was obtained.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthResponse, TransportError>;
}

fn sign_up_endpoint(base_url: &str) -> String {
    format!("{}/api/v1/sign-up", base_url.trim_end_matches('/'))
}

/// [`AuthApi`] backed by the browser `fetch` API.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Client pointed at the build-time configured backend.
    #[must_use]
    pub fn from_config() -> Self {
        Self::new(crate::config::api_base_url())
    }

    #[must_use]
    pub fn sign_up_url(&self) -> String {
        sign_up_endpoint(&self.base_url)
    }
}

impl AuthApi for HttpAuthApi {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.sign_up_url())
                .credentials(web_sys::RequestCredentials::Include)
                .json(request)
                .map_err(TransportError::new)?
                .send()
                .await
                .map_err(TransportError::new)?;
            resp.json::<AuthResponse>().await.map_err(TransportError::new)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::new("not available on server"))
        }
    }
}
