/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Cross-platform REST client for the kitchen tenant backend.
//!
//! Works on WASM (browser) and native targets via [`reqwest`].
//!
//! # Example
//!
//! ```no_run
//! use kitchen_api_client::{form::RegistrationForm, KitchenApiClient};
//!
//! # async fn example() -> Result<(), kitchen_api_client::SubmitError> {
//! let client = KitchenApiClient::new("https://api-kitchen.funadventure.ae");
//!
//! // Never fails: an unreachable backend yields an empty list.
//! let plans = client.fetch_plans().await;
//! println!("{} plans available", plans.len());
//!
//! let form = RegistrationForm {
//!     kitchen_name: "Downtown Kitchen".to_string(),
//!     subdomain: "Downtown-Kitchen".to_string(),
//!     plan: "none".to_string(),
//!     admin_email: "owner@example.com".to_string(),
//!     admin_password: "correct-horse".to_string(),
//! };
//! client.submit_registration(&form).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dialog;
pub mod error;
pub mod form;
pub mod plans;
pub mod submission;
pub mod tenants;

pub use dialog::RegistrationDialog;
pub use error::{ApiError, SubmitError};
pub use kitchen_api_types;
pub use plans::PlanCatalogLoader;
pub use submission::SubmissionState;

use reqwest::Client;

/// A typed REST client for the kitchen tenant backend.
///
/// The backend's public endpoints need no authentication, so the client only
/// carries the base URL and a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct KitchenApiClient {
    base_url: String,
    http: Client,
}

impl KitchenApiClient {
    /// Create a new client pointing at the given backend base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"https://api-kitchen.funadventure.ae"`; a
    ///   trailing `/` is ignored
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Create a client from an optional configured URL, falling back to the
    /// production backend. See [`config::resolve_base_url`].
    pub fn from_config(configured: Option<&str>) -> Self {
        Self::new(&config::resolve_base_url(configured))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.post(self.url(path))
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = KitchenApiClient::new("http://localhost:8000/");
        assert_eq!(
            client.url("/api/register-tenant/"),
            "http://localhost:8000/api/register-tenant/"
        );
    }

    #[test]
    fn unset_config_uses_production() {
        let client = KitchenApiClient::from_config(None);
        assert_eq!(client.base_url(), config::DEFAULT_API_URL);
    }
}
