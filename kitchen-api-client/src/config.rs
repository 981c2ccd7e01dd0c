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

//! Backend location.

/// Production backend used when no URL is configured.
pub const DEFAULT_API_URL: &str = "https://api-kitchen.funadventure.ae";

/// Path of the plan listing endpoint.
pub const PLANS_PATH: &str = "/api/organizations/plans/";

/// Path of the tenant registration endpoint.
pub const REGISTER_TENANT_PATH: &str = "/api/register-tenant/";

/// Normalise a configured base URL.
///
/// Blank or missing values resolve to [`DEFAULT_API_URL`]; surrounding
/// whitespace and trailing slashes are removed.
pub fn resolve_base_url(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_uses_default() {
        assert_eq!(resolve_base_url(None), DEFAULT_API_URL);
        assert_eq!(resolve_base_url(Some("")), DEFAULT_API_URL);
        assert_eq!(resolve_base_url(Some("   ")), DEFAULT_API_URL);
    }

    #[test]
    fn configured_url_is_normalised() {
        assert_eq!(
            resolve_base_url(Some(" http://localhost:8000/ ")),
            "http://localhost:8000"
        );
        assert_eq!(
            resolve_base_url(Some("https://staging.example.com//")),
            "https://staging.example.com"
        );
    }
}
