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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use kitchen_api_client::{config::resolve_base_url, KitchenApiClient};

// This is read at compile time, please rebuild if you change this value.
pub const KITCHEN_API_URL: Option<&str> = option_env!("KITCHEN_API_URL");

pub const SUPPORT_EMAIL: &str = "support@funadventure.ae";

pub fn api_base_url() -> String {
    resolve_base_url(KITCHEN_API_URL)
}

pub fn api_client() -> KitchenApiClient {
    KitchenApiClient::new(&api_base_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalised() {
        let url = api_base_url();
        assert!(url.starts_with("http"));
        assert!(!url.ends_with('/'));
        assert_eq!(api_client().base_url(), url);
    }
}
