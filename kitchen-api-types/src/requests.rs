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

//! Request types for the tenant backend REST API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/register-tenant/`.
///
/// The backend tells an absent `plan_id` ("assign later") apart from an
/// explicit `null`, so the key is skipped entirely when no plan is chosen.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RegisterTenantRequest {
    /// Kitchen display name.
    pub name: String,

    /// Lowercase tenant slug, already validated against the backend rule.
    pub subdomain: String,

    pub admin_email: String,

    pub admin_password: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<i64>,
}
