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

//! Tenant registration endpoint: `POST /api/register-tenant/`.

use kitchen_api_types::{RegisterTenantRequest, RegistrationErrorBody};

use crate::config::REGISTER_TENANT_PATH;
use crate::error::{ApiError, SubmitError};
use crate::form::RegistrationForm;
use crate::KitchenApiClient;

impl KitchenApiClient {
    /// Register a new tenant.
    ///
    /// Calls `POST /api/register-tenant/`. Any 2xx counts as success and the
    /// body is ignored. Failures carry a display-ready message assembled
    /// from the body's `errors`, `detail` or `message`.
    pub async fn register_tenant(&self, request: &RegisterTenantRequest) -> Result<(), ApiError> {
        let response = self
            .post(REGISTER_TENANT_PATH)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            log::info!("Registered tenant '{}'", request.subdomain);
            return Ok(());
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = RegistrationErrorBody::from_bytes(&body).display_message(status.as_u16());
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    /// Validate a form and, if it passes, register the tenant it describes.
    pub async fn submit_registration(&self, form: &RegistrationForm) -> Result<(), SubmitError> {
        let request = form.validate().map_err(SubmitError::Invalid)?;
        self.register_tenant(&request).await?;
        Ok(())
    }
}
