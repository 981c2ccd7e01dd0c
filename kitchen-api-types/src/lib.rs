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

//! Shared API types for the kitchen tenant backend.
//!
//! This crate defines the API contract between the marketing site and the
//! tenant backend: service plans, the tenant registration request, and the
//! error body returned when a registration is rejected.
//! It is intentionally framework-agnostic: no HTTP client, no UI types.

pub mod error;
pub mod plans;
pub mod pricing;
pub mod requests;
pub mod responses;

pub use error::RegistrationErrorBody;
pub use plans::{default_plans, CatalogSource, PlanCatalog, ServicePlan};
pub use requests::RegisterTenantRequest;
pub use responses::PlansResponse;
