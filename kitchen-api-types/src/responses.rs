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

//! Response types for the tenant backend REST API.

use serde::{Deserialize, Serialize};

use crate::plans::ServicePlan;

/// Body of `GET /api/organizations/plans/`.
///
/// The endpoint answers either with a bare list or with a paginated
/// envelope:
///
/// ```json
/// [ { "id": 1, "name": "Starter", ... } ]
/// { "count": 1, "results": [ { "id": 1, "name": "Starter", ... } ] }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum PlansResponse {
    List(Vec<ServicePlan>),
    Envelope { results: Vec<ServicePlan> },
}

impl PlansResponse {
    pub fn into_plans(self) -> Vec<ServicePlan> {
        match self {
            PlansResponse::List(plans) => plans,
            PlansResponse::Envelope { results } => results,
        }
    }
}
