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

//! Plan catalog endpoint: `GET /api/organizations/plans/`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use kitchen_api_types::{PlanCatalog, PlansResponse, ServicePlan};

use crate::config::PLANS_PATH;
use crate::error::ApiError;
use crate::KitchenApiClient;

impl KitchenApiClient {
    /// Fetch the published service plans.
    ///
    /// Calls `GET /api/organizations/plans/` and accepts either a bare list
    /// or a `{ "results": [...] }` envelope.
    pub async fn try_fetch_plans(&self) -> Result<Vec<ServicePlan>, ApiError> {
        let url = self.url(PLANS_PATH);
        log::debug!("Fetching plans from {url}");

        let response = self.get(PLANS_PATH).send().await?;
        let status = response.status();
        log::debug!("Plans response status: {status}");

        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let plans = serde_json::from_slice::<PlansResponse>(&body)?.into_plans();
        Ok(plans)
    }

    /// Like [`Self::try_fetch_plans`], but every failure is logged and turned
    /// into an empty list.
    pub async fn fetch_plans(&self) -> Vec<ServicePlan> {
        match self.try_fetch_plans().await {
            Ok(plans) => plans,
            Err(e) => {
                log::error!("Failed to fetch plans: {e}");
                Vec::new()
            }
        }
    }
}

/// Shared plan fetcher for every part of the site that shows plans.
///
/// Each [`load`](Self::load) takes a generation ticket. When loads overlap,
/// for example when the dialog is closed and reopened quickly, only the
/// newest one delivers a catalog; older responses are dropped so they cannot
/// overwrite fresher state.
#[derive(Debug, Clone)]
pub struct PlanCatalogLoader {
    client: KitchenApiClient,
    generation: Arc<AtomicU64>,
}

/// Identifies one plan load. See [`PlanCatalogLoader`].
#[derive(Debug)]
pub struct LoadTicket {
    id: u64,
    generation: Arc<AtomicU64>,
}

impl LoadTicket {
    /// `false` once a newer load has started.
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.id
    }
}

impl PlanCatalogLoader {
    pub fn new(client: KitchenApiClient) -> Self {
        Self {
            client,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Start a new load, superseding all earlier tickets.
    pub fn begin(&self) -> LoadTicket {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket {
            id,
            generation: self.generation.clone(),
        }
    }

    /// Fetch plans and apply the default-catalog fallback.
    ///
    /// Returns `None` when a newer load started while this one was in
    /// flight.
    pub async fn load(&self) -> Option<PlanCatalog> {
        let ticket = self.begin();
        let plans = self.client.fetch_plans().await;
        if !ticket.is_current() {
            log::debug!("Dropping stale plan response ({} plans)", plans.len());
            return None;
        }
        Some(PlanCatalog::from_fetched(plans))
    }

    pub fn client(&self) -> &KitchenApiClient {
        &self.client
    }
}
