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

//! Service plans and the catalog shown on the pricing section.

use serde::{Deserialize, Deserializer, Serialize};

/// A pricing tier as served by `GET /api/organizations/plans/`.
///
/// Numeric ceilings use `0` to mean "unlimited". Everything except `id` and
/// `name` defaults when the backend leaves it out or sends `null`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ServicePlan {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tier: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Decimal string, e.g. `"499.00"`.
    #[serde(default = "zero_price", deserialize_with = "price_or_zero")]
    pub price_monthly: String,
    #[serde(default = "zero_price", deserialize_with = "price_or_zero")]
    pub price_yearly: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trial_days: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub has_inventory_management: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_delivery_tracking: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_customer_app: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_analytics: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_whatsapp_notifications: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_multi_branch: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub max_customers: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_menu_items: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_staff: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_orders_per_month: u32,
}

fn zero_price() -> String {
    "0.00".to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn price_or_zero<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(zero_price))
}

/// The fixed catalog shown whenever the backend returns no plans.
///
/// These entries are presentation-only. Their ids do not exist on the
/// backend, so they are never offered in the registration dialog.
pub fn default_plans() -> Vec<ServicePlan> {
    vec![
        ServicePlan {
            id: 0,
            name: "Starter".to_string(),
            tier: "starter".to_string(),
            description: "Perfect for getting started with a small customer base.".to_string(),
            price_monthly: zero_price(),
            price_yearly: zero_price(),
            trial_days: 15,
            has_inventory_management: false,
            has_delivery_tracking: false,
            has_customer_app: false,
            has_analytics: false,
            has_whatsapp_notifications: false,
            has_multi_branch: false,
            max_customers: 50,
            max_menu_items: 30,
            max_staff: 2,
            max_orders_per_month: 1500,
        },
        ServicePlan {
            id: 0,
            name: "Pro".to_string(),
            tier: "pro".to_string(),
            description: "For established kitchens ready to scale their operations.".to_string(),
            price_monthly: "499.00".to_string(),
            price_yearly: "4990.00".to_string(),
            trial_days: 0,
            has_inventory_management: true,
            has_delivery_tracking: true,
            has_customer_app: true,
            has_analytics: true,
            has_whatsapp_notifications: true,
            has_multi_branch: false,
            max_customers: 0,
            max_menu_items: 0,
            max_staff: 0,
            max_orders_per_month: 0,
        },
    ]
}

/// Where the plans in a [`PlanCatalog`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Remote,
    Default,
}

/// The plans the site renders, with the empty-list fallback already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCatalog {
    plans: Vec<ServicePlan>,
    source: CatalogSource,
}

impl PlanCatalog {
    /// Build a catalog from a fetch result. An empty fetch falls back to
    /// [`default_plans`] so the pricing section is never blank.
    pub fn from_fetched(plans: Vec<ServicePlan>) -> Self {
        if plans.is_empty() {
            Self::default_catalog()
        } else {
            Self {
                plans,
                source: CatalogSource::Remote,
            }
        }
    }

    pub fn default_catalog() -> Self {
        Self {
            plans: default_plans(),
            source: CatalogSource::Default,
        }
    }

    /// Plans to render on the pricing section.
    pub fn plans(&self) -> &[ServicePlan] {
        &self.plans
    }

    /// Plans a new tenant may pick at registration. Empty for the default
    /// catalog.
    pub fn selectable_plans(&self) -> &[ServicePlan] {
        match self.source {
            CatalogSource::Remote => &self.plans,
            CatalogSource::Default => &[],
        }
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(id: i64, name: &str) -> ServicePlan {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
    }

    #[test]
    fn minimal_plan_fills_defaults() {
        let plan = plan(3, "Basic");
        assert_eq!(plan.price_monthly, "0.00");
        assert_eq!(plan.trial_days, 0);
        assert_eq!(plan.max_customers, 0);
        assert!(!plan.has_customer_app);
    }

    #[test]
    fn empty_fetch_falls_back_to_starter_and_pro() {
        let catalog = PlanCatalog::from_fetched(Vec::new());
        let names: Vec<_> = catalog.plans().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Starter", "Pro"]);
        assert_eq!(catalog.source(), CatalogSource::Default);
        assert_eq!(catalog.plans()[1].price_monthly, "499.00");
    }

    #[test]
    fn default_catalog_offers_nothing_to_select() {
        assert!(PlanCatalog::default_catalog().selectable_plans().is_empty());
    }

    #[test]
    fn fetched_plans_replace_defaults() {
        let catalog = PlanCatalog::from_fetched(vec![plan(7, "Family Kitchen")]);
        assert_eq!(catalog.plans().len(), 1);
        assert_eq!(catalog.plans()[0].name, "Family Kitchen");
        assert_eq!(catalog.selectable_plans().len(), 1);
        assert_eq!(catalog.source(), CatalogSource::Remote);
    }
}
