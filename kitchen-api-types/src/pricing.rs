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

//! Display helpers turning a [`ServicePlan`] into pricing-card text.

use crate::plans::ServicePlan;

const MIN_BULLETS: usize = 3;
const CURRENCY: &str = "AED";

impl ServicePlan {
    /// Monthly price parsed from its decimal string. Unparseable prices are
    /// treated as zero.
    pub fn monthly_price(&self) -> f64 {
        parse_price(&self.price_monthly)
    }

    pub fn is_free(&self) -> bool {
        self.monthly_price() <= 0.0
    }

    /// `"Free"` or `"AED 1,499"`.
    pub fn price_label(&self) -> String {
        if self.is_free() {
            "Free".to_string()
        } else {
            format!("{CURRENCY} {}", format_amount(self.monthly_price()))
        }
    }

    /// Suffix rendered next to [`Self::price_label`]; empty for free plans.
    pub fn price_period(&self) -> &'static str {
        if self.is_free() {
            ""
        } else {
            "/mo"
        }
    }

    /// Yearly price line, when the plan has one.
    pub fn yearly_label(&self) -> Option<String> {
        let yearly = parse_price(&self.price_yearly);
        (yearly > 0.0).then(|| format!("{CURRENCY} {}/yr", format_amount(yearly)))
    }

    /// Text of the `<option>` offering this plan in the registration dialog.
    pub fn option_label(&self) -> String {
        if self.is_free() {
            format!("{} (Free)", self.name)
        } else {
            format!(
                "{} ({CURRENCY} {}/mo)",
                self.name,
                format_amount(self.monthly_price())
            )
        }
    }

    /// Whether the pricing section flags this plan as "Most Popular".
    pub fn is_highlighted(&self) -> bool {
        self.tier.eq_ignore_ascii_case("pro")
    }

    /// Bullet points for the pricing card.
    ///
    /// The customer ceiling always leads, followed by enabled features. Menu
    /// item and staff ceilings pad the list up to three bullets. A trial line
    /// closes the list whenever the plan has one.
    pub fn feature_bullets(&self) -> Vec<String> {
        let mut bullets = vec![limit_bullet(self.max_customers, "customers")];

        let flags = [
            (self.has_whatsapp_notifications, "WhatsApp automation"),
            (self.has_customer_app, "Dedicated customer app"),
            (self.has_inventory_management, "Inventory management"),
            (self.has_delivery_tracking, "Delivery tracking"),
            (self.has_analytics, "Advanced analytics"),
            (self.has_multi_branch, "Multi-branch support"),
        ];
        bullets.extend(
            flags
                .iter()
                .filter(|(enabled, _)| *enabled)
                .map(|(_, text)| text.to_string()),
        );

        for (limit, noun) in [
            (self.max_menu_items, "menu items"),
            (self.max_staff, "staff accounts"),
        ] {
            if bullets.len() >= MIN_BULLETS {
                break;
            }
            bullets.push(limit_bullet(limit, noun));
        }

        if self.trial_days > 0 {
            bullets.push(format!("{}-day free trial", self.trial_days));
        }
        bullets
    }
}

fn limit_bullet(limit: u32, noun: &str) -> String {
    if limit == 0 {
        format!("Unlimited {noun}")
    } else {
        format!("Up to {} {noun}", format_amount(f64::from(limit)))
    }
}

fn parse_price(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Group thousands and keep at most two fraction digits, dropping trailing
/// zeros: `1250.50` renders as `1,250.5`.
fn format_amount(value: f64) -> String {
    let cents = (value * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        0 => grouped,
        f if f % 10 == 0 => format!("{grouped}.{}", f / 10),
        f => format!("{grouped}.{f:02}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plans::default_plans;

    fn plan_with(json: serde_json::Value) -> ServicePlan {
        let mut base = serde_json::json!({ "id": 1, "name": "Test" });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), json.as_object()) {
            base.extend(extra.clone());
        }
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn default_labels() {
        let plans = default_plans();
        assert_eq!(plans[0].price_label(), "Free");
        assert_eq!(plans[0].price_period(), "");
        assert_eq!(plans[1].price_label(), "AED 499");
        assert_eq!(plans[1].price_period(), "/mo");
        assert!(plans[1].is_highlighted());
        assert!(!plans[0].is_highlighted());
    }

    #[test]
    fn amounts_are_grouped() {
        assert_eq!(format_amount(499.0), "499");
        assert_eq!(format_amount(1250.5), "1,250.5");
        assert_eq!(format_amount(1_234_567.25), "1,234,567.25");
        assert_eq!(format_amount(1000.0), "1,000");
    }

    #[test]
    fn option_labels() {
        let free = plan_with(serde_json::json!({ "name": "Starter", "price_monthly": "0.00" }));
        let paid = plan_with(serde_json::json!({ "name": "Pro", "price_monthly": "1499.00" }));
        assert_eq!(free.option_label(), "Starter (Free)");
        assert_eq!(paid.option_label(), "Pro (AED 1,499/mo)");
    }

    #[test]
    fn unparseable_price_counts_as_free() {
        let plan = plan_with(serde_json::json!({ "price_monthly": "call us" }));
        assert!(plan.is_free());
        assert_eq!(plan.yearly_label(), None);
    }

    #[test]
    fn starter_bullets_pad_with_limits_and_end_with_trial() {
        assert_eq!(
            default_plans()[0].feature_bullets(),
            [
                "Up to 50 customers",
                "Up to 30 menu items",
                "Up to 2 staff accounts",
                "15-day free trial",
            ]
        );
    }

    #[test]
    fn pro_bullets_follow_flag_priority() {
        assert_eq!(
            default_plans()[1].feature_bullets(),
            [
                "Unlimited customers",
                "WhatsApp automation",
                "Dedicated customer app",
                "Inventory management",
                "Delivery tracking",
                "Advanced analytics",
            ]
        );
    }

    #[test]
    fn padding_stops_at_three_bullets() {
        let plan = plan_with(serde_json::json!({
            "max_customers": 200,
            "has_analytics": true,
            "max_menu_items": 0,
            "max_staff": 5,
        }));
        assert_eq!(
            plan.feature_bullets(),
            ["Up to 200 customers", "Advanced analytics", "Unlimited menu items"]
        );
    }

    #[test]
    fn trial_appended_even_with_many_features() {
        let plan = plan_with(serde_json::json!({
            "has_multi_branch": true,
            "has_delivery_tracking": true,
            "has_customer_app": true,
            "trial_days": 30,
        }));
        let bullets = plan.feature_bullets();
        assert_eq!(bullets.last().map(String::as_str), Some("30-day free trial"));
        assert_eq!(bullets.len(), 5);
    }
}
