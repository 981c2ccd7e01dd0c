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

//! Registration form values and the rules checked before anything is sent.

use std::fmt;
use std::str::FromStr;

use email_address::EmailAddress;
use kitchen_api_types::RegisterTenantRequest;
use once_cell::sync::Lazy;
use regex::Regex;

/// Must stay identical to the backend's acceptance rule for tenant slugs.
pub const SUBDOMAIN_PATTERN: &str = "^[a-z0-9][a-z0-9_-]{0,98}$";

/// Select value meaning "no plan, assign later".
pub const NO_PLAN: &str = "none";

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_SUBDOMAIN_LEN: usize = 2;
pub const MIN_PASSWORD_LEN: usize = 8;

static SUBDOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(SUBDOMAIN_PATTERN).unwrap_or_else(|e| panic!("invalid subdomain pattern: {e}"))
});

/// Raw values as typed into the registration dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub kitchen_name: String,
    pub subdomain: String,
    /// Either [`NO_PLAN`] or a plan id rendered as a string.
    pub plan: String,
    pub admin_email: String,
    pub admin_password: String,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            kitchen_name: String::new(),
            subdomain: String::new(),
            plan: NO_PLAN.to_string(),
            admin_email: String::new(),
            admin_password: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    KitchenName,
    Subdomain,
    Plan,
    AdminEmail,
    AdminPassword,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::KitchenName => "kitchen name",
            FormField::Subdomain => "subdomain",
            FormField::Plan => "plan",
            FormField::AdminEmail => "admin email",
            FormField::AdminPassword => "admin password",
        };
        f.write_str(name)
    }
}

/// Field-scoped validation messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(FormField, &'static str)>,
}

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| *message)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.errors.iter().copied()
    }

    fn push(&mut self, field: FormField, message: &'static str) {
        if self.get(field).is_none() {
            self.errors.push((field, message));
        }
    }
}

/// The plan selection: nothing, or a backend plan id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanChoice {
    NoPlan,
    Plan(i64),
}

impl FromStr for PlanChoice {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() || raw == NO_PLAN {
            return Ok(PlanChoice::NoPlan);
        }
        raw.parse::<i64>().map(PlanChoice::Plan).map_err(|_| ())
    }
}

impl PlanChoice {
    pub fn plan_id(self) -> Option<i64> {
        match self {
            PlanChoice::NoPlan => None,
            PlanChoice::Plan(id) => Some(id),
        }
    }
}

/// Lowercase and trim a subdomain the way it is sent to the backend.
pub fn normalize_subdomain(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `raw` would be accepted as a tenant subdomain.
pub fn is_valid_subdomain(raw: &str) -> bool {
    subdomain_error(raw).is_none()
}

fn subdomain_error(raw: &str) -> Option<&'static str> {
    let subdomain = normalize_subdomain(raw);
    if subdomain.chars().count() < MIN_SUBDOMAIN_LEN {
        Some("Subdomain must be at least 2 characters")
    } else if !SUBDOMAIN_RE.is_match(&subdomain) {
        Some("Use 2–99 lowercase letters, numbers, hyphens, underscores")
    } else {
        None
    }
}

/// Length as a browser counts it (UTF-16 code units), so the minimums agree
/// with the backend's own form rules.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

impl RegistrationForm {
    /// Check every field and build the wire payload.
    ///
    /// All rules are evaluated so the dialog can mark every offending field
    /// at once.
    pub fn validate(&self) -> Result<RegisterTenantRequest, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.kitchen_name.trim();
        if utf16_len(name) < MIN_NAME_LEN {
            errors.push(
                FormField::KitchenName,
                "Kitchen name must be at least 2 characters",
            );
        }

        if let Some(message) = subdomain_error(&self.subdomain) {
            errors.push(FormField::Subdomain, message);
        }

        let plan = self.plan.parse::<PlanChoice>().unwrap_or_else(|()| {
            errors.push(FormField::Plan, "Select a valid plan");
            PlanChoice::NoPlan
        });

        let email = self.admin_email.trim();
        if !EmailAddress::is_valid(email) {
            errors.push(FormField::AdminEmail, "Invalid email address");
        }

        if utf16_len(&self.admin_password) < MIN_PASSWORD_LEN {
            errors.push(
                FormField::AdminPassword,
                "Password must be at least 8 characters",
            );
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RegisterTenantRequest {
            name: name.to_string(),
            subdomain: normalize_subdomain(&self.subdomain),
            admin_email: email.to_string(),
            admin_password: self.admin_password.clone(),
            plan_id: plan.plan_id(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            kitchen_name: "  Downtown Kitchen ".to_string(),
            subdomain: "Downtown-Kitchen".to_string(),
            plan: NO_PLAN.to_string(),
            admin_email: " owner@example.com ".to_string(),
            admin_password: "correct-horse".to_string(),
        }
    }

    #[test]
    fn mixed_case_subdomain_is_accepted_lowercased() {
        let request = valid_form().validate().unwrap();
        assert_eq!(request.subdomain, "downtown-kitchen");
        assert_eq!(request.name, "Downtown Kitchen");
        assert_eq!(request.admin_email, "owner@example.com");
        assert_eq!(request.plan_id, None);
    }

    #[test]
    fn subdomain_rules() {
        assert!(is_valid_subdomain("Downtown-Kitchen"));
        assert!(is_valid_subdomain("k2"));
        assert!(is_valid_subdomain("my_kitchen-01"));
        assert!(!is_valid_subdomain("a!b"));
        assert!(!is_valid_subdomain("a"));
        assert!(!is_valid_subdomain("-kitchen"));
        assert!(!is_valid_subdomain("_kitchen"));
        assert!(!is_valid_subdomain("down town"));
        assert!(is_valid_subdomain(&"a".repeat(99)));
        assert!(!is_valid_subdomain(&"a".repeat(100)));
    }

    #[test]
    fn short_subdomain_reports_length_first() {
        let form = RegistrationForm {
            subdomain: "!".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(FormField::Subdomain),
            Some("Subdomain must be at least 2 characters")
        );
    }

    #[test]
    fn bad_characters_report_pattern() {
        let form = RegistrationForm {
            subdomain: "a!b".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(FormField::Subdomain),
            Some("Use 2–99 lowercase letters, numbers, hyphens, underscores")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn every_failing_field_is_reported() {
        let form = RegistrationForm {
            kitchen_name: "K".to_string(),
            subdomain: "a".to_string(),
            plan: "gold".to_string(),
            admin_email: "not-an-email".to_string(),
            admin_password: "short".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(
            errors.get(FormField::KitchenName),
            Some("Kitchen name must be at least 2 characters")
        );
        assert_eq!(errors.get(FormField::Plan), Some("Select a valid plan"));
        assert_eq!(errors.get(FormField::AdminEmail), Some("Invalid email address"));
        assert_eq!(
            errors.get(FormField::AdminPassword),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn whitespace_only_name_is_too_short() {
        let form = RegistrationForm {
            kitchen_name: "   ".to_string(),
            ..valid_form()
        };
        assert!(form
            .validate()
            .unwrap_err()
            .get(FormField::KitchenName)
            .is_some());
    }

    #[test]
    fn selected_plan_becomes_plan_id() {
        let form = RegistrationForm {
            plan: "3".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap().plan_id, Some(3));
    }

    #[test]
    fn plan_choice_parsing() {
        assert_eq!("none".parse(), Ok(PlanChoice::NoPlan));
        assert_eq!("".parse(), Ok(PlanChoice::NoPlan));
        assert_eq!(" 12 ".parse(), Ok(PlanChoice::Plan(12)));
        assert_eq!("pro".parse::<PlanChoice>(), Err(()));
    }

    #[test]
    fn password_is_sent_untrimmed() {
        let form = RegistrationForm {
            admin_password: " spaced out ".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap().admin_password, " spaced out ");
    }

    #[test]
    fn password_length_counts_utf16_units() {
        // Each of these emoji is two UTF-16 code units.
        let form = RegistrationForm {
            admin_password: "🔥🍛🥘🍲".to_string(),
            ..valid_form()
        };
        assert!(form.validate().is_ok());

        let form = RegistrationForm {
            admin_password: "🔥🍛🥘".to_string(),
            ..valid_form()
        };
        assert_eq!(
            form.validate().unwrap_err().get(FormField::AdminPassword),
            Some("Password must be at least 8 characters")
        );
    }
}
