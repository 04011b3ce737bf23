//! Subscription plan catalog and the per-attempt payment session request.
//! Plan ids must match the provider-side configuration.

use crate::features::auth::types::Identity;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaymentPlan {
    pub id: &'static str,
    /// Provider-side plan identifier.
    pub plan_id: &'static str,
    pub name: &'static str,
    pub amount_cents: u32,
    pub currency: &'static str,
    /// Comma-separated feature list rendered on the pricing page.
    pub description: &'static str,
}

impl PaymentPlan {
    pub fn display_price(&self) -> String {
        let dollars = self.amount_cents / 100;
        let cents = self.amount_cents % 100;
        if self.currency == "USD" {
            format!("${dollars}.{cents:02}")
        } else {
            format!("{dollars}.{cents:02} {}", self.currency)
        }
    }

    pub fn features(&self) -> impl Iterator<Item = &'static str> {
        self.description.split(", ")
    }
}

pub const MONTHLY: PaymentPlan = PaymentPlan {
    id: "monthly_plan",
    plan_id: "gOw8NQR7",
    name: "Monthly Plan",
    amount_cents: 499,
    currency: "USD",
    description: "All 44 educational games, Detailed progress reports, Offline game access, Priority customer support",
};

pub const PLANS: &[PaymentPlan] = &[MONTHLY];

pub fn plan_by_plan_id(plan_id: &str) -> Option<&'static PaymentPlan> {
    PLANS.iter().find(|plan| plan.plan_id == plan_id)
}

pub fn plan_by_id(id: &str) -> Option<&'static PaymentPlan> {
    PLANS.iter().find(|plan| plan.id == id)
}

/// Parameters for one checkout attempt. Ephemeral: constructed per attempt,
/// never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentSessionRequest {
    pub user_id: String,
    pub country: String,
    pub plan_id: String,
    pub amount_cents: u32,
    pub currency: String,
    pub locale: String,
    pub theme: String,
}

impl PaymentSessionRequest {
    /// The provider keys users by email, so that is the session user id.
    pub fn for_plan(identity: &Identity, plan: &PaymentPlan) -> Self {
        Self {
            user_id: identity.email.clone(),
            country: "US".to_string(),
            plan_id: plan.plan_id.to_string(),
            amount_cents: plan.amount_cents,
            currency: plan.currency.to_string(),
            locale: "en".to_string(),
            theme: "default".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_plan_is_resolvable_both_ways() {
        assert_eq!(plan_by_plan_id("gOw8NQR7"), Some(&MONTHLY));
        assert_eq!(plan_by_id("monthly_plan"), Some(&MONTHLY));
        assert_eq!(plan_by_plan_id("unknown"), None);
    }

    #[test]
    fn price_renders_with_two_decimals() {
        assert_eq!(MONTHLY.display_price(), "$4.99");
        let whole = PaymentPlan {
            amount_cents: 1200,
            ..MONTHLY
        };
        assert_eq!(whole.display_price(), "$12.00");
    }

    #[test]
    fn features_split_on_commas() {
        let features: Vec<_> = MONTHLY.features().collect();
        assert_eq!(features.len(), 4);
        assert_eq!(features[0], "All 44 educational games");
    }

    #[test]
    fn session_request_uses_the_identity_email() {
        let identity = Identity {
            id: "abc".to_string(),
            email: "parent@example.com".to_string(),
            access_token: "token".to_string(),
            pending_verification: false,
        };
        let request = PaymentSessionRequest::for_plan(&identity, &MONTHLY);
        assert_eq!(request.user_id, "parent@example.com");
        assert_eq!(request.plan_id, "gOw8NQR7");
        assert_eq!(request.currency, "USD");
    }
}
