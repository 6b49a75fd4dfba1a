//! Subscription [`Plan`] definitions.

use common::{money::Currency, Money};
use rust_decimal::Decimal;

use crate::domain::user::Tier;

/// Subscription plan presented on the subscriptions screen.
#[derive(Clone, Debug)]
pub struct Plan {
    /// [`Tier`] this [`Plan`] grants.
    pub tier: Tier,

    /// Monthly price, or [`None`] when the plan is complimentary or priced
    /// individually.
    pub price: Option<Money>,

    /// Marketed features of this [`Plan`].
    pub features: Vec<&'static str>,

    /// Indicator whether this [`Plan`] is highlighted as the popular choice.
    pub popular: bool,
}

impl Plan {
    /// Returns the full [`Plan`] table, in presentation order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let inr = |amount: i64| Money {
            amount: Decimal::from(amount),
            currency: Currency::Inr,
        };

        vec![
            Self {
                tier: Tier::Free,
                price: None,
                features: vec![
                    "Browse properties",
                    "Basic search filters",
                    "Contact agents",
                    "Save up to 5 favorites",
                ],
                popular: false,
            },
            Self {
                tier: Tier::Basic,
                price: Some(inr(299)),
                features: vec![
                    "All Free features",
                    "Advanced search filters",
                    "Unlimited favorites",
                    "Priority customer support",
                    "Property alerts",
                    "Market insights",
                ],
                popular: true,
            },
            Self {
                tier: Tier::Pro,
                price: Some(inr(999)),
                features: vec![
                    "All Basic features",
                    "Unlimited agent messaging",
                    "Post unlimited properties",
                    "Featured listings",
                    "Lead management",
                    "Analytics dashboard",
                ],
                popular: false,
            },
            Self {
                tier: Tier::Enterprise,
                price: None,
                features: vec![
                    "All Pro features",
                    "Team seats",
                    "Dedicated account manager",
                    "Custom integrations",
                ],
                popular: false,
            },
        ]
    }
}
