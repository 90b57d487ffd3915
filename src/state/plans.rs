//! Subscription plan catalog.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

/// A purchasable scraping plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub slug: &'static str,
    pub name: &'static str,
    pub price_usd: u64,
    pub email_limit: u64,
}

/// All plans, cheapest first.
pub static PLANS: [Plan; 3] = [
    Plan { slug: "starter", name: "Starter", price_usd: 7, email_limit: 100 },
    Plan { slug: "pro", name: "Pro", price_usd: 14, email_limit: 500 },
    Plan { slug: "elite", name: "Elite", price_usd: 21, email_limit: 2000 },
];

/// Look up a plan by slug.
#[must_use]
pub fn by_slug(slug: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.slug == slug)
}
