//! Active subscription and scrape usage counters.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use crate::state::plans::Plan;

/// The signed-in user's active subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription {
    pub plan: &'static Plan,
    pub emails_scraped: u64,
}

/// Subscription state provided via context. Empty until a plan is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubscriptionState {
    pub current: Option<Subscription>,
}

impl SubscriptionState {
    /// Activate `plan` with a fresh usage counter.
    pub fn subscribe(&mut self, plan: &'static Plan) {
        self.current = Some(Subscription { plan, emails_scraped: 0 });
    }
}
