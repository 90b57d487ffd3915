//! Pricing page listing plans with a select-and-go flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. Choosing a plan activates it locally, flashes
//! a confirmation, and moves the user to the dashboard.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::pricing_card::PricingCard;
use crate::components::toolbar::Toolbar;
use crate::state::flash::{FlashKind, FlashState};
use crate::state::plans::{PLANS, Plan};
use crate::state::subscription::SubscriptionState;

/// Landing page with one card per plan.
#[component]
pub fn PricingPage() -> impl IntoView {
    let flashes = expect_context::<RwSignal<FlashState>>();
    let subscription = expect_context::<RwSignal<SubscriptionState>>();
    let navigate = use_navigate();

    let chosen = RwSignal::new(false);
    let on_select = Callback::new(move |plan: &'static Plan| {
        subscription.update(|s| s.subscribe(plan));
        flashes.update(|f| {
            f.push(FlashKind::Success, subscribed_message(plan));
        });
        chosen.set(true);
    });

    let navigate_to_dashboard = navigate.clone();
    Effect::new(move || {
        if chosen.get() {
            chosen.set(false);
            navigate_to_dashboard("/dashboard", NavigateOptions::default());
        }
    });

    view! {
        <div class="pricing-page">
            <Toolbar/>
            <h1 class="pricing-page__title">"Choose your plan"</h1>
            <div class="pricing-page__grid">
                {PLANS
                    .iter()
                    .map(|plan| view! { <PricingCard plan on_select/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn subscribed_message(plan: &Plan) -> String {
    format!("Subscribed to the {} plan", plan.name)
}
