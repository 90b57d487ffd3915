//! Dashboard page showing scrape usage and the scrape form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Usage comes from the subscription context; without an active plan the
//! page points back at pricing and renders no progress bar at all.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::components::toolbar::Toolbar;
use crate::state::flash::{FlashKind, FlashState};
use crate::state::subscription::SubscriptionState;

const SCRAPE_STARTED: &str = "Scraping started in the background. Results will be available shortly.";

/// Dashboard page with the usage card and scrape form.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let flashes = expect_context::<RwSignal<FlashState>>();
    let subscription = expect_context::<RwSignal<SubscriptionState>>();

    let target = RwSignal::new(String::new());

    let on_scrape = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        flashes.update(|f| {
            f.push(FlashKind::Success, SCRAPE_STARTED);
        });
        target.set(String::new());
    };

    view! {
        <div class="dashboard-page">
            <Toolbar/>
            <Show
                when=move || subscription.get().current.is_some()
                fallback=move || {
                    view! {
                        <div class="dashboard-page__empty">
                            <p>"No active subscription."</p>
                            <a class="btn btn--primary" href="/">"See plans"</a>
                        </div>
                    }
                }
            >
                {move || {
                    subscription.get().current.map(|sub| {
                        view! {
                            <div class="dashboard-page__usage">
                                <h2 class="dashboard-page__plan">{sub.plan.name}</h2>
                                <p class="dashboard-page__usage-label">
                                    {usage_label(sub.emails_scraped, sub.plan.email_limit)}
                                </p>
                                <ProgressBar
                                    limit=sub.plan.email_limit.to_string()
                                    scraped=sub.emails_scraped.to_string()
                                />
                            </div>
                        }
                    })
                }}
                <form class="dashboard-page__scrape" on:submit=on_scrape>
                    <input
                        class="dashboard-page__target"
                        type="text"
                        placeholder="Website URL or keyword"
                        prop:value=move || target.get()
                        on:input=move |ev| target.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">
                        "Start scraping"
                    </button>
                </form>
            </Show>
        </div>
    }
}

fn usage_label(scraped: u64, limit: u64) -> String {
    format!("{scraped} of {limit} emails scraped this month")
}
