//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::flash_stack::FlashStack;
use crate::pages::{dashboard::DashboardPage, pricing::PricingPage};
use crate::state::{flash::FlashState, subscription::SubscriptionState, ui::UiState};
use crate::util::light_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Applies the persisted theme before the first render commits, provides the
/// shared state contexts, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // A stored "true" means light; anything else stays dark.
    let stored_light = light_mode::read_preference();
    light_mode::apply(stored_light);

    let ui = RwSignal::new(UiState::with_light_mode(stored_light));
    let flashes = RwSignal::new(FlashState::default());
    let subscription = RwSignal::new(SubscriptionState::default());

    provide_context(ui);
    provide_context(flashes);
    provide_context(subscription);

    view! {
        <Stylesheet id="leptos" href="/pkg/leadharvest.css"/>
        <Title text="LeadHarvest"/>

        <FlashStack/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PricingPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
