//! Top navigation bar shared by all pages.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::light_mode;

/// Brand, navigation links, and the theme toggle.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="toolbar">
            <a class="toolbar__brand" href="/">"LeadHarvest"</a>
            <nav class="toolbar__nav">
                <a class="toolbar__link" href="/">"Pricing"</a>
                <a class="toolbar__link" href="/dashboard">"Dashboard"</a>
            </nav>
            <span class="toolbar__spacer"></span>
            <button
                class="btn toolbar__theme-toggle"
                on:click=move |_| {
                    let current = ui.get().light_mode;
                    let next = light_mode::toggle(current);
                    ui.update(|u| u.light_mode = next);
                }
                title="Toggle light mode"
            >
                {move || if ui.get().light_mode { "☾" } else { "☀" }}
            </button>
        </header>
    }
}
