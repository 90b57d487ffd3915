//! Scrape usage progress bar.

use leptos::prelude::*;

use crate::util::progress;

/// Usage bar whose fill width is driven by its `data-limit` and
/// `data-scraped` attributes. Attributes that fail to parse leave the width
/// to the stylesheet.
#[component]
pub fn ProgressBar(limit: String, scraped: String) -> impl IntoView {
    let width = progress::width_from_attrs(&limit, &scraped);

    view! {
        <div class="progress-track">
            <div
                class="progress-bar"
                data-limit=limit
                data-scraped=scraped
                style:width=width.unwrap_or_default()
            ></div>
        </div>
    }
}
