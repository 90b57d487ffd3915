//! Flash message stack with timed auto-dismissal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each flash schedules its own fade and removal when it mounts. Transitions
//! go through `FlashState` by id, so a timer firing against a flash that is
//! already gone is a no-op. There is no cancellation path; once shown, a
//! flash always runs its timeline.

use leptos::prelude::*;

use crate::state::flash::{Flash, FlashState};
use crate::util::dismiss;

/// Renders every queued flash message.
#[component]
pub fn FlashStack() -> impl IntoView {
    let flashes = expect_context::<RwSignal<FlashState>>();

    view! {
        <div class="flash-stack">
            <For
                each=move || flashes.get().messages
                key=|flash| flash.id.clone()
                children=move |flash: Flash| view! { <FlashMessage flash/> }
            />
        </div>
    }
}

/// A single flash message on its dismissal timeline.
#[component]
fn FlashMessage(flash: Flash) -> impl IntoView {
    let flashes = expect_context::<RwSignal<FlashState>>();
    let id = flash.id.clone();

    #[cfg(feature = "hydrate")]
    {
        let id = id.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(dismiss::FADE_DELAY_MS)).await;
            flashes.update(|s| s.begin_fade(&id));
            gloo_timers::future::sleep(std::time::Duration::from_millis(dismiss::REMOVE_DELAY_MS)).await;
            flashes.update(|s| s.dismiss(&id));
        });
    }

    view! {
        <div
            class=flash.kind.css_class()
            style:opacity=move || dismiss::opacity(flashes.get().phase_of(&id))
        >
            {flash.text.clone()}
        </div>
    }
}
