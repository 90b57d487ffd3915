//! Plan card for the pricing page.
//!
//! The card lifts on pointer enter and settles back on leave; the style pair
//! comes from `util::hover` so the effect itself stays unit testable.

#[cfg(test)]
#[path = "pricing_card_test.rs"]
mod pricing_card_test;

use leptos::prelude::*;

use crate::state::plans::Plan;
use crate::util::hover;

/// A plan card with the hover lift and a select action.
#[component]
pub fn PricingCard(
    plan: &'static Plan,
    #[prop(optional)] on_select: Option<Callback<&'static Plan>>,
) -> impl IntoView {
    let hovered = RwSignal::new(false);

    let on_select_click = Callback::new(move |()| {
        if let Some(on_select) = on_select.as_ref() {
            on_select.run(plan);
        }
    });

    view! {
        <div
            class="pricing-card"
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
            style:transform=move || hover::lift(hovered.get()).transform
            style:box-shadow=move || hover::lift(hovered.get()).box_shadow
        >
            <h2 class="pricing-card__name">{plan.name}</h2>
            <p class="pricing-card__price">{price_label(plan)}</p>
            <p class="pricing-card__limit">{limit_label(plan)}</p>
            <button class="btn btn--primary pricing-card__select" on:click=move |_| on_select_click.run(())>
                "Choose "
                {plan.name}
            </button>
        </div>
    }
}

fn price_label(plan: &Plan) -> String {
    format!("${}/mo", plan.price_usd)
}

fn limit_label(plan: &Plan) -> String {
    format!("Up to {} emails per month", plan.email_limit)
}
