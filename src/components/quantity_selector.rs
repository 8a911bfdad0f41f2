//! Quantity Selector Component
//!
//! Drop-down offering every valid quantity.

use leptos::prelude::*;

use crate::models::Quantity;

/// Quantity picked from the `<select>`, `None` when the value is unusable
pub fn parse_selection(value: &str) -> Option<Quantity> {
    match value.parse::<Quantity>() {
        Ok(q) => Some(q),
        Err(err) => {
            log::warn!("[QuantitySelector] ignoring selection: {}", err);
            None
        }
    }
}

/// `<select>` with one option per allowed quantity
#[component]
pub fn QuantitySelector(
    quantity: Signal<Quantity>,
    on_change: impl Fn(Quantity) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let on_select = move |ev: web_sys::Event| {
        if let Some(q) = parse_selection(&event_target_value(&ev)) {
            on_change(q);
        }
    };

    view! {
        <select class="quantity-select" on:change=on_select>
            {Quantity::all().map(|q| {
                let is_selected = move || quantity.get() == q;
                view! {
                    <option value=q.to_string() prop:selected=is_selected>
                        {q.to_string()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
