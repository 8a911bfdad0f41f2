//! Item Row Component
//!
//! A single item in the list.

use leptos::prelude::*;

use crate::config::Messages;
use crate::models::{Item, ItemId};

/// Checkbox, quantity and title, and a delete button
///
/// `completed` tracks the live item so toggling updates the row in place.
#[component]
pub fn ItemRow(
    item: Item,
    #[prop(into)] completed: Signal<bool>,
    #[prop(into)] on_delete: Callback<ItemId>,
    #[prop(into)] on_toggle: Callback<ItemId>,
    messages: &'static Messages,
) -> impl IntoView {
    let id = item.id;
    let row_class = move || if completed.get() { "item-row completed" } else { "item-row" };
    let text_style = move || {
        if completed.get() { "text-decoration: line-through;" } else { "" }
    };

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                prop:checked=move || completed.get()
                on:change=move |_| on_toggle.run(id)
            />
            <span
                class="item-text"
                style=text_style
            >
                {format!("{} {}", item.quantity, item.title)}
            </span>
            <button class="delete-btn" on:click=move |_| on_delete.run(id)>
                {messages.delete_button}
            </button>
        </li>
    }
}
