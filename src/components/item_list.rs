//! Item List Component
//!
//! Renders every item, or a placeholder when there are none.

use leptos::prelude::*;

use crate::config::Messages;
use crate::models::{is_completed, Item, ItemId};

use super::ItemRow;

/// List of item rows
#[component]
pub fn ItemList(
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] on_delete: Callback<ItemId>,
    #[prop(into)] on_toggle: Callback<ItemId>,
    messages: &'static Messages,
) -> impl IntoView {
    let is_empty = move || items.with(|items| items.is_empty());

    view! {
        <Show
            when=move || !is_empty()
            fallback=move || view! { <div class="empty-list">{messages.no_items}</div> }
        >
            <div class="list">
                <ul>
                    <For
                        each=move || items.get()
                        key=|item| item.id
                        children=move |item| {
                            let id = item.id;
                            let completed = Signal::derive(move || {
                                items.with(|items| is_completed(items, id))
                            });
                            view! {
                                <ItemRow
                                    item=item
                                    completed=completed
                                    on_delete=on_delete
                                    on_toggle=on_toggle
                                    messages=messages
                                />
                            }
                        }
                    />
                </ul>
            </div>
        </Show>
    }
}
