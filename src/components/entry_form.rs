//! Entry Form Component
//!
//! Title input, quantity selector, add and clear buttons.

use leptos::prelude::*;

use crate::config::Messages;
use crate::draft::EntryDraft;
use crate::ids::IdGenerator;
use crate::models::{Item, Quantity};

use super::QuantitySelector;

/// Form for adding new items and clearing the list
///
/// # Arguments
/// * `on_add` - Called with each newly built item
/// * `on_clear` - Called when the clear button is pressed, whatever the draft holds
/// * `ids` - Source of fresh item ids
#[component]
pub fn EntryForm(
    #[prop(into)] on_add: Callback<Item>,
    #[prop(into)] on_clear: Callback<()>,
    ids: StoredValue<IdGenerator>,
    messages: &'static Messages,
) -> impl IntoView {
    let draft = RwSignal::new(EntryDraft::new());
    let quantity = Signal::derive(move || draft.with(|d| d.quantity));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let item = ids
            .with_value(|ids| draft.try_update(|d| d.submit(ids)))
            .flatten();
        if let Some(item) = item {
            on_add.run(item);
        }
    };

    view! {
        <form class="entry-form" on:submit=submit>
            <input
                type="text"
                placeholder=messages.title_placeholder
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| {
                    let title = event_target_value(&ev);
                    draft.update(|d| d.title = title);
                }
            />
            <QuantitySelector
                quantity=quantity
                on_change=move |q: Quantity| draft.update(|d| d.quantity = q)
            />
            <button type="submit">{messages.add_button}</button>
            <button type="button" class="clear-btn" on:click=move |_| on_clear.run(())>
                {messages.clear_button}
            </button>
        </form>
    }
}
