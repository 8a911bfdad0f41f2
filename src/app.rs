//! Shopping List App
//!
//! Root component. Owns the list store and hands data and callbacks down to
//! the form, list and footer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{EntryForm, ItemList, SummaryFooter};
use crate::config::AppConfig;
use crate::confirm::BrowserConfirm;
use crate::ids::{browser_clock, IdGenerator};
use crate::list::{ShoppingList, ShoppingListStoreFields};
use crate::models::{Item, ItemId};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let messages = config.messages();

    // State
    let initial = if config.seed_items {
        ShoppingList::seeded()
    } else {
        ShoppingList::new()
    };
    let floor = initial.max_id().map_or(0, |id| id.0);
    let ids = StoredValue::new(IdGenerator::with_floor(browser_clock, floor));
    let store = Store::new(initial);

    // Derived views of the list
    let items = Signal::derive(move || store.items().get());
    let summary = Signal::derive(move || store.with(|list| list.summary()));

    // Mutations
    let add_item = Callback::new(move |item: Item| {
        store.update(|list| list.add_item(item));
    });
    let delete_item = Callback::new(move |id: ItemId| {
        store.update(|list| {
            list.delete_item(id);
        });
    });
    let toggle_item = Callback::new(move |id: ItemId| {
        store.update(|list| {
            list.toggle_item(id);
        });
    });
    let clear_list = Callback::new(move |_: ()| {
        store.update(|list| {
            list.clear_list(&BrowserConfirm, messages.confirm_clear);
        });
    });

    view! {
        <div class="app">
            <h2>{messages.title}</h2>

            <EntryForm
                on_add=add_item
                on_clear=clear_list
                ids=ids
                messages=messages
            />

            <ItemList
                items=items
                on_delete=delete_item
                on_toggle=toggle_item
                messages=messages
            />

            <SummaryFooter summary=summary messages=messages />
        </div>
    }
}
