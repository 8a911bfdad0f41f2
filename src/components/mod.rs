//! UI Components
//!
//! Leptos components for the shopping list. None of them own list state:
//! data comes in as signals, changes go out through callbacks.

mod entry_form;
mod quantity_selector;
mod item_list;
mod item_row;
mod summary_footer;

pub use entry_form::EntryForm;
pub use quantity_selector::QuantitySelector;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use summary_footer::SummaryFooter;
