//! Shopping List State
//!
//! The authoritative item list and the only operations allowed to change it.
//! `App` owns one of these inside a `reactive_stores::Store`.

use reactive_stores::Store;

use crate::confirm::Confirm;
use crate::models::{seed_items, Item, ItemId};
use crate::summary::Summary;

/// Ordered list of items, ids unique
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ShoppingList {
    /// Items in insertion order
    pub items: Vec<Item>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// List pre-filled with the sample items
    pub fn seeded() -> Self {
        Self { items: seed_items() }
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Highest id in the list, used to keep new ids clear of seeded ones
    pub fn max_id(&self) -> Option<ItemId> {
        self.items.iter().map(|item| item.id).max()
    }

    /// Append an item. Validation is the entry form's job.
    pub fn add_item(&mut self, item: Item) {
        debug_assert!(self.get(item.id).is_none(), "duplicate item id {}", item.id);
        log::info!("[List] add {} {:?} x{}", item.id, item.title, item.quantity);
        self.items.push(item);
    }

    /// Remove the item with `id`; returns false when there was none
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            log::info!("[List] delete {}", id);
        } else {
            log::debug!("[List] delete {}: no such item", id);
        }
        removed
    }

    /// Flip `completed` on the item with `id`; returns false when there was none
    pub fn toggle_item(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                log::info!("[List] toggle {} -> completed={}", id, item.completed);
                true
            }
            None => {
                log::debug!("[List] toggle {}: no such item", id);
                false
            }
        }
    }

    /// Empty the list if the user agrees; returns whether it was cleared
    pub fn clear_list(&mut self, confirm: &dyn Confirm, message: &str) -> bool {
        if !confirm.confirm(message) {
            log::debug!("[List] clear declined");
            return false;
        }
        log::info!("[List] clear {} items", self.items.len());
        self.items.clear();
        true
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.items)
    }
}

#[cfg(test)]
impl ShoppingList {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdGenerator;
    use crate::models::Quantity;
    use crate::summary::SummaryStatus;

    const MESSAGE: &str = "Clear?";

    fn zero_clock() -> u64 {
        0
    }

    fn yes(_: &str) -> bool {
        true
    }

    fn no(_: &str) -> bool {
        false
    }

    fn new_item(ids: &IdGenerator, title: &str) -> Item {
        Item::new(ids.next_id(), title, Quantity::default())
    }

    #[test]
    fn test_add_appends_pending_items() {
        let ids = IdGenerator::new(zero_clock);
        let mut list = ShoppingList::new();
        for title in ["a", "b", "c", "d"] {
            list.add_item(new_item(&ids, title));
        }
        assert_eq!(list.len(), 4);
        assert!(list.items().iter().all(|item| !item.completed));
        let titles: Vec<&str> = list.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut list = ShoppingList::seeded();
        let before = list.clone();

        assert!(list.toggle_item(ItemId(3)));
        assert!(list.get(ItemId(3)).unwrap().completed);
        assert_eq!(list.items()[0], before.items()[0]);

        assert!(list.toggle_item(ItemId(3)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = ShoppingList::seeded();
        let before = list.clone();
        assert!(!list.toggle_item(ItemId(99)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut list = ShoppingList::seeded();
        assert!(list.delete_item(ItemId(2)));
        assert_eq!(list.len(), 4);
        assert!(list.get(ItemId(2)).is_none());

        let after_first = list.clone();
        assert!(!list.delete_item(ItemId(2)));
        assert_eq!(list, after_first);
    }

    #[test]
    fn test_clear_declined_keeps_list() {
        let mut list = ShoppingList::seeded();
        let before = list.clone();
        assert!(!list.clear_list(&no, MESSAGE));
        assert_eq!(list, before);
    }

    #[test]
    fn test_clear_confirmed_empties_list() {
        let mut list = ShoppingList::seeded();
        assert!(list.clear_list(&yes, MESSAGE));
        assert!(list.is_empty());

        // Clearing an already empty list still asks and still succeeds
        assert!(list.clear_list(&yes, MESSAGE));
        assert!(list.is_empty());
    }

    #[test]
    fn test_clear_passes_message_to_prompt() {
        let mut list = ShoppingList::seeded();
        let asked = std::cell::RefCell::new(String::new());
        let recorder = |message: &str| {
            *asked.borrow_mut() = message.to_string();
            false
        };
        list.clear_list(&recorder, MESSAGE);
        assert_eq!(*asked.borrow(), MESSAGE);
    }

    #[test]
    fn test_seeded_scenario() {
        let mut list = ShoppingList::seeded();
        let ids = IdGenerator::with_floor(zero_clock, list.max_id().map_or(0, |id| id.0));
        assert_eq!(list.summary().completed_count, 3);

        let peynir = Item::new(ids.next_id(), "Peynir", Quantity::new(3).unwrap());
        list.add_item(peynir);
        assert_eq!(list.len(), 6);
        assert!(!list.items()[5].completed);
        assert_eq!(list.items()[5].quantity.get(), 3);

        list.delete_item(ItemId(3));
        assert_eq!(list.len(), 5);
        assert_eq!(
            list.summary().status(),
            SummaryStatus::Progress { completed: 3, total: 5 }
        );

        list.toggle_item(ItemId(4));
        assert_eq!(list.summary().completed_count, 4);

        assert!(list.clear_list(&yes, MESSAGE));
        assert_eq!(list.summary().status(), SummaryStatus::Empty);
    }
}
