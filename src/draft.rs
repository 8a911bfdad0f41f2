//! Entry Draft
//!
//! Title and quantity being typed into the entry form, before they become an
//! item.

use crate::ids::IdGenerator;
use crate::models::{Item, Quantity};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub quantity: Quantity,
}

impl EntryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn the draft into a new item and reset it.
    ///
    /// An empty title yields `None` and leaves the draft alone.
    pub fn submit(&mut self, ids: &IdGenerator) -> Option<Item> {
        if self.title.is_empty() {
            log::debug!("[EntryDraft] empty title, ignoring submit");
            return None;
        }
        let item = Item::new(ids.next_id(), std::mem::take(&mut self.title), self.quantity);
        self.quantity = Quantity::default();
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frozen_clock() -> u64 {
        42
    }

    #[test]
    fn test_submit_builds_item_and_resets() {
        let ids = IdGenerator::new(frozen_clock);
        let mut draft = EntryDraft {
            title: "Peynir".to_string(),
            quantity: Quantity::new(3).unwrap(),
        };

        let item = draft.submit(&ids).unwrap();
        assert_eq!(item.title, "Peynir");
        assert_eq!(item.quantity.get(), 3);
        assert!(!item.completed);
        assert_eq!(draft, EntryDraft::new());
    }

    #[test]
    fn test_empty_title_is_ignored() {
        let ids = IdGenerator::new(frozen_clock);
        let mut draft = EntryDraft {
            title: String::new(),
            quantity: Quantity::new(5).unwrap(),
        };

        assert!(draft.submit(&ids).is_none());
        assert_eq!(draft.quantity.get(), 5);
    }

    #[test]
    fn test_each_submit_gets_fresh_id() {
        let ids = IdGenerator::new(frozen_clock);
        let mut draft = EntryDraft::new();
        draft.title = "Süt".to_string();
        let first = draft.submit(&ids).unwrap();
        draft.title = "Süt".to_string();
        let second = draft.submit(&ids).unwrap();
        assert_ne!(first.id, second.id);
    }
}
