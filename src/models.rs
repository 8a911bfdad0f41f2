//! Frontend Models
//!
//! Data structures for the shopping list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuantityError;

/// Item identifier, unique within a page session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How many of an item to buy, always within `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quantity(u8);

impl Quantity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Result<Self, QuantityError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(QuantityError::OutOfRange(i64::from(value)))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every selectable quantity, ascending
    pub fn all() -> impl Iterator<Item = Quantity> {
        (Self::MIN..=Self::MAX).map(Quantity)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u8 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| QuantityError::NotANumber(s.to_string()))?;
        u8::try_from(value)
            .map_err(|_| QuantityError::OutOfRange(value))
            .and_then(Self::new)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shopping list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub quantity: Quantity,
    pub completed: bool,
}

impl Item {
    /// Create a new, not yet completed item
    pub fn new(id: ItemId, title: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            id,
            title: title.into(),
            quantity,
            completed: false,
        }
    }
}

/// Whether the item with `id` is in `items` and completed
pub fn is_completed(items: &[Item], id: ItemId) -> bool {
    items.iter().any(|item| item.id == id && item.completed)
}

/// The five sample items the list starts with
pub fn seed_items() -> Vec<Item> {
    [
        (1, "Yumurta", 10, true),
        (2, "Ekmek", 2, true),
        (3, "Süt", 1, false),
        (4, "Et", 1, false),
        (5, "Zeytin", 2, true),
    ]
    .into_iter()
    .map(|(id, title, quantity, completed)| Item {
        id: ItemId(id),
        title: title.to_string(),
        quantity: Quantity(quantity),
        completed,
    })
    .collect()
}
