//! Shop inventory module.
//!
//! Provides the `Shop` type, the stateful façade that owns the item
//! collection and applies the pure rule layer across it, one simulated
//! day at a time.

use crate::item::Item;
use crate::rules::advance_one_day;
use serde::{Deserialize, Serialize};

/// A shop's held stock.
///
/// The item sequence is taken as given: same length, same order, no
/// validation, before and after any number of day advances. Items are
/// independent single-state machines, so the order they sit in only
/// affects presentation, never outcomes.
///
/// # Examples
///
/// ```rust
/// use stockrot::{Item, Shop};
///
/// let mut shop = Shop::new(vec![
///     Item::new("Aged Brie", 2, 0),
///     Item::new("Elixir of the Mongoose", 5, 7),
/// ]);
///
/// shop.advance_day();
///
/// assert_eq!(shop.items()[0].quality, 1);
/// assert_eq!(shop.items()[1].quality, 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    items: Vec<Item>,
}

impl Shop {
    /// Create a shop holding the given items, in the given order.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Advance the whole inventory by one simulated day.
    ///
    /// One pass over the collection; every item is updated independently
    /// by its category's rule. Safe to call indefinitely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stockrot::{Item, Shop};
    ///
    /// let mut shop = Shop::new(vec![Item::new("foo", 10, 20)]);
    /// shop.advance_day();
    /// assert_eq!(shop.items()[0].sell_in, 9);
    /// assert_eq!(shop.items()[0].quality, 19);
    /// ```
    pub fn advance_day(&mut self) {
        for item in &mut self.items {
            advance_one_day(item);
        }
    }

    /// Advance the whole inventory by `days` simulated days.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stockrot::{Item, Shop};
    ///
    /// let mut shop = Shop::new(vec![Item::new("foo", 10, 20)]);
    /// shop.advance_days(3);
    /// assert_eq!(shop.items()[0].sell_in, 7);
    /// assert_eq!(shop.items()[0].quality, 17);
    /// ```
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_day();
        }
    }

    /// The held items, in their original order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Mutable access to the held items.
    ///
    /// Callers may adjust fields directly; the slice cannot change length,
    /// so the sequence structure stays intact.
    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    /// Consume the shop and hand the items back.
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Number of held items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the shop holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Item>> for Shop {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
