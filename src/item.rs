//! Inventory item module.
//!
//! Provides the `Item` type, the mutable record the engine operates on.
//! Construction is permissive: any `sell_in`/`quality` combination is
//! accepted and never rejected, matching the shop's historical behavior.
//! [`Item::validated`] offers opt-in range checking for callers that want it.

use crate::category::Category;
use crate::error::ItemError;
use crate::rules::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single piece of stock.
///
/// The name is fixed for the item's lifetime and is the sole signal used
/// for classification; the category is computed once at construction and
/// cached, so the nightly update never re-inspects the string. `sell_in`
/// and `quality` are public and mutated in place, once per simulated day.
///
/// # Examples
///
/// ```rust
/// use stockrot::{Category, Item};
///
/// let item = Item::new("Aged Brie", 10, 20);
/// assert_eq!(item.name(), "Aged Brie");
/// assert_eq!(item.sell_in, 10);
/// assert_eq!(item.quality, 20);
/// assert_eq!(item.category(), Category::Aging);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    category: Category,

    /// Days remaining before the sell-by date. Goes negative once expired;
    /// never clamped.
    pub sell_in: i32,

    /// Value of the item. Held to `[0, 50]` by the update rules for
    /// non-legendary items; legendary items sit at 80.
    pub quality: i32,
}

/// Wire shape of an item: the cached category is derived state and is
/// recomputed from the name on the way back in.
#[derive(Serialize, Deserialize)]
#[serde(rename = "Item")]
struct RawItem {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl Serialize for Item {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawItem {
            name: self.name.clone(),
            sell_in: self.sell_in,
            quality: self.quality,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawItem::deserialize(deserializer)?;
        Ok(Item::new(raw.name, raw.sell_in, raw.quality))
    }
}

impl Item {
    /// Create a new item.
    ///
    /// Permissive by design: out-of-range quality and negative `sell_in`
    /// are accepted as given. The update rules pull quality back inside
    /// its bounds on the first day they touch the item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stockrot::Item;
    ///
    /// let item = Item::new("foo", 10, 20);
    /// assert_eq!(item.quality, 20);
    ///
    /// // No validation on this path
    /// let odd = Item::new("foo", -3, 99);
    /// assert_eq!(odd.quality, 99);
    /// ```
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = Category::classify(&name);
        Self {
            name,
            category,
            sell_in,
            quality,
        }
    }

    /// Create a new item, rejecting out-of-range quality.
    ///
    /// Non-legendary items must start inside `[0, 50]`; legendary items
    /// must carry exactly their fixed quality of 80. `sell_in` is not
    /// checked (a negative value just means the item is already expired).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stockrot::{Item, ItemError};
    ///
    /// assert!(Item::validated("foo", 10, 20).is_ok());
    /// assert!(Item::validated("Sulfuras, Hand of Ragnaros", 0, 80).is_ok());
    ///
    /// let err = Item::validated("foo", 10, 51).unwrap_err();
    /// assert_eq!(err, ItemError::QualityOutOfRange { quality: 51 });
    /// ```
    pub fn validated(
        name: impl Into<String>,
        sell_in: i32,
        quality: i32,
    ) -> Result<Self, ItemError> {
        let item = Self::new(name, sell_in, quality);
        match item.category {
            Category::Legendary => {
                if quality != LEGENDARY_QUALITY {
                    return Err(ItemError::LegendaryQualityMismatch { quality });
                }
            }
            _ => {
                if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
                    return Err(ItemError::QualityOutOfRange { quality });
                }
            }
        }
        Ok(item)
    }

    /// The item's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The category this item was classified into at construction.
    ///
    /// Stable for the item's lifetime, since the name never changes.
    pub fn category(&self) -> Category {
        self.category
    }
}

impl std::fmt::Display for Item {
    /// Renders as `"<name>, <sell_in>, <quality>"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
