//! Item classification module.
//!
//! Provides the `Category` enum, the closed set of update-rule families.
//! An item's category is a pure function of its (immutable) name, so it is
//! computed once at construction time and cached on the item; the nightly
//! update dispatches on the enum, never on the string.

use serde::{Deserialize, Serialize};

/// The rule family an item belongs to.
///
/// Classification is a case-insensitive substring match against the item
/// name, checked in a fixed precedence order (a name that matches several
/// patterns gets the first one). Unrecognized names fall through to
/// `Ordinary`; there is no error case.
///
/// # Examples
///
/// ```rust
/// use stockrot::Category;
///
/// assert_eq!(Category::classify("Aged Brie"), Category::Aging);
/// assert_eq!(Category::classify("Sulfuras, Hand of Ragnaros"), Category::Legendary);
/// assert_eq!(Category::classify("CONJURED Mana Cake"), Category::FastDecay);
/// assert_eq!(Category::classify("Elixir of the Mongoose"), Category::Ordinary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Default family: quality decays by 1 per day, 2 once expired.
    Ordinary,

    /// Quality rises with age instead of decaying ("Aged Brie").
    Aging,

    /// Fixed quality, exempt from time entirely ("Sulfuras").
    Legendary,

    /// Quality rises as the deadline nears, then collapses to 0
    /// ("Backstage passes").
    TimeLimited,

    /// Decays at twice the ordinary rate ("Conjured").
    FastDecay,
}

impl Category {
    /// Classify an item name into its category.
    ///
    /// Pure and total: any string yields exactly one category.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stockrot::Category;
    ///
    /// // Substring match, not whole-name equality
    /// assert_eq!(
    ///     Category::classify("Backstage passes to a TAFKAL80ETC concert"),
    ///     Category::TimeLimited,
    /// );
    /// ```
    pub fn classify(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("aged brie") {
            Category::Aging
        } else if name.contains("sulfuras") {
            Category::Legendary
        } else if name.contains("backstage passes") {
            Category::TimeLimited
        } else if name.contains("conjured") {
            Category::FastDecay
        } else {
            Category::Ordinary
        }
    }
}
