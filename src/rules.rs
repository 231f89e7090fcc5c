//! Day-advance rules module.
//!
//! One pure update function per category, plus the dispatch that ties a
//! category to its rule. Every function mutates the item in place, never
//! fails, and completes in constant time. A new category slots in as one
//! classifier arm plus one function here.

use crate::category::Category;
use crate::item::Item;

/// Lower quality bound for non-legendary items.
pub const MIN_QUALITY: i32 = 0;

/// Upper quality bound for non-legendary items.
pub const MAX_QUALITY: i32 = 50;

/// The fixed quality of legendary items, exempt from the `[0, 50]` bound.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Advance a single item by one simulated day.
///
/// Dispatches on the item's cached category. Expiry is judged on the
/// `sell_in` value as it stands when the call begins: the day `sell_in`
/// reaches 0 still uses the pre-expiry delta, and only calls that start
/// at `sell_in <= 0` apply the expired behavior.
///
/// # Examples
///
/// ```rust
/// use stockrot::{advance_one_day, Item};
///
/// let mut pass = Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 20);
/// advance_one_day(&mut pass);
/// assert_eq!((pass.sell_in, pass.quality), (4, 23));
///
/// let mut brie = Item::new("Aged Brie", 0, 10);
/// advance_one_day(&mut brie);
/// assert_eq!((brie.sell_in, brie.quality), (-1, 12));
/// ```
pub fn advance_one_day(item: &mut Item) {
    item.category().rule()(item)
}

impl Category {
    /// Look up the update rule for this category.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stockrot::{Category, Item};
    ///
    /// let mut item = Item::new("foo", 3, 4);
    /// Category::Ordinary.rule()(&mut item);
    /// assert_eq!((item.sell_in, item.quality), (2, 3));
    /// ```
    pub fn rule(self) -> fn(&mut Item) {
        match self {
            Category::Ordinary => ordinary,
            Category::Aging => aging,
            Category::Legendary => legendary,
            Category::TimeLimited => time_limited,
            Category::FastDecay => fast_decay,
        }
    }
}

/// Shift quality by `delta`, clamp into `[MIN_QUALITY, MAX_QUALITY]`, and
/// spend one day of `sell_in`. Shared by the three steady-rate rules.
fn shift_and_age(item: &mut Item, delta: i32) {
    item.quality = item
        .quality
        .saturating_add(delta)
        .clamp(MIN_QUALITY, MAX_QUALITY);
    item.sell_in = item.sell_in.saturating_sub(1);
}

/// Ordinary items lose 1 quality per day, 2 once expired.
pub fn ordinary(item: &mut Item) {
    let delta = if item.sell_in > 0 { -1 } else { -2 };
    shift_and_age(item, delta);
}

/// Aging items gain 1 quality per day, 2 once expired.
pub fn aging(item: &mut Item) {
    let delta = if item.sell_in > 0 { 1 } else { 2 };
    shift_and_age(item, delta);
}

/// Fast-decay items lose quality twice as fast as ordinary ones.
pub fn fast_decay(item: &mut Item) {
    let delta = if item.sell_in > 0 { -2 } else { -4 };
    shift_and_age(item, delta);
}

/// Legendary items are exempt from time: both fields stay as they are.
pub fn legendary(_item: &mut Item) {}

/// Time-limited items appreciate as the deadline nears, in three bands
/// (+1 / +2 / +3 for more than 10, 10 or fewer, and 5 or fewer days left),
/// then drop to 0 the day after the deadline passes.
pub fn time_limited(item: &mut Item) {
    if item.sell_in <= 0 {
        item.quality = MIN_QUALITY;
        item.sell_in = item.sell_in.saturating_sub(1);
        return;
    }
    let mut delta = 1;
    if item.sell_in <= 10 {
        delta += 1;
    }
    if item.sell_in <= 5 {
        delta += 1;
    }
    shift_and_age(item, delta);
}
