//! # stockrot - Deterministic Shop Inventory Aging Engine
//!
//! An in-memory simulation library for the nightly update of a shop's
//! stock:
//! - **Deterministic** (same inventory → same progression, every run)
//! - **Pure** update rules (integer arithmetic, no failure modes)
//! - **Closed category set** (enum dispatch, no per-update string matching)
//! - **Permissive** construction (no validation unless asked for)
//!
//! ## Core Concepts
//!
//! ### Update Pipeline
//!
//! Each item flows through a small pipeline once per simulated day:
//!
//! ```text
//! [Item] → [Category] → [update rule] → next-day (sell_in, quality)
//! ```
//!
//! 1. **Classification** maps the item name to a [`Category`], once, at
//!    construction time
//! 2. **Rules** are pure functions, one per category, that shift quality
//!    and spend a day of `sell_in`
//! 3. **[`Shop`]** applies the matching rule to every held item for one
//!    "advance one day" call
//!
//! ### Categories
//!
//! - `Ordinary` - quality drops 1 per day, 2 once expired
//! - `Aging` - quality rises instead (aged cheese)
//! - `Legendary` - fixed quality 80, exempt from time
//! - `TimeLimited` - rises in bands as the deadline nears, then collapses
//! - `FastDecay` - drops at twice the ordinary rate (conjured goods)
//!
//! ## Example
//!
//! ```rust
//! use stockrot::{Item, Shop};
//!
//! let mut shop = Shop::new(vec![
//!     Item::new("Aged Brie", 2, 0),
//!     Item::new("Elixir of the Mongoose", 5, 7),
//!     Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
//! ]);
//!
//! shop.advance_day();
//!
//! assert_eq!(shop.items()[0].quality, 1);  // aging: +1
//! assert_eq!(shop.items()[1].quality, 6);  // ordinary: -1
//! assert_eq!(shop.items()[2].quality, 80); // legendary: frozen
//! ```
//!
//! ## Modules
//!
//! - [`item`] - The `Item` record
//! - [`category`] - Name classification
//! - [`rules`] - Per-category day-advance rules
//! - [`shop`] - Inventory plumbing
//! - [`error`] - Errors for the opt-in validating constructor

pub mod category;
pub mod error;
pub mod item;
pub mod rules;
pub mod shop;

// Re-export main types for convenience
pub use category::Category;
pub use error::ItemError;
pub use item::Item;
pub use shop::Shop;

// Re-export the engine entry point and quality bounds
pub use rules::{advance_one_day, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
