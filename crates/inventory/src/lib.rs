//! Inventory domain module: item ageing rules.
//!
//! This crate contains the per-category daily update rules, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod item;
pub mod limiter;
pub mod policy;
pub mod rose;
pub mod validation;

pub use category::Category;
pub use item::Item;
pub use limiter::{apply_limits, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use policy::{policy_for, Policy};
pub use rose::{advance_one_day, GildedRose};
pub use validation::validate_item;
