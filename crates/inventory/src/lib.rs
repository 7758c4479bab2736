//! `shelflife-inventory` — shop stock aging rules.
//!
//! This crate contains the **pure domain** model of a small shop's stock:
//! item classification, validated construction, and the day-by-day quality
//! update. No IO, no storage, no clocks: callers drive the simulation by
//! invoking [`Inventory::update`] once per elapsed day.

pub mod inventory;
pub mod item;

pub use inventory::Inventory;
pub use item::{CategoryKeywords, Item, ItemCategory, ItemSpec, Quality, SellIn};
