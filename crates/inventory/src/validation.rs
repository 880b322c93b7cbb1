//! Construction-time checks for new items.
//!
//! Kept apart from the update path: the daily cycle never validates, it only
//! clamps.

use gildedrose_core::{DomainError, DomainResult};

use crate::item::Item;
use crate::limiter::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};

/// Build an [`Item`] after checking its starting quality.
///
/// Rules:
/// - name must not be blank
/// - quality >= 0
/// - quality <= 80 for legendary items, <= 50 for everything else
pub fn validate_item(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Item> {
    let item = Item::new(name, sell_in, quality);
    if let Err(err) = check(&item) {
        tracing::warn!(item = %item.name, sell_in, quality, error = %err, "rejected item");
        return Err(err);
    }
    Ok(item)
}

fn check(item: &Item) -> DomainResult<()> {
    if item.name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    if item.quality < MIN_QUALITY {
        return Err(DomainError::validation(format!(
            "{}: quality {} is negative",
            item.name, item.quality
        )));
    }

    let category = item.category();
    let ceiling = if category.is_legendary() {
        LEGENDARY_QUALITY
    } else {
        MAX_QUALITY
    };
    if item.quality > ceiling {
        return Err(DomainError::validation(format!(
            "{}: quality {} exceeds {} for {} items",
            item.name, item.quality, ceiling, category
        )));
    }
    Ok(())
}
