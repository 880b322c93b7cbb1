//! Global quality bounds, applied after every policy step.

use crate::category::Category;
use crate::item::Item;

pub const MIN_QUALITY: i32 = 0;
pub const MAX_QUALITY: i32 = 50;
/// Legendary quality is pinned here regardless of input.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Clamp `item.quality` into the legal range for `category`.
///
/// Returns `true` if the quality was changed.
pub fn apply_limits(category: Category, item: &mut Item) -> bool {
    let bounded = if category.is_legendary() {
        LEGENDARY_QUALITY
    } else {
        item.quality.clamp(MIN_QUALITY, MAX_QUALITY)
    };
    let changed = bounded != item.quality;
    if changed {
        tracing::trace!(
            item = %item.name,
            %category,
            from = item.quality,
            to = bounded,
            "quality limited"
        );
    }
    item.quality = bounded;
    changed
}
