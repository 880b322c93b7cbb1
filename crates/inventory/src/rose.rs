//! Daily update cycle over a collection of items.

use crate::item::Item;
use crate::limiter::apply_limits;
use crate::policy::policy_for;

/// Advance every item by one simulated day, in order.
///
/// For each item: resolve its category from the name, run that category's
/// policy, then clamp quality. There is no day counter; call it `n` times to
/// simulate `n` days.
pub fn advance_one_day(items: &mut [Item]) {
    for item in items.iter_mut() {
        let category = item.category();
        let (sell_in_before, quality_before) = (item.sell_in, item.quality);

        policy_for(category)(item);
        apply_limits(category, item);

        tracing::debug!(
            item = %item.name,
            %category,
            sell_in_before,
            quality_before,
            sell_in = item.sell_in,
            quality = item.quality,
            "item aged one day"
        );
    }
}

/// Owned inventory that ages one day per [`GildedRose::update_quality`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn update_quality(&mut self) {
        advance_one_day(&mut self.items);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}
