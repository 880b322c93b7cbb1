//! Built-in starting inventory and its expected state at checkpoint days.

use std::collections::BTreeMap;

use serde::Serialize;

use gildedrose_inventory::Item;

/// Days for which an expected table exists.
pub const CHECKPOINT_DAYS: [u32; 5] = [1, 5, 10, 15, 20];

/// Expected `(sell_in, quality)` for one item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Expected {
    pub sell_in: i32,
    pub quality: i32,
}

pub fn starting_inventory() -> Vec<Item> {
    vec![
        Item::new("Normal", 10, 20),
        Item::new("Aged Brie", 5, 0),
        Item::new("Sulfuras", 0, 80),
        Item::new("Backstage passes", 15, 15),
        Item::new("Conjured", 10, 40),
    ]
}

/// Expected end state of [`starting_inventory`] after `day` days, keyed by
/// item name. `None` for days without a table.
pub fn expected_for_day(day: u32) -> Option<BTreeMap<String, Expected>> {
    // (Normal, Aged Brie, Sulfuras, Backstage passes, Conjured)
    let rows: [(i32, i32); 5] = match day {
        1 => [(9, 19), (4, 1), (0, 80), (14, 16), (9, 38)],
        5 => [(5, 15), (0, 5), (0, 80), (10, 21), (5, 30)],
        10 => [(0, 10), (-5, 15), (0, 80), (5, 32), (0, 20)],
        15 => [(-5, 0), (-10, 25), (0, 80), (0, 47), (-5, 0)],
        20 => [(-10, 0), (-15, 35), (0, 80), (-5, 0), (-10, 0)],
        _ => return None,
    };

    Some(
        starting_inventory()
            .into_iter()
            .zip(rows)
            .map(|(item, (sell_in, quality))| (item.name, Expected { sell_in, quality }))
            .collect(),
    )
}
