use serde::{Deserialize, Serialize};

use gildedrose_core::DomainResult;

use crate::category::Category;

/// A single stock record.
///
/// `sell_in` counts days left until the sale deadline and keeps going
/// negative afterwards. `quality` is only guaranteed to be in range after an
/// update cycle; callers may construct anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Construct an item, rejecting out-of-range quality for its category.
    ///
    /// See [`crate::validate_item`].
    pub fn validated(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        crate::validation::validate_item(name, sell_in, quality)
    }

    /// Category inferred from the name.
    pub fn category(&self) -> Category {
        Category::classify(&self.name)
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_comma_separated_record() {
        let item = Item::new("Aged Brie", -3, 12);
        assert_eq!(item.to_string(), "Aged Brie, -3, 12");
    }

    #[test]
    fn category_follows_name() {
        assert_eq!(
            Item::new("Sulfuras, Hand of Ragnaros", 0, 80).category(),
            Category::FixedLegendary
        );
        assert_eq!(Item::new("+5 Dexterity Vest", 10, 20).category(), Category::Normal);
    }

    #[test]
    fn deserializes_from_plain_json_record() {
        let item: Item =
            serde_json::from_str(r#"{"name":"Conjured Mana Cake","sell_in":3,"quality":6}"#)
                .unwrap();
        assert_eq!(item, Item::new("Conjured Mana Cake", 3, 6));
        assert_eq!(item.category(), Category::FastDecay);
    }
}
