use serde::{Deserialize, Serialize};

/// Closed set of item categories; each one has its own daily update rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Normal,
    /// "Aged Brie": gains quality with age.
    Appreciating,
    /// "Backstage passes": gains quality towards the event, worthless after it.
    EventTicket,
    /// "Sulfuras": never sold, quality pinned.
    FixedLegendary,
    /// "Conjured": degrades twice as fast as normal stock.
    FastDecay,
}

/// Canonical name prefixes, matched case-insensitively. First match wins.
const PREFIXES: &[(&str, Category)] = &[
    ("aged brie", Category::Appreciating),
    ("backstage passes", Category::EventTicket),
    ("sulfuras", Category::FixedLegendary),
    ("conjured", Category::FastDecay),
];

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Normal,
        Category::Appreciating,
        Category::EventTicket,
        Category::FixedLegendary,
        Category::FastDecay,
    ];

    /// Resolve the category for an item name. Unknown names are `Normal`.
    pub fn classify(name: &str) -> Self {
        PREFIXES
            .iter()
            .find(|(prefix, _)| starts_with_ignore_case(name, prefix))
            .map(|(_, category)| *category)
            .unwrap_or(Category::Normal)
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, Category::FixedLegendary)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::Appreciating => "appreciating",
            Category::EventTicket => "event_ticket",
            Category::FixedLegendary => "fixed_legendary",
            Category::FastDecay => "fast_decay",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    name.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
