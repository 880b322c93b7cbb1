//! Per-category one-day update rules.
//!
//! Each rule mutates `sell_in` and `quality` in place. None of them bound
//! quality; that happens afterwards in [`crate::limiter`].

use crate::category::Category;
use crate::item::Item;

/// One simulated day for a single item.
pub type Policy = fn(&mut Item);

/// Rule table keyed by category.
pub fn policy_for(category: Category) -> Policy {
    match category {
        Category::Normal => normal,
        Category::Appreciating => appreciating,
        Category::EventTicket => event_ticket,
        Category::FixedLegendary => fixed_legendary,
        Category::FastDecay => fast_decay,
    }
}

/// Decrement sell-in and report whether the deadline has now passed.
fn tick(item: &mut Item) -> bool {
    item.sell_in = item.sell_in.saturating_sub(1);
    item.sell_in < 0
}

fn adjust(item: &mut Item, delta: i32) {
    item.quality = item.quality.saturating_add(delta);
}

/// -1 per day, -2 once past the deadline.
pub fn normal(item: &mut Item) {
    let expired = tick(item);
    adjust(item, if expired { -2 } else { -1 });
}

/// +1 per day, +2 once past the deadline.
pub fn appreciating(item: &mut Item) {
    let expired = tick(item);
    adjust(item, if expired { 2 } else { 1 });
}

/// Thresholds apply to the sell-in after the decrement.
pub fn event_ticket(item: &mut Item) {
    if tick(item) {
        item.quality = 0;
        return;
    }
    let delta = match item.sell_in {
        ..=5 => 3,
        6..=10 => 2,
        _ => 1,
    };
    adjust(item, delta);
}

/// Legendary stock never changes; the limiter pins its quality.
pub fn fixed_legendary(_item: &mut Item) {}

/// -2 per day, -4 once past the deadline.
pub fn fast_decay(item: &mut Item) {
    let expired = tick(item);
    adjust(item, if expired { -4 } else { -2 });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(category: Category, sell_in: i32, quality: i32) -> (i32, i32) {
        let mut item = Item::new("probe", sell_in, quality);
        policy_for(category)(&mut item);
        (item.sell_in, item.quality)
    }

    #[test]
    fn normal_degrades_by_one_before_deadline() {
        assert_eq!(run(Category::Normal, 5, 10), (4, 9));
        assert_eq!(run(Category::Normal, 1, 10), (0, 9));
    }

    #[test]
    fn normal_degrades_twice_as_fast_after_deadline() {
        assert_eq!(run(Category::Normal, 0, 10), (-1, 8));
        assert_eq!(run(Category::Normal, -7, 10), (-8, 8));
    }

    #[test]
    fn normal_does_not_floor_quality_itself() {
        assert_eq!(run(Category::Normal, 0, 1), (-1, -1));
    }

    #[test]
    fn appreciating_mirrors_normal_upwards() {
        assert_eq!(run(Category::Appreciating, 2, 0), (1, 1));
        assert_eq!(run(Category::Appreciating, 0, 0), (-1, 2));
        assert_eq!(run(Category::Appreciating, 3, 50), (2, 51));
    }

    #[test]
    fn event_ticket_steps_up_as_event_approaches() {
        assert_eq!(run(Category::EventTicket, 15, 20), (14, 21));
        assert_eq!(run(Category::EventTicket, 11, 20), (10, 22));
        assert_eq!(run(Category::EventTicket, 10, 20), (9, 22));
        assert_eq!(run(Category::EventTicket, 6, 20), (5, 23));
        assert_eq!(run(Category::EventTicket, 1, 20), (0, 23));
    }

    #[test]
    fn event_ticket_is_worthless_after_event() {
        assert_eq!(run(Category::EventTicket, 0, 20), (-1, 0));
        assert_eq!(run(Category::EventTicket, -4, 49), (-5, 0));
    }

    #[test]
    fn fixed_legendary_is_untouched() {
        assert_eq!(run(Category::FixedLegendary, 0, 80), (0, 80));
        assert_eq!(run(Category::FixedLegendary, -3, 12), (-3, 12));
    }

    #[test]
    fn fast_decay_doubles_normal_rates() {
        assert_eq!(run(Category::FastDecay, 3, 6), (2, 4));
        assert_eq!(run(Category::FastDecay, 0, 6), (-1, 2));
    }

    #[test]
    fn extreme_values_saturate_instead_of_overflowing() {
        assert_eq!(run(Category::Normal, i32::MIN, i32::MIN), (i32::MIN, i32::MIN));
        assert_eq!(run(Category::Appreciating, 5, i32::MAX), (4, i32::MAX));
    }
}
