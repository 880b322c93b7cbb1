//! Report rendering (plain text or JSON).

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::fixture::Expected;
use crate::simulation::DaySnapshot;

/// Text report.
///
/// With an expected table: per item, the expected and actual end state plus a
/// pass/fail marker. Items missing from the table, or every item when there
/// is no table, are listed per day in their record form.
pub fn render_text(snapshots: &[DaySnapshot], expected: Option<&BTreeMap<String, Expected>>) -> String {
    let mut out = String::new();
    let Some(last) = snapshots.last() else {
        return out;
    };

    match expected {
        Some(table) => {
            let _ = writeln!(out, "Simulation after {} day(s)", last.day);
            for item in &last.items {
                let _ = writeln!(out, "{}", item.name);
                match table.get(&item.name) {
                    Some(want) => {
                        let passed = want.sell_in == item.sell_in && want.quality == item.quality;
                        let _ = writeln!(
                            out,
                            "   Expected: sell_in={}, quality={}",
                            want.sell_in, want.quality
                        );
                        let _ = writeln!(
                            out,
                            "   Actual:   sell_in={}, quality={}",
                            item.sell_in, item.quality
                        );
                        let _ = writeln!(out, "   {}", if passed { "PASS" } else { "FAIL" });
                    }
                    None => {
                        let _ = writeln!(out, "   {item}");
                    }
                }
            }
        }
        None => {
            for snapshot in snapshots {
                let _ = writeln!(out, "-------- day {} --------", snapshot.day);
                let _ = writeln!(out, "name, sellIn, quality");
                for item in &snapshot.items {
                    let _ = writeln!(out, "{item}");
                }
                out.push('\n');
            }
        }
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    days: u32,
    snapshots: &'a [DaySnapshot],
    #[serde(skip_serializing_if = "Option::is_none")]
    expected: Option<&'a BTreeMap<String, Expected>>,
}

/// JSON report: every snapshot plus the expected table when one applies.
pub fn render_json(
    snapshots: &[DaySnapshot],
    expected: Option<&BTreeMap<String, Expected>>,
) -> serde_json::Result<String> {
    let report = JsonReport {
        days: snapshots.last().map(|s| s.day).unwrap_or(0),
        snapshots,
        expected,
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::simulate;
    use gildedrose_inventory::Item;

    #[test]
    fn text_without_table_lists_every_day() {
        let snapshots = simulate(vec![Item::new("Normal", 1, 3)], 2);
        let text = render_text(&snapshots, None);
        assert!(text.contains("-------- day 0 --------\nname, sellIn, quality\nNormal, 1, 3\n"));
        assert!(text.contains("-------- day 2 --------\nname, sellIn, quality\nNormal, -1, 0\n"));
    }

    #[test]
    fn text_with_table_marks_pass_and_fail() {
        let snapshots = simulate(vec![Item::new("A", 1, 3), Item::new("B", 1, 3)], 1);
        let mut table = BTreeMap::new();
        table.insert("A".to_string(), Expected { sell_in: 0, quality: 2 });
        table.insert("B".to_string(), Expected { sell_in: 0, quality: 9 });

        let text = render_text(&snapshots, Some(&table));
        assert!(text.starts_with("Simulation after 1 day(s)\n"));
        assert!(text.contains("A\n   Expected: sell_in=0, quality=2\n   Actual:   sell_in=0, quality=2\n   PASS\n"));
        assert!(text.contains("B\n   Expected: sell_in=0, quality=9\n   Actual:   sell_in=0, quality=2\n   FAIL\n"));
    }

    #[test]
    fn empty_snapshot_list_renders_nothing() {
        assert_eq!(render_text(&[], None), "");
    }

    #[test]
    fn json_report_contains_final_state() {
        let snapshots = simulate(vec![Item::new("Aged Brie", 1, 0)], 2);
        let json = render_json(&snapshots, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["days"], 2);
        assert_eq!(value["snapshots"][2]["items"][0]["sell_in"], -1);
        assert_eq!(value["snapshots"][2]["items"][0]["quality"], 3);
        assert!(value.get("expected").is_none());
    }
}
