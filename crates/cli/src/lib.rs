//! Simulation harness: loads an inventory, ages it day by day and reports
//! the result, optionally against a table of expected end states.

pub mod fixture;
pub mod menu;
pub mod report;
pub mod simulation;

pub use fixture::{expected_for_day, starting_inventory, Expected, CHECKPOINT_DAYS};
pub use menu::MenuChoice;
pub use report::{render_json, render_text};
pub use simulation::{check, load_items, simulate, DaySnapshot, LoadError, Mismatch};
