use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use gildedrose_core::DomainError;
use gildedrose_inventory::{validate_item, GildedRose, Item};

use crate::fixture::Expected;

/// State of the whole inventory at the end of `day` (day 0 = start).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySnapshot {
    pub day: u32,
    pub items: Vec<Item>,
}

/// Age `items` by `days` days, recording a snapshot per day.
///
/// The returned vector has `days + 1` entries, starting with day 0.
pub fn simulate(items: Vec<Item>, days: u32) -> Vec<DaySnapshot> {
    let mut rose = GildedRose::new(items);
    let mut snapshots = Vec::new();
    snapshots.push(DaySnapshot {
        day: 0,
        items: rose.items().to_vec(),
    });

    for day in 1..=days {
        rose.update_quality();
        snapshots.push(DaySnapshot {
            day,
            items: rose.items().to_vec(),
        });
    }

    tracing::info!(days, items = rose.items().len(), "simulation finished");
    snapshots
}

/// One item whose end state differs from the expected table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub name: String,
    pub expected: Expected,
    pub actual: Expected,
}

/// Compare `items` with `expected` by name. Items without an entry are skipped.
pub fn check(items: &[Item], expected: &BTreeMap<String, Expected>) -> Vec<Mismatch> {
    items
        .iter()
        .filter_map(|item| {
            let want = *expected.get(&item.name)?;
            let actual = Expected {
                sell_in: item.sell_in,
                quality: item.quality,
            };
            (want != actual).then(|| Mismatch {
                name: item.name.clone(),
                expected: want,
                actual,
            })
        })
        .collect()
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("item #{index} in {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        index: usize,
        #[source]
        source: DomainError,
    },
}

/// Load a JSON array of items and validate each one.
pub fn load_items(path: &Path) -> Result<Vec<Item>, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_items(&raw).map_err(|err| err.at(path))
}

#[derive(Debug)]
enum ParseFailure {
    Json(serde_json::Error),
    Invalid(usize, DomainError),
}

impl ParseFailure {
    fn at(self, path: &Path) -> LoadError {
        let path = path.to_path_buf();
        match self {
            ParseFailure::Json(source) => LoadError::Parse { path, source },
            ParseFailure::Invalid(index, source) => LoadError::Invalid {
                path,
                index,
                source,
            },
        }
    }
}

fn parse_items(raw: &str) -> Result<Vec<Item>, ParseFailure> {
    let records: Vec<Item> = serde_json::from_str(raw).map_err(ParseFailure::Json)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, r)| {
            validate_item(r.name, r.sell_in, r.quality)
                .map_err(|err| ParseFailure::Invalid(index, err))
        })
        .collect()
}
