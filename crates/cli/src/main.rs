use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

use gildedrose_cli::{
    MenuChoice, check, expected_for_day, load_items, menu, render_json, render_text, simulate,
    starting_inventory,
};
use gildedrose_observability::{LogConfig, LogFormat};

/// Upper bound for `--days`; every simulated day keeps a full snapshot.
const MAX_DAYS: i64 = 100_000;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

/// Gilded Rose inventory simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of days to simulate (omit for the interactive menu)
    #[arg(
        short,
        long,
        env = "GILDEDROSE_DAYS",
        value_parser = clap::value_parser!(u32).range(0..=MAX_DAYS)
    )]
    days: Option<u32>,

    /// JSON file with the starting inventory (default: built-in inventory)
    #[arg(short, long, env = "GILDEDROSE_ITEMS")]
    items: Option<PathBuf>,

    /// Report format
    #[arg(short, long, env = "GILDEDROSE_FORMAT", value_enum, default_value = "text")]
    format: ReportFormat,

    /// Emit log lines as JSON
    #[arg(long, env = "GILDEDROSE_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Fail if the end state differs from the built-in expected table
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_format = if args.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    gildedrose_observability::init_with(
        LogConfig::default()
            .with_format(log_format)
            .with_default_filter("warn"),
    );

    let days = match args.days {
        Some(days) => days,
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let choice = menu::prompt(&mut stdin.lock(), &mut stdout.lock())
                .context("failed to read menu choice")?;
            match choice {
                MenuChoice::Days(days) => days,
                MenuChoice::Invalid => {
                    println!("Invalid choice!");
                    return Ok(());
                }
            }
        }
    };

    let builtin = args.items.is_none();
    let items = match &args.items {
        Some(path) => load_items(path)?,
        None => starting_inventory(),
    };
    tracing::info!(days, items = items.len(), builtin, "starting simulation");

    // Expected tables only describe the built-in inventory.
    let expected = if builtin { expected_for_day(days) } else { None };
    if args.check && expected.is_none() {
        bail!("--check needs the built-in inventory and a checkpoint day (1, 5, 10, 15 or 20)");
    }

    let snapshots = simulate(items, days);

    match args.format {
        ReportFormat::Text => print!("{}", render_text(&snapshots, expected.as_ref())),
        ReportFormat::Json => println!(
            "{}",
            render_json(&snapshots, expected.as_ref()).context("failed to encode report")?
        ),
    }

    if args.check {
        if let (Some(table), Some(last)) = (&expected, snapshots.last()) {
            let mismatches = check(&last.items, table);
            for m in &mismatches {
                tracing::error!(
                    item = %m.name,
                    expected_sell_in = m.expected.sell_in,
                    expected_quality = m.expected.quality,
                    sell_in = m.actual.sell_in,
                    quality = m.actual.quality,
                    "unexpected end state"
                );
            }
            if !mismatches.is_empty() {
                bail!("{} item(s) differ from the expected table", mismatches.len());
            }
        }
    }

    Ok(())
}
