//! Interactive day-count menu.

use std::io::{BufRead, Write};

/// A parsed menu selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Days(u32),
    Invalid,
}

const OPTIONS: [(&str, u32); 4] = [("1", 1), ("2", 5), ("3", 10), ("4", 20)];

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        OPTIONS
            .iter()
            .find(|(key, _)| *key == input)
            .map(|(_, days)| MenuChoice::Days(*days))
            .unwrap_or(MenuChoice::Invalid)
    }
}

/// Print the menu to `out` and read one line from `input`.
pub fn prompt(input: &mut impl BufRead, out: &mut impl Write) -> std::io::Result<MenuChoice> {
    writeln!(out, "Choose a simulation to run:")?;
    for (key, days) in OPTIONS {
        let unit = if days == 1 { "day" } else { "days" };
        writeln!(out, "{key}. Run simulation for {days} {unit}")?;
    }
    writeln!(out, "Enter your choice:")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(MenuChoice::parse(&line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_map_to_day_counts() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::Days(1));
        assert_eq!(MenuChoice::parse(" 2\n"), MenuChoice::Days(5));
        assert_eq!(MenuChoice::parse("3"), MenuChoice::Days(10));
        assert_eq!(MenuChoice::parse("4"), MenuChoice::Days(20));
    }

    #[test]
    fn anything_else_is_invalid() {
        for input in ["", "0", "5", "one", "20"] {
            assert_eq!(MenuChoice::parse(input), MenuChoice::Invalid);
        }
    }

    #[test]
    fn prompt_prints_menu_and_reads_one_line() {
        let mut input = std::io::Cursor::new("3\nignored\n");
        let mut out = Vec::new();
        let choice = prompt(&mut input, &mut out).unwrap();
        assert_eq!(choice, MenuChoice::Days(10));

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("1. Run simulation for 1 day\n"));
        assert!(printed.contains("4. Run simulation for 20 days\n"));
    }
}
