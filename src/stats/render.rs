use crate::calendar::{Today, DAYS_IN_LAST_SIX_MONTHS, WEEKS_IN_LAST_SIX_MONTHS};
use crate::config::ColorChoice;
use crate::model::Columns;
use chrono::{Datelike, TimeDelta};
use console::Style;
use std::io::{self, Write};

/// Rows in the grid, one per weekday.
pub const DAYS_IN_WEEK: u32 = 7;
/// Columns in the grid: the window plus one padding week on each side.
pub const GRID_WEEKS: u32 = WEEKS_IN_LAST_SIX_MONTHS + 2;

const CELL_WIDTH: usize = 4;
const LABEL_WIDTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Empty,
    Low,
    Mid,
    High,
    Today,
}

impl Tier {
    pub fn for_count(count: u32) -> Self {
        match count {
            0 => Tier::Empty,
            1..=4 => Tier::Low,
            5..=9 => Tier::Mid,
            10.. => Tier::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub count: u32,
    pub tier: Tier,
}

impl Cell {
    fn text(&self) -> String {
        if self.count == 0 {
            "  - ".to_string()
        } else {
            format!("{:>3} ", self.count)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub day: u32,
    pub label: Option<&'static str>,
    pub cells: Vec<Cell>,
}

/// The laid out grid: seven rows, each [`GRID_WEEKS`] cells from the most
/// distant week to the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: Vec<Row>,
}

impl Grid {
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }
}

fn day_label(day: u32) -> Option<&'static str> {
    match day {
        1 => Some("Mon"),
        3 => Some("Wed"),
        5 => Some("Fri"),
        _ => None,
    }
}

/// Place every week × day position. The "today" cell is found by position
/// (week 0, day `offset - 1`) and is highlighted whatever its count.
pub fn layout(columns: &Columns, today: &Today) -> Grid {
    let today_day = today.offset() - 1;

    let rows = (0..DAYS_IN_WEEK)
        .rev()
        .map(|day| {
            let cells = (0..GRID_WEEKS)
                .rev()
                .map(|week| {
                    let count = columns.count(week, day);
                    let tier = if week == 0 && day == today_day {
                        Tier::Today
                    } else {
                        Tier::for_count(count)
                    };
                    Cell { count, tier }
                })
                .collect();
            Row {
                day,
                label: day_label(day),
                cells,
            }
        })
        .collect();

    Grid { rows }
}

/// Month labels over the grid, one slot per week starting 183 days ago.
pub fn month_header(today: &Today) -> String {
    let mut header = " ".repeat(LABEL_WIDTH + CELL_WIDTH);
    let mut week = today.start_of_day() - TimeDelta::days(i64::from(DAYS_IN_LAST_SIX_MONTHS));
    let mut month = week.month();

    while week <= today.instant() {
        if week.month() != month {
            header.push_str(&format!("{} ", week.format("%b")));
            month = week.month();
        } else {
            header.push_str(&" ".repeat(CELL_WIDTH));
        }
        week += TimeDelta::days(7);
    }

    header.trim_end().to_string()
}

/// Terminal styles per intensity tier.
#[derive(Debug, Clone)]
pub struct Palette {
    choice: ColorChoice,
}

impl Palette {
    pub fn new(choice: ColorChoice) -> Self {
        Self { choice }
    }

    pub fn style(&self, tier: Tier) -> Style {
        let style = match tier {
            Tier::Empty => Style::new().dim(),
            Tier::Low => Style::new().black().on_white(),
            Tier::Mid => Style::new().black().on_yellow(),
            Tier::High => Style::new().black().on_green(),
            Tier::Today => Style::new().white().on_magenta().bold(),
        };
        match self.choice {
            ColorChoice::Auto => style,
            ColorChoice::Always => style.force_styling(true),
            ColorChoice::Never => style.force_styling(false),
        }
    }
}

pub fn write_grid<W: Write>(out: &mut W, header: &str, grid: &Grid, palette: &Palette) -> io::Result<()> {
    writeln!(out, "{header}")?;
    for row in &grid.rows {
        write!(out, " {:<3} ", row.label.unwrap_or(""))?;
        for cell in &row.cells {
            write!(out, "{}", palette.style(cell.tier).apply_to(cell.text()))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Header plus the seven grid rows.
pub fn render<W: Write>(out: &mut W, columns: &Columns, today: &Today, palette: &Palette) -> io::Result<()> {
    let grid = layout(columns, today);
    write_grid(out, &month_header(today), &grid, palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_count_ranges() {
        assert_eq!(Tier::for_count(0), Tier::Empty);
        assert_eq!(Tier::for_count(1), Tier::Low);
        assert_eq!(Tier::for_count(4), Tier::Low);
        assert_eq!(Tier::for_count(5), Tier::Mid);
        assert_eq!(Tier::for_count(9), Tier::Mid);
        assert_eq!(Tier::for_count(10), Tier::High);
        assert_eq!(Tier::for_count(250), Tier::High);
    }

    #[test]
    fn cell_text_keeps_a_constant_width() {
        for count in [0, 3, 42, 999] {
            let cell = Cell {
                count,
                tier: Tier::for_count(count),
            };
            assert_eq!(cell.text().len(), CELL_WIDTH, "count {count}");
        }
    }
}
