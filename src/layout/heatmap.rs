//! GitHub-style commit calendar: a week-aligned grid over the trailing year.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

/// Days covered by the calendar, ending today inclusive.
pub const WINDOW_DAYS: i64 = 365;
/// Character columns reserved on the left for weekday labels.
pub const LEFT_MARGIN: usize = 5;
/// Character columns per week: one block and a space.
pub const COLUMN_WIDTH: usize = 2;
/// Minimum distance between the starts of two month labels.
pub const MIN_LABEL_GAP: usize = 4;
pub const LEVELS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub count: u32,
    /// False for padding days outside the reporting window.
    pub valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLabel {
    pub name: String,
    /// Week column the month starts in.
    pub column: usize,
    /// Character offset of the label in the month row.
    pub offset: usize,
}

#[derive(Debug, Clone)]
pub struct Heatmap {
    /// Week columns, each holding Sunday..Saturday.
    pub weeks: Vec<[HeatmapCell; 7]>,
    pub max_commits: u32,
    pub labels: Vec<MonthLabel>,
}

/// Quantize a daily count into 0..=4 relative to the busiest day.
pub fn commit_level(count: u32, max: u32) -> u8 {
    if count == 0 || max == 0 {
        return 0;
    }
    let ratio = count as f64 / max as f64;
    if ratio <= 0.25 {
        1
    } else if ratio <= 0.50 {
        2
    } else if ratio <= 0.75 {
        3
    } else {
        4
    }
}

/// Label for grid row `row` (0 = Sunday); only Mon, Wed and Fri are labelled.
pub fn weekday_label(row: usize) -> Option<&'static str> {
    match row {
        1 => Some("Mon"),
        3 => Some("Wed"),
        5 => Some("Fri"),
        _ => None,
    }
}

/// Build the calendar from `YYYY-MM-DD` commit dates, one entry per commit.
///
/// Dates that do not parse are ignored.
pub fn build<S: AsRef<str>>(dates: &[S], today: NaiveDate) -> Heatmap {
    let mut counts: HashMap<NaiveDate, u32> = HashMap::new();
    for raw in dates {
        if let Ok(date) = NaiveDate::parse_from_str(raw.as_ref().trim(), "%Y-%m-%d") {
            *counts.entry(date).or_insert(0) += 1;
        }
    }

    let window_start = today - Duration::days(WINDOW_DAYS - 1);
    let in_window = |d: NaiveDate| d >= window_start && d <= today;

    let max_commits = counts
        .iter()
        .filter(|(date, _)| in_window(**date))
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(0);

    let offset = window_start.weekday().num_days_from_sunday() as i64;
    let mut week_start = window_start - Duration::days(offset);

    let mut weeks = Vec::new();
    while week_start <= today {
        let week: [HeatmapCell; 7] = std::array::from_fn(|i| {
            let date = week_start + Duration::days(i as i64);
            let valid = in_window(date);
            let count = counts.get(&date).copied().unwrap_or(0);
            HeatmapCell {
                date,
                count: if valid { count } else { 0 },
                valid,
            }
        });
        weeks.push(week);
        week_start += Duration::days(7);
    }

    let labels = place_month_labels(&weeks);
    Heatmap {
        weeks,
        max_commits,
        labels,
    }
}

fn place_month_labels(weeks: &[[HeatmapCell; 7]]) -> Vec<MonthLabel> {
    let total_width = LEFT_MARGIN + weeks.len() * COLUMN_WIDTH;
    let mut labels: Vec<MonthLabel> = Vec::new();
    let mut last_month = None;

    for (column, week) in weeks.iter().enumerate() {
        let Some(cell) = week
            .iter()
            .find(|c| c.valid && Some(c.date.month()) != last_month)
        else {
            continue;
        };
        last_month = Some(cell.date.month());

        let name = cell.date.format("%b").to_string();
        let offset = LEFT_MARGIN + column * COLUMN_WIDTH;
        let crowded = labels
            .last()
            .is_some_and(|prev| offset - prev.offset < MIN_LABEL_GAP);
        if crowded || offset + name.len() > total_width {
            continue;
        }
        labels.push(MonthLabel {
            name,
            column,
            offset,
        });
    }
    labels
}

impl Heatmap {
    /// Width in characters of a full grid row, margin included.
    pub fn width(&self) -> usize {
        LEFT_MARGIN + self.weeks.len() * COLUMN_WIDTH
    }

    /// Intensity of a cell, or `None` for padding.
    pub fn level(&self, cell: &HeatmapCell) -> Option<u8> {
        cell.valid.then(|| commit_level(cell.count, self.max_commits))
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&HeatmapCell> {
        self.weeks.iter().flatten().find(|c| c.date == date)
    }

    /// Number of days drawn with a non-zero block.
    pub fn block_count(&self) -> usize {
        self.weeks
            .iter()
            .flatten()
            .filter(|c| c.valid && c.count > 0)
            .count()
    }

    /// The month label row as plain text.
    pub fn month_row(&self) -> String {
        let mut row = vec![' '; self.width()];
        for label in &self.labels {
            for (i, ch) in label.name.chars().enumerate() {
                row[label.offset + i] = ch;
            }
        }
        row.into_iter().collect()
    }
}
