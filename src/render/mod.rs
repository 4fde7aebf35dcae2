//! Terminal presentation of a [`Report`].
//!
//! Widths, grid coordinates and levels come from [`crate::layout`]; this module
//! only paints them. Colors go through `console`, so `NO_COLOR` and non-tty
//! output are handled there.

pub mod bars;
pub mod heatmap;
pub mod info;
pub mod logo;

use crate::model::Report;
use chrono::NaiveDate;
use console::{measure_text_width, pad_str, Alignment, Style};

pub(crate) const LABEL: &str = "#6CB6FF";
pub(crate) const VALUE: &str = "#E6EDF3";
pub(crate) const DIM: &str = "#8B949E";
pub(crate) const TITLE: &str = "#F0883E";
pub(crate) const GOOD: &str = "#3FB950";
pub(crate) const BAD: &str = "#F85149";

/// Space between the logo and the info panel.
const GAP: &str = "   ";

/// Nearest entry of the xterm 6x6x6 color cube for a `#RRGGBB` string.
pub fn hex_to_ansi256(hex: &str) -> Option<u8> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| -> Option<u8> {
        let value = u8::from_str_radix(hex.get(i..i + 2)?, 16).ok()?;
        Some(((value as f64 / 255.0) * 5.0).round() as u8)
    };
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    Some(16 + 36 * r + 6 * g + b)
}

/// Foreground style for a hex color; unparseable colors leave text unstyled.
pub(crate) fn fg(hex: &str) -> Style {
    match hex_to_ansi256(hex) {
        Some(code) => Style::new().color256(code),
        None => Style::new(),
    }
}

/// Place two multi-line blocks side by side, top-aligned.
pub fn join_horizontal(left: &str, gap: &str, right: &str) -> String {
    let left: Vec<&str> = left.lines().collect();
    let right: Vec<&str> = right.lines().collect();
    let width = left
        .iter()
        .map(|l| measure_text_width(l))
        .max()
        .unwrap_or(0);

    (0..left.len().max(right.len()))
        .map(|i| {
            let l = left.get(i).copied().unwrap_or("");
            let r = right.get(i).copied().unwrap_or("");
            if r.is_empty() {
                l.to_string()
            } else {
                format!("{}{gap}{r}", pad_str(l, width, Alignment::Left, None))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The full one-screen summary.
pub fn render(report: &Report, today: NaiveDate) -> String {
    let primary = report.code.languages.first().map(|l| l.name.as_str());
    let mut out = join_horizontal(&logo::render(primary), GAP, &info::render(report));

    let calendar = crate::layout::heatmap::build(&report.commit_dates, today);
    let sections = [
        bars::languages(&report.code.languages),
        bars::contributors(&report.contributors),
        bars::hot_files(&report.hot_files),
        bars::releases(&report.releases),
        heatmap::render(&calendar),
    ];
    for section in sections.iter().filter(|s| !s.is_empty()) {
        out.push_str("\n\n");
        out.push_str(section);
    }
    out
}
