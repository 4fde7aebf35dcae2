use super::{fg, DIM, LABEL};
use crate::layout::heatmap::{weekday_label, Heatmap, LEFT_MARGIN, LEVELS};

/// Block colors for levels 0..=4, from empty to busiest.
const LEVEL_COLORS: [&str; LEVELS as usize] = [
    "#2D333B", "#0E4429", "#006D32", "#26A641", "#39D353",
];
const BLOCK: &str = "█";

fn block(level: u8) -> String {
    fg(LEVEL_COLORS[level as usize]).apply_to(BLOCK).to_string()
}

pub fn render(map: &Heatmap) -> String {
    let dim = fg(DIM);
    let mut rows = vec![
        fg(LABEL).bold().apply_to("Commit Activity (past year)").to_string(),
        dim.apply_to(map.month_row()).to_string(),
    ];

    for day in 0..7 {
        let mut row = match weekday_label(day) {
            Some(name) => dim.apply_to(format!(" {name} ")).to_string(),
            None => " ".repeat(LEFT_MARGIN),
        };
        for week in &map.weeks {
            match map.level(&week[day]) {
                Some(level) => {
                    row.push_str(&block(level));
                    row.push(' ');
                }
                None => row.push_str("  "),
            }
        }
        rows.push(row);
    }

    let mut legend = " ".repeat(LEFT_MARGIN);
    legend.push_str(&dim.apply_to("Less ").to_string());
    for level in 0..LEVELS {
        legend.push_str(&block(level));
        legend.push(' ');
    }
    legend.push_str(&dim.apply_to("More").to_string());

    rows.push(String::new());
    rows.push(legend);
    rows.join("\n")
}
