use super::{fg, DIM, GOOD, LABEL, TITLE, VALUE};
use crate::layout::{allocate, ranking_width};
use crate::metrics::hot_files::WINDOW_DAYS;
use crate::model::{ContributorStats, HotFile, LanguageStat, Release};

/// Width of the stacked language bar.
pub const LANGUAGE_BAR_WIDTH: usize = 50;
/// Languages listed under the bar.
const LEGEND_LANGUAGES: usize = 5;
const BLOCK: &str = "█";

fn title(text: &str) -> String {
    fg(TITLE).bold().apply_to(text).to_string()
}

/// Stacked bar of language shares with a legend of the largest ones.
pub fn languages(languages: &[LanguageStat]) -> String {
    if languages.is_empty() {
        return String::new();
    }

    let weights: Vec<f64> = languages.iter().map(|l| l.percentage).collect();
    let bar: String = languages
        .iter()
        .zip(allocate(&weights, LANGUAGE_BAR_WIDTH))
        .filter(|(_, width)| *width > 0)
        .map(|(lang, width)| fg(lang.color).apply_to(BLOCK.repeat(width)).to_string())
        .collect();

    let legend = languages
        .iter()
        .take(LEGEND_LANGUAGES)
        .map(|lang| {
            let share = fg(DIM).apply_to(format!("{:.1}%", lang.percentage));
            format!("{} {} {}", fg(lang.color).apply_to("●"), lang.name, share)
        })
        .collect::<Vec<_>>()
        .join("  ");

    format!("{bar}\n{legend}")
}

pub fn contributors(stats: &ContributorStats) -> String {
    let Some(max) = stats.top.first().map(|c| c.commits) else {
        return String::new();
    };

    let mut header = title("Top Authors");
    if stats.total > stats.top.len() {
        let total = fg(DIM).apply_to(format!(" ({} total)", stats.total));
        header.push_str(&total.to_string());
    }

    let shown: u32 = stats.top.iter().map(|c| c.commits).sum();
    let mut lines = vec![header];
    for author in &stats.top {
        let share = if shown == 0 {
            0.0
        } else {
            author.commits as f64 / shown as f64 * 100.0
        };
        lines.push(format!(
            "  {} {} {} {}",
            fg(DIM).apply_to(format!("{share:5.1}%")),
            fg(LABEL).apply_to(BLOCK.repeat(ranking_width(author.commits, max))),
            fg(VALUE).apply_to(&author.name),
            fg(DIM).apply_to(format!("({})", author.commits)),
        ));
    }
    lines.join("\n")
}

pub fn hot_files(files: &[HotFile]) -> String {
    let Some(max) = files.first().map(|f| f.changes) else {
        return String::new();
    };

    let header = format!(
        "{}{}",
        title("Hot Files"),
        fg(DIM).apply_to(format!(" ({WINDOW_DAYS} days)"))
    );
    let mut lines = vec![header];
    for file in files {
        lines.push(format!(
            "  {} {} {}",
            fg(DIM).apply_to(format!("{:3}", file.changes)),
            fg(TITLE).apply_to(BLOCK.repeat(ranking_width(file.changes, max))),
            fg(VALUE).apply_to(&file.path),
        ));
    }
    lines.join("\n")
}

pub fn releases(releases: &[Release]) -> String {
    if releases.is_empty() {
        return String::new();
    }

    let mut lines = vec![title("Releases")];
    for release in releases {
        lines.push(format!(
            "  {} {}",
            fg(GOOD).bold().apply_to(&release.tag),
            fg(DIM).apply_to(&release.age)
        ));
    }
    lines.join("\n")
}
