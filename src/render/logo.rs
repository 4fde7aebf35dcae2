//! The logo shown next to the info panel: per-language art, or a branch graph.
//!
//! Art is plain text with `{N}` markers; a marker switches the color of the
//! text that follows it to entry `N` of the logo's palette.

use super::fg;
use crate::langs::{color_for, OTHER_COLOR};

const ACCENT: &str = "#F0883E";
const RAIL: &str = "#6E7681";

/// Art drawn for one or more languages, with its own palette.
pub struct Logo {
    pub languages: &'static [&'static str],
    pub art: &'static str,
    pub palette: &'static [&'static str],
}

pub const LOGOS: &[Logo] = &[
    Logo {
        languages: &["Rust"],
        palette: &["#DEA584", "#F5F5F5"],
        art: r"{0}     ▄ █ ▄
{0}   ▄█▀▀▀▀▀█▄
{0}  ▀█ {1}█▀▄ ▄▀▀{0} █▀
{0}  ▄█ {1}█▀▄ ▀▀▄{0} █▄
{0}  ▀█ {1}▀ ▀ ▀▀ {0} █▀
{0}   ▀█▄▄▄▄▄█▀
{0}     ▀ █ ▀",
    },
    Logo {
        languages: &["Go"],
        palette: &["#00ADD8", "#F5F5F5"],
        art: r"{0}  ▄▀▀▄     ▄▀▀▄
{0}  █  {1}◉{0}▀▀▀▀▀{1}◉{0}  █
{0}  █     {1}▾{0}     █
{0}  █    {1}╹ ╹{0}    █
{0}  █           █
{0}   ▀▄▄▄▄▄▄▄▄▄▀",
    },
    Logo {
        languages: &["Python"],
        palette: &["#3572A5", "#FFD43B"],
        art: r"{0}    ▄▄▄▄▄▄
{0}   █ ▀ ████
{0}  ▄▄▄▄▄████{1}▄▄
{0}  ████{1}▀▀▀▀▀▀▀█
{0}    ▀▀{1}████ ▄ █
{1}       ▀▀▀▀▀▀",
    },
    Logo {
        languages: &["JavaScript", "TypeScript"],
        palette: &["#F7DF1E", "#3178C6"],
        art: r"{0}  ┏━━━━━━━━━━┓
{0}  ┃          ┃
{0}  ┃   {1}{ }{0}    ┃
{0}  ┃      {1}; {0}  ┃
{0}  ┗━━━━━━━━━━┛",
    },
];

/// Fallback art: a branch graph whose main line takes the language color.
const BRANCH_GRAPH: &str = r"{2}      ●
{2}      │
{2}      ●{1}───────●
{2}      │        {1}│
{2}      ●        {1}●
{2}      │        {1}│
{0}  ●{2}───●{1}────────●
{2}      │
{0}  ●{2}───●
{2}      │
{2}      ●";

pub fn logo_for(language: &str) -> Option<&'static Logo> {
    LOGOS.iter().find(|logo| logo.languages.contains(&language))
}

/// Split one line of art into `(palette index, text)` runs.
///
/// Markers naming an index outside the palette keep the current color.
pub fn tokenize(line: &str, palette_len: usize) -> Vec<(usize, String)> {
    let mut runs: Vec<(usize, String)> = Vec::new();
    let mut current = 0;
    let mut text = String::new();
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        if ch == '{' {
            let mut lookahead = chars.clone();
            if let (Some(digit), Some('}')) = (lookahead.next(), lookahead.next()) {
                if let Some(index) = digit.to_digit(10) {
                    if !text.is_empty() {
                        runs.push((current, std::mem::take(&mut text)));
                    }
                    if (index as usize) < palette_len {
                        current = index as usize;
                    }
                    chars = lookahead;
                    continue;
                }
            }
        }
        text.push(ch);
    }
    if !text.is_empty() {
        runs.push((current, text));
    }
    runs
}

/// Paint marked-up art with `palette`; without a palette the markers are just removed.
pub fn paint(art: &str, palette: &[&str]) -> String {
    art.lines()
        .map(|line| {
            tokenize(line, palette.len())
                .into_iter()
                .map(|(index, text)| match palette.get(index) {
                    Some(color) => fg(color).apply_to(text).to_string(),
                    None => text,
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The primary language's own art, or the branch graph in that language's color.
pub fn render(primary_language: Option<&str>) -> String {
    if let Some(logo) = primary_language.and_then(logo_for) {
        return paint(logo.art, logo.palette);
    }
    let main = primary_language.map(color_for).unwrap_or(OTHER_COLOR);
    paint(BRANCH_GRAPH, &[ACCENT, main, RAIL])
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;
    use pretty_assertions::assert_eq;

    #[test]
    fn markers_switch_colors() {
        assert_eq!(
            tokenize("{1}ab{0}c", 2),
            vec![(1, "ab".to_string()), (0, "c".to_string())]
        );
        assert_eq!(tokenize("plain", 3), vec![(0, "plain".to_string())]);
    }

    #[test]
    fn out_of_range_markers_are_dropped() {
        assert_eq!(
            tokenize("a{7}b", 2),
            vec![(0, "a".to_string()), (0, "b".to_string())]
        );
    }

    #[test]
    fn non_markers_stay_literal() {
        assert_eq!(tokenize("{x}{1", 2), vec![(0, "{x}{1".to_string())]);
    }

    fn unmarked(art: &str, palette_len: usize) -> String {
        let mut lines = Vec::new();
        for line in art.lines() {
            let runs = tokenize(line, palette_len);
            lines.push(runs.into_iter().map(|(_, text)| text).collect::<String>());
        }
        lines.join("\n")
    }

    #[test]
    fn painted_art_keeps_its_shape() {
        let plain = strip_ansi_codes(&render(Some("Shell"))).to_string();
        assert_eq!(plain, unmarked(BRANCH_GRAPH, 3));
        assert!(!plain.contains('{'));
        assert_eq!(paint("{0}x", &[]), "x");
    }

    #[test]
    fn known_languages_get_their_own_art() {
        let rust = strip_ansi_codes(&render(Some("Rust"))).to_string();
        assert_eq!(rust, unmarked(LOGOS[0].art, 2));

        let ts = logo_for("TypeScript").map(|logo| logo.art);
        assert_eq!(ts, logo_for("JavaScript").map(|logo| logo.art));
        assert!(ts.is_some());
    }

    #[test]
    fn unknown_or_missing_language_falls_back_to_the_branch_graph() {
        let graph = unmarked(BRANCH_GRAPH, 3);
        assert!(logo_for("COBOL").is_none());
        assert_eq!(strip_ansi_codes(&render(Some("COBOL"))).to_string(), graph);
        assert_eq!(strip_ansi_codes(&render(None)).to_string(), graph);
    }

    #[test]
    fn every_logo_marker_has_a_color() {
        for logo in LOGOS {
            for line in logo.art.lines() {
                let mut rest = line;
                while let Some(at) = rest.find('{') {
                    let index = rest[at + 1..].chars().next().and_then(|c| c.to_digit(10));
                    if let Some(index) = index {
                        assert!((index as usize) < logo.palette.len(), "{line}");
                    }
                    rest = &rest[at + 1..];
                }
            }
        }
    }
}
