use crate::langs::{color_for, language_for};
use crate::model::{LanguageStat, TestRatio};

/// Byte-weighted language mix of tracked files, largest share first.
///
/// Files with extensions not in the language table are ignored. Equal shares
/// keep the order in which their language was first encountered.
pub fn language_stats<'a, I>(files: I) -> Vec<LanguageStat>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let mut totals: Vec<(&'static str, u64)> = Vec::new();
    for (path, size) in files {
        let Some(lang) = language_for(path) else {
            continue;
        };
        match totals.iter_mut().find(|(name, _)| *name == lang) {
            Some((_, bytes)) => *bytes += size,
            None => totals.push((lang, size)),
        }
    }

    let total: u64 = totals.iter().map(|(_, b)| b).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut stats: Vec<LanguageStat> = totals
        .into_iter()
        .map(|(name, bytes)| LanguageStat {
            name: name.to_string(),
            percentage: (bytes as f64 / total as f64 * 100.0).clamp(0.0, 100.0),
            color: color_for(name),
        })
        .collect();

    stats.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    stats
}

pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    match bytes {
        b if b < KB => format!("{b} B"),
        b if b < MB => format!("{:.1} KB", b as f64 / KB as f64),
        b => format!("{:.1} MB", b as f64 / MB as f64),
    }
}

pub fn format_loc(loc: usize) -> String {
    match loc {
        l if l < 1_000 => l.to_string(),
        l if l < 1_000_000 => format!("{:.1}K", l as f64 / 1_000.0),
        l => format!("{:.1}M", l as f64 / 1_000_000.0),
    }
}

/// Newline count, plus one for a final line without a trailing newline.
pub fn count_lines(data: &[u8]) -> usize {
    let newlines = data.iter().filter(|&&b| b == b'\n').count();
    match data.last() {
        Some(&last) if last != b'\n' => newlines + 1,
        _ => newlines,
    }
}

const TEST_DIRS: &[&str] = &["tests", "test", "__tests__", "spec"];
const TEST_INFIXES: &[&str] = &["_test.", ".test.", ".spec."];

pub fn is_test_path(path: &str) -> bool {
    let mut segments = path.split('/').peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            return segment.starts_with("test_") || TEST_INFIXES.iter().any(|i| segment.contains(i));
        }
        if TEST_DIRS.contains(&segment) {
            return true;
        }
    }
    false
}

impl TestRatio {
    pub fn new(test_lines: usize, code_lines: usize) -> Self {
        let ratio = if code_lines == 0 {
            0.0
        } else {
            test_lines as f64 / code_lines as f64
        };
        Self {
            test_lines,
            code_lines,
            ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn languages_sorted_by_share_with_stable_ties() {
        let files = [
            ("src/main.go", 100),
            ("web/app.ts", 300),
            ("README.md", 5_000),
            ("build.rs", 100),
            ("util/x.go", 100),
            ("scripts/run.sh", 200),
        ];
        let stats = language_stats(files.iter().map(|(p, s)| (*p, *s as u64)));
        let names: Vec<_> = stats.iter().map(|s| s.name.as_str()).collect();
        // Go (200) ties Shell (200); Go was seen first
        assert_eq!(names, vec!["TypeScript", "Go", "Shell", "Rust"]);

        let sum: f64 = stats.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(stats[0].percentage, 37.5);
        assert_eq!(stats[0].color, "#3178C6");
    }

    #[test]
    fn no_code_means_no_languages() {
        assert!(language_stats([("README.md", 10)]).is_empty());
        assert!(language_stats([("empty.rs", 0)]).is_empty());
    }

    #[test]
    fn sizes_and_loc() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_loc(999), "999");
        assert_eq!(format_loc(12_345), "12.3K");
        assert_eq!(format_loc(2_500_000), "2.5M");
    }

    #[test]
    fn line_counting() {
        assert_eq!(count_lines(b""), 0);
        assert_eq!(count_lines(b"a\nb\n"), 2);
        assert_eq!(count_lines(b"a\nb"), 2);
    }

    #[test]
    fn test_paths() {
        assert!(is_test_path("tests/cli_smoke.rs"));
        assert!(is_test_path("pkg/server/handler_test.go"));
        assert!(is_test_path("src/__tests__/app.tsx"));
        assert!(is_test_path("web/button.spec.ts"));
        assert!(is_test_path("py/test_models.py"));
        assert!(!is_test_path("src/testing.rs"));
        assert!(!is_test_path("src/attest.py"));
    }

    #[test]
    fn ratio_guards_zero_code() {
        assert_eq!(TestRatio::new(10, 0).ratio, 0.0);
        assert_eq!(TestRatio::new(50, 200).ratio, 0.25);
    }
}
