use crate::model::HotFile;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::path::Path;

/// Trailing window, in days, over which file changes are counted.
pub const WINDOW_DAYS: i64 = 90;

const GENERATED_NAMES: &[&str] = &["go.sum", "npm-shrinkwrap.json"];
const GENERATED_SUFFIXES: &[&str] = &[".min.js", ".min.css", ".map", ".pb.go", ".snap"];

/// Lock files and build output that churn on every change and say nothing about hot code.
pub fn is_generated(path: &str) -> bool {
    let file = Path::new(path);
    let name = match file.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return false,
    };

    if GENERATED_NAMES.contains(&name) || GENERATED_SUFFIXES.iter().any(|s| name.ends_with(s)) {
        return true;
    }
    if file.extension().and_then(|e| e.to_str()) == Some("lock") {
        return true;
    }
    let stem = file.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    stem == "lock" || stem.ends_with("-lock") || stem.ends_with("_lock")
}

/// Tally `git log --name-only --format=` output: one line per file per commit.
///
/// Counts come back in first-seen order so ranking ties stay stable.
pub fn tally_changes(log: &str) -> Vec<(String, u32)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, u32)> = Vec::new();

    for line in log.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match index.get(line) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(line, counts.len());
                counts.push((line.to_string(), 1));
            }
        }
    }
    counts
}

pub fn rank_hot_files<I, S>(changes: I, top: usize) -> Vec<HotFile>
where
    I: IntoIterator<Item = (S, u32)>,
    S: Into<String>,
{
    let mut files: Vec<HotFile> = changes
        .into_iter()
        .map(|(path, changes)| HotFile {
            path: path.into(),
            changes,
        })
        .filter(|f| f.changes > 0 && !is_generated(&f.path))
        .collect();

    files.sort_by_key(|f| Reverse(f.changes));
    files.truncate(top);
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn filtered_files_never_rank() {
        let ranked = rank_hot_files([("a.go", 5), ("lock.json", 99), ("b.go", 2)], 2);
        let got: Vec<_> = ranked.iter().map(|f| (&*f.path, f.changes)).collect();
        assert_eq!(got, vec![("a.go", 5), ("b.go", 2)]);
    }

    #[test]
    fn generated_patterns() {
        for path in [
            "Cargo.lock",
            "web/package-lock.json",
            "pnpm-lock.yaml",
            "yarn.lock",
            "go.sum",
            "dist/app.min.js",
            "api/service.pb.go",
        ] {
            assert!(is_generated(path), "{path} should be filtered");
        }
        for path in [
            "src/clock.rs",
            "locksmith.go",
            "Cargo.toml",
            "src/lock/mod.rs",
        ] {
            assert!(!is_generated(path), "{path} should be kept");
        }
    }

    #[test]
    fn tally_keeps_first_seen_order_and_ties_stay_stable() {
        let log = "src/b.rs\nsrc/a.rs\n\nsrc/a.rs\nsrc/b.rs\nsrc/c.rs\n";
        let counts = tally_changes(log);
        let got: Vec<_> = counts.iter().map(|(p, n)| (p.as_str(), *n)).collect();
        let expected = vec![("src/b.rs", 2), ("src/a.rs", 2), ("src/c.rs", 1)];
        assert_eq!(got, expected);

        let ranked = rank_hot_files(counts, 5);
        let paths: Vec<_> = ranked.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["src/b.rs", "src/a.rs", "src/c.rs"]);
    }

    #[test]
    fn empty_log_has_no_hot_files() {
        assert!(rank_hot_files(tally_changes(""), 5).is_empty());
    }
}
