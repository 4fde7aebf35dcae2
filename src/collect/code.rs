use crate::git::Gateway;
use crate::langs::language_for;
use crate::metrics::code::{count_lines, format_size, is_test_path, language_stats};
use crate::model::{CodeStats, TestRatio};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// Tracked paths as reported by `git ls-files -z`.
fn tracked_files(gw: &dyn Gateway) -> Vec<String> {
    gw.query_or_default(&["ls-files", "-z"])
        .split('\0')
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

struct FileInfo {
    path: String,
    size: u64,
    /// Line count, only for files in a known language.
    lines: Option<usize>,
}

fn inspect(root: &Path, path: String) -> Option<FileInfo> {
    let full = root.join(&path);
    let meta = fs::metadata(&full).ok()?;
    if !meta.is_file() {
        return None;
    }
    let lines = match language_for(&path) {
        Some(_) => fs::read(&full).ok().map(|data| count_lines(&data)),
        None => None,
    };
    Some(FileInfo {
        path,
        size: meta.len(),
        lines,
    })
}

pub fn collect(gw: &dyn Gateway, root: &Path) -> CodeStats {
    let tracked = tracked_files(gw);
    let file_count = tracked.len();

    // deleted-but-tracked files and submodule directories drop out here
    let files: Vec<FileInfo> = tracked
        .into_par_iter()
        .filter_map(|path| inspect(root, path))
        .collect();

    let total_size: u64 = files.iter().map(|f| f.size).sum();
    let languages = language_stats(files.iter().map(|f| (f.path.as_str(), f.size)));

    let (mut loc, mut test_lines) = (0, 0);
    for file in &files {
        let Some(lines) = file.lines else { continue };
        loc += lines;
        if is_test_path(&file.path) {
            test_lines += lines;
        }
    }

    CodeStats {
        languages,
        size: format_size(total_size),
        file_count,
        loc,
        test_ratio: TestRatio::new(test_lines, loc - test_lines),
    }
}
