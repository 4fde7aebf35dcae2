//! Dependency counting across manifest dialects.
//!
//! Dialects are checked in priority order at the repository root; the first
//! manifest that exists and declares at least one dependency is reported.

use crate::model::Dependencies;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

pub struct Dialect {
    pub manager: &'static str,
    pub manifest: &'static str,
    pub count: fn(&str) -> usize,
}

pub const DIALECTS: &[Dialect] = &[
    Dialect {
        manager: "go",
        manifest: "go.mod",
        count: count_go_mod,
    },
    Dialect {
        manager: "cargo",
        manifest: "Cargo.toml",
        count: count_cargo_toml,
    },
    Dialect {
        manager: "npm",
        manifest: "package.json",
        count: count_package_json,
    },
    Dialect {
        manager: "pip",
        manifest: "pyproject.toml",
        count: count_pyproject,
    },
    Dialect {
        manager: "pip",
        manifest: "requirements.txt",
        count: count_requirements,
    },
    Dialect {
        manager: "bundler",
        manifest: "Gemfile",
        count: count_gemfile,
    },
    Dialect {
        manager: "composer",
        manifest: "composer.json",
        count: count_composer_json,
    },
];

pub fn detect(root: &Path) -> Option<Dependencies> {
    DIALECTS.iter().find_map(|dialect| {
        let contents = fs::read_to_string(root.join(dialect.manifest)).ok()?;
        let count = (dialect.count)(&contents);
        debug!("{}: {} dependencies", dialect.manifest, count);
        (count > 0).then_some(Dependencies {
            manager: dialect.manager,
            count,
        })
    })
}

fn strip_comment<'a>(line: &'a str, marker: &str) -> &'a str {
    match line.find(marker) {
        Some(idx) => line[..idx].trim(),
        None => line.trim(),
    }
}

pub fn count_go_mod(contents: &str) -> usize {
    let mut in_block = false;
    let mut count = 0;
    for raw in contents.lines() {
        let line = strip_comment(raw, "//");
        if line.is_empty() {
            continue;
        }
        if in_block {
            if line == ")" {
                in_block = false;
            } else {
                count += 1;
            }
        } else if let Some(rest) = line.strip_prefix("require") {
            let rest = rest.trim();
            if rest == "(" {
                in_block = true;
            } else if !rest.is_empty() {
                count += 1;
            }
        }
    }
    count
}

fn is_cargo_dependency_table(header: &str) -> bool {
    let name = header.trim_matches(|c| c == '[' || c == ']').trim();
    let last = name.rsplit('.').next().unwrap_or(name);
    let is_deps = matches!(
        last,
        "dependencies" | "dev-dependencies" | "build-dependencies"
    );
    is_deps && (name == last || name.starts_with("target.") || name.starts_with("workspace."))
}

fn is_cargo_dependency_entry_table(header: &str) -> bool {
    let name = header.trim_matches(|c| c == '[' || c == ']').trim();
    ["dependencies.", "dev-dependencies.", "build-dependencies."]
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

pub fn count_cargo_toml(contents: &str) -> usize {
    let mut in_deps = false;
    let mut count = 0;
    for raw in contents.lines() {
        let line = strip_comment(raw, "#");
        if line.is_empty() {
            continue;
        }
        if line.starts_with('[') {
            in_deps = is_cargo_dependency_table(line);
            // `[dependencies.serde]` declares one dependency as a table
            if is_cargo_dependency_entry_table(line) {
                count += 1;
            }
            continue;
        }
        // multi-line inline tables continue with lines that carry no key
        if in_deps && line.contains('=') && !line.starts_with('}') {
            count += 1;
        }
    }
    count
}

fn object_len(value: &Value, key: &str, skip: fn(&str) -> bool) -> usize {
    value
        .get(key)
        .and_then(Value::as_object)
        .map(|deps| deps.keys().filter(|k| !skip(k)).count())
        .unwrap_or(0)
}

pub fn count_package_json(contents: &str) -> usize {
    match serde_json::from_str::<Value>(contents) {
        Ok(json) => {
            object_len(&json, "dependencies", |_| false)
                + object_len(&json, "devDependencies", |_| false)
        }
        Err(e) => {
            debug!("package.json: {e}");
            0
        }
    }
}

pub fn count_composer_json(contents: &str) -> usize {
    fn platform(name: &str) -> bool {
        name == "php" || name.starts_with("ext-")
    }
    match serde_json::from_str::<Value>(contents) {
        Ok(json) => {
            object_len(&json, "require", platform) + object_len(&json, "require-dev", platform)
        }
        Err(e) => {
            debug!("composer.json: {e}");
            0
        }
    }
}

/// Count the quoted strings in a fragment of a TOML array, stopping at the
/// closing bracket. Returns the count and whether the array was closed.
fn scan_array(fragment: &str) -> (usize, bool) {
    let mut count = 0;
    let mut open: Option<char> = None;
    for ch in fragment.chars() {
        match open {
            Some(quote) if ch == quote => open = None,
            Some(_) => {}
            None if ch == ']' => return (count, true),
            None if ch == '"' || ch == '\'' => {
                open = Some(ch);
                count += 1;
            }
            None => {}
        }
    }
    (count, false)
}

pub fn count_pyproject(contents: &str) -> usize {
    let mut count = 0;
    let mut in_array = false;
    let mut in_poetry = false;
    for raw in contents.lines() {
        let line = strip_comment(raw, "#");
        if line.is_empty() {
            continue;
        }
        if in_array {
            let (items, closed) = scan_array(line);
            count += items;
            in_array = !closed;
            continue;
        }
        if line.starts_with('[') {
            in_poetry = line == "[tool.poetry.dependencies]";
            continue;
        }
        if in_poetry {
            if line.contains('=') && !line.starts_with("python") {
                count += 1;
            }
            continue;
        }
        if let Some(rest) = line.strip_prefix("dependencies") {
            let rest = rest.trim_start();
            if let Some(array) = rest.strip_prefix('=') {
                if let Some(fragment) = array.trim().strip_prefix('[') {
                    let (items, closed) = scan_array(fragment);
                    count += items;
                    in_array = !closed;
                }
            }
        }
    }
    count
}

pub fn count_requirements(contents: &str) -> usize {
    contents
        .lines()
        .map(|l| strip_comment(l, "#"))
        .filter(|l| !l.is_empty() && !l.starts_with('-'))
        .count()
}

pub fn count_gemfile(contents: &str) -> usize {
    contents
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with("gem ") || l.starts_with("gem("))
        .count()
}
