use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

const LICENSE_FILES: &[&str] = &[
    "LICENSE",
    "LICENSE.md",
    "LICENSE.txt",
    "LICENCE",
    "LICENCE.md",
    "COPYING",
];

const BSD_GRANT: &str = "Redistribution and use in source and binary forms";

/// Ordered text heuristics; every needle must appear for the license to match.
const LICENSE_RULES: &[(&[&str], &str)] = &[
    (&["GNU AFFERO GENERAL PUBLIC LICENSE"], "AGPL-3.0"),
    (&["GNU LESSER GENERAL PUBLIC LICENSE"], "LGPL"),
    (&["GNU GENERAL PUBLIC LICENSE", "Version 3"], "GPL-3.0"),
    (&["GNU GENERAL PUBLIC LICENSE", "Version 2"], "GPL-2.0"),
    (&["Apache License", "Version 2.0"], "Apache-2.0"),
    (&["Mozilla Public License", "2.0"], "MPL-2.0"),
    (&["MIT License"], "MIT"),
    (&["Permission is hereby granted, free of charge"], "MIT"),
    (&["This is free and unencumbered software"], "Unlicense"),
    (&["ISC License"], "ISC"),
    (&[BSD_GRANT, "Neither the name"], "BSD-3-Clause"),
    (&[BSD_GRANT], "BSD-2-Clause"),
];

pub fn identify_license(text: &str) -> &'static str {
    LICENSE_RULES
        .iter()
        .find(|(needles, _)| needles.iter().all(|n| text.contains(n)))
        .map(|(_, id)| *id)
        .unwrap_or("Other")
}

/// License of the first license file found at `root`, or an empty string.
pub fn detect_license(root: &Path) -> String {
    LICENSE_FILES
        .iter()
        .find_map(|name| fs::read_to_string(root.join(name)).ok())
        .map(|text| identify_license(&text).to_string())
        .unwrap_or_default()
}

const CI_MARKERS: &[(&str, &str)] = &[
    (".github/workflows", "GitHub Actions"),
    (".gitlab-ci.yml", "GitLab CI"),
    (".circleci", "CircleCI"),
    ("Jenkinsfile", "Jenkins"),
    (".travis.yml", "Travis CI"),
    ("azure-pipelines.yml", "Azure Pipelines"),
    ("bitbucket-pipelines.yml", "Bitbucket Pipelines"),
    (".drone.yml", "Drone"),
];

pub fn detect_ci(root: &Path) -> Vec<&'static str> {
    CI_MARKERS
        .iter()
        .filter(|(marker, _)| root.join(marker).exists())
        .map(|(_, name)| *name)
        .collect()
}

/// Share of subjects needed before history is called conventional.
pub const CONVENTIONAL_THRESHOLD: f64 = 0.5;

static CONVENTIONAL_SUBJECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(feat|fix|docs|style|refactor|perf|test|build|ci|chore|revert)(\([^)]+\))?!?: \S",
    )
    .expect("valid conventional commit pattern")
});

/// Classify recent commit subjects: `"conventional (84%)"`, `"freeform"`, or empty.
pub fn commit_convention(subjects: &str) -> String {
    let subjects: Vec<&str> = subjects
        .lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if subjects.is_empty() {
        return String::new();
    }

    let matching = subjects
        .iter()
        .filter(|s| CONVENTIONAL_SUBJECT.is_match(s))
        .count();
    let share = matching as f64 / subjects.len() as f64;
    if share >= CONVENTIONAL_THRESHOLD {
        format!("conventional ({:.0}%)", share * 100.0)
    } else {
        "freeform".to_string()
    }
}
