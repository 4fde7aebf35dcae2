use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RepositoryIdentity {
    pub branch: String,
    pub commit_hash: String,
    pub full_hash: String,
    pub commit_count: u64,
    pub user_name: String,
    pub user_email: String,
    pub remote_url: String,
    pub last_commit_message: String,
    pub status: String,
    pub repo_name: String,
    pub created: String,
    pub git_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageStat {
    pub name: String,
    /// Share of tracked source bytes, 0..=100.
    pub percentage: f64,
    /// Hex color key, e.g. `#DEA584`.
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contributor {
    pub name: String,
    pub commits: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContributorStats {
    pub top: Vec<Contributor>,
    /// Number of distinct authors, independent of how many are kept in `top`.
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotFile {
    pub path: String,
    pub changes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Falling,
    Flat,
}

impl Trend {
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Rising => "↑",
            Trend::Falling => "↓",
            Trend::Flat => "→",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Trend::Rising => "rising",
            Trend::Falling => "falling",
            Trend::Flat => "flat",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Velocity {
    /// Weekly commit counts, oldest week first.
    pub weeks: [u32; crate::metrics::velocity::WEEKS],
    pub per_week: f64,
    pub sparkline: String,
    pub trend: Trend,
}

impl Default for Velocity {
    fn default() -> Self {
        Velocity::from_weeks([0; crate::metrics::velocity::WEEKS])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AheadBehind {
    pub base: String,
    /// Commits on the current branch that the default branch lacks.
    pub ahead: u32,
    /// Commits on the default branch that the current branch lacks.
    pub behind: u32,
}

impl fmt::Display for AheadBehind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "↑{} ↓{} vs {}", self.ahead, self.behind, self.base)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BranchHealth {
    pub total: usize,
    pub stale: usize,
    pub ahead_behind: Option<AheadBehind>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TestRatio {
    pub test_lines: usize,
    pub code_lines: usize,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeStats {
    pub languages: Vec<LanguageStat>,
    pub size: String,
    pub file_count: usize,
    pub loc: usize,
    pub test_ratio: TestRatio,
}

impl Default for CodeStats {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            size: "0 B".to_string(),
            file_count: 0,
            loc: 0,
            test_ratio: TestRatio::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dependencies {
    pub manager: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub tag: String,
    pub age: String,
}

/// Everything the collector gathered in one run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub identity: RepositoryIdentity,
    pub code: CodeStats,
    pub contributors: ContributorStats,
    pub last_activity: String,
    pub velocity: Velocity,
    pub dependencies: Option<Dependencies>,
    pub branches: BranchHealth,
    pub hot_files: Vec<HotFile>,
    pub license: String,
    pub latest_tag: String,
    pub ci: Vec<&'static str>,
    pub releases: Vec<Release>,
    pub stash_count: usize,
    pub commit_convention: String,
    #[serde(skip)]
    pub commit_dates: Vec<String>,
}

impl Report {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
