//! Metric collection: every catalogued metric is gathered by its own task.
//!
//! Tasks run concurrently inside one `rayon::scope` and never see each
//! other's results. A task that cannot reach its data source reports the
//! metric's zero value, so collection itself cannot fail.

pub mod branches;
pub mod code;
pub mod history;
pub mod identity;

use crate::git::Gateway;
use crate::metrics::{deps, project};
use crate::model::{
    BranchHealth, CodeStats, ContributorStats, Dependencies, HotFile, Release, Report,
    RepositoryIdentity, Velocity, SCHEMA_VERSION,
};
use chrono::{DateTime, Utc};
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Run `task` and log how long it took.
fn timed<T>(name: &str, task: impl FnOnce() -> T) -> T {
    let started = Instant::now();
    let value = task();
    debug!(
        task = name,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "collected"
    );
    value
}

/// Gather the full report for the repository at `root`.
///
/// Returns once every task has finished.
pub fn collect(gw: &dyn Gateway, root: &Path, now: DateTime<Utc>) -> Report {
    let mut identity = RepositoryIdentity::default();
    let mut code = CodeStats::default();
    let mut contributors = ContributorStats::default();
    let mut last_activity = String::new();
    let mut velocity = Velocity::default();
    let mut dependencies: Option<Dependencies> = None;
    let mut branches = BranchHealth::default();
    let mut hot_files: Vec<HotFile> = Vec::new();
    let mut commit_dates: Vec<String> = Vec::new();
    let mut license = String::new();
    let mut latest_tag = String::new();
    let mut ci: Vec<&'static str> = Vec::new();
    let mut releases: Vec<Release> = Vec::new();
    let mut stash_count = 0;
    let mut commit_convention = String::new();

    let now = &now;
    rayon::scope(|s| {
        s.spawn(|_| identity = timed("identity", || identity::collect(gw, root, now)));
        s.spawn(|_| code = timed("code", || code::collect(gw, root)));
        s.spawn(|_| contributors = timed("contributors", || history::contributors(gw)));
        s.spawn(|_| last_activity = timed("last_activity", || history::last_activity(gw, now)));
        s.spawn(|_| velocity = timed("velocity", || history::velocity(gw, now)));
        s.spawn(|_| dependencies = timed("dependencies", || deps::detect(root)));
        s.spawn(|_| branches = timed("branches", || branches::collect(gw, now.timestamp())));
        s.spawn(|_| hot_files = timed("hot_files", || history::hot_files(gw, now)));
        s.spawn(|_| commit_dates = timed("commit_dates", || history::commit_dates(gw)));
        s.spawn(|_| license = timed("license", || project::detect_license(root)));
        s.spawn(|_| latest_tag = timed("latest_tag", || history::latest_tag(gw)));
        s.spawn(|_| ci = timed("ci", || project::detect_ci(root)));
        s.spawn(|_| releases = timed("releases", || history::releases(gw, now)));
        s.spawn(|_| stash_count = timed("stash_count", || history::stash_count(gw)));
        s.spawn(|_| {
            commit_convention = timed("commit_convention", || history::commit_convention(gw))
        });
    });

    Report {
        version: SCHEMA_VERSION,
        generated_at: *now,
        repository_path: root.to_string_lossy().to_string(),
        identity,
        code,
        contributors,
        last_activity,
        velocity,
        dependencies,
        branches,
        hot_files,
        license,
        latest_tag,
        ci,
        releases,
        stash_count,
        commit_convention,
        commit_dates,
    }
}
