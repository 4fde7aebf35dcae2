//! Tasks that read commit history, tags and stashes.

use crate::git::Gateway;
use crate::metrics::age::relative_age;
use crate::metrics::hot_files::{self, rank_hot_files, tally_changes};
use crate::metrics::project;
use crate::metrics::velocity::{self, bucket_commits};
use crate::model::{Contributor, ContributorStats, HotFile, Release, Velocity};
use chrono::{DateTime, Duration, Utc};
use std::cmp::Reverse;

/// Top-K sizes for the ranked lists.
pub const TOP_CONTRIBUTORS: usize = 5;
pub const TOP_HOT_FILES: usize = 5;
pub const RECENT_RELEASES: usize = 5;
/// Subjects sampled when classifying the commit convention.
pub const CONVENTION_SAMPLE: usize = 50;

/// `--since` argument for a window of `days` ending at `now`.
fn since(now: &DateTime<Utc>, days: i64) -> String {
    let start = *now - Duration::days(days);
    format!("--since={}", start.format("%Y-%m-%d %H:%M:%S %z"))
}

/// Parse `git shortlog -sn` lines (`"  42\tName"`), busiest author first.
pub fn parse_shortlog(out: &str) -> Vec<Contributor> {
    let mut authors: Vec<Contributor> = out
        .lines()
        .filter_map(|line| {
            let (count, name) = line.trim().split_once(char::is_whitespace)?;
            Some(Contributor {
                name: name.trim().to_string(),
                commits: count.parse().ok()?,
            })
        })
        .collect();
    authors.sort_by_key(|c| Reverse(c.commits));
    authors
}

pub fn contributors(gw: &dyn Gateway) -> ContributorStats {
    let shortlog = gw.query_or_default(&["shortlog", "-sn", "--no-merges", "HEAD"]);
    let mut top = parse_shortlog(&shortlog);
    let total = top.len();
    top.truncate(TOP_CONTRIBUTORS);
    ContributorStats { top, total }
}

pub fn last_activity(gw: &dyn Gateway, now: &DateTime<Utc>) -> String {
    relative_age(&gw.query_or_default(&["log", "-1", "--format=%ci"]), now)
}

pub fn velocity(gw: &dyn Gateway, now: &DateTime<Utc>) -> Velocity {
    let since = since(now, velocity::WINDOW_DAYS);
    let out = gw.query_or_default(&["log", &since, "--format=%ct", "HEAD"]);
    let timestamps: Vec<i64> = out.lines().filter_map(|l| l.trim().parse().ok()).collect();
    Velocity::from_weeks(bucket_commits(&timestamps, now.timestamp()))
}

pub fn hot_files(gw: &dyn Gateway, now: &DateTime<Utc>) -> Vec<HotFile> {
    let since = since(now, hot_files::WINDOW_DAYS);
    let out = gw.query_or_default(&["log", &since, "--name-only", "--format=", "HEAD"]);
    rank_hot_files(tally_changes(&out), TOP_HOT_FILES)
}

/// One `YYYY-MM-DD` committer date per commit, for the calendar.
pub fn commit_dates(gw: &dyn Gateway) -> Vec<String> {
    gw.query_or_default(&["log", "--pretty=format:%cd", "--date=short"])
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn latest_tag(gw: &dyn Gateway) -> String {
    gw.query_or_default(&["describe", "--tags", "--abbrev=0"])
}

/// Parse `%(refname:short)|%(creatordate:iso)` lines into releases.
pub fn parse_releases(out: &str, now: &DateTime<Utc>) -> Vec<Release> {
    out.lines()
        .filter_map(|line| {
            let (tag, date) = line.split_once('|')?;
            let tag = tag.trim();
            (!tag.is_empty()).then(|| Release {
                tag: tag.to_string(),
                age: relative_age(date, now),
            })
        })
        .collect()
}

pub fn releases(gw: &dyn Gateway, now: &DateTime<Utc>) -> Vec<Release> {
    let count = format!("--count={RECENT_RELEASES}");
    let out = gw.query_or_default(&[
        "for-each-ref",
        "--sort=-creatordate",
        &count,
        "--format=%(refname:short)|%(creatordate:iso)",
        "refs/tags",
    ]);
    parse_releases(&out, now)
}

pub fn stash_count(gw: &dyn Gateway) -> usize {
    gw.query_or_default(&["stash", "list"])
        .lines()
        .filter(|l| !l.trim().is_empty())
        .count()
}

pub fn commit_convention(gw: &dyn Gateway) -> String {
    let limit = CONVENTION_SAMPLE.to_string();
    project::commit_convention(&gw.query_or_default(&["log", "-n", &limit, "--format=%s"]))
}
