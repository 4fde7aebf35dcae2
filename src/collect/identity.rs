use crate::git::Gateway;
use crate::metrics::age::{humanize, parse_git_timestamp};
use crate::metrics::remote::repo_name;
use crate::metrics::status::summarize_status;
use crate::model::RepositoryIdentity;
use chrono::{DateTime, Utc};
use std::path::Path;

pub fn collect(gw: &dyn Gateway, root: &Path, now: &DateTime<Utc>) -> RepositoryIdentity {
    let full_hash = gw.query_or_default(&["rev-parse", "HEAD"]);
    let remote_url = gw.query_or_default(&["config", "--get", "remote.origin.url"]);
    let git_version = gw.query_or_default(&["--version"]);

    RepositoryIdentity {
        branch: gw.query_or_default(&["rev-parse", "--abbrev-ref", "HEAD"]),
        commit_hash: full_hash.chars().take(7).collect(),
        commit_count: gw
            .query_or_default(&["rev-list", "--count", "HEAD"])
            .parse()
            .unwrap_or(0),
        user_name: gw.query_or_default(&["config", "user.name"]),
        user_email: gw.query_or_default(&["config", "user.email"]),
        last_commit_message: gw.query_or_default(&["log", "-1", "--pretty=%s"]),
        status: summarize_status(&gw.query_or_default(&["status", "--short"])),
        repo_name: repo_name(&remote_url, root),
        created: created(gw, now),
        git_version: git_version
            .strip_prefix("git version ")
            .unwrap_or(&git_version)
            .to_string(),
        full_hash,
        remote_url,
    }
}

/// Age of the oldest root commit reachable from HEAD.
fn created(gw: &dyn Gateway, now: &DateTime<Utc>) -> String {
    gw.query_or_default(&["log", "--max-parents=0", "--format=%ci", "HEAD"])
        .lines()
        .filter_map(parse_git_timestamp)
        .min()
        .map(|first| humanize(&first, now))
        .unwrap_or_else(|| "unknown".to_string())
}
