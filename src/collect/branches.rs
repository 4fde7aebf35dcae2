use crate::git::Gateway;
use crate::metrics::branches::{count_branches, count_stale, parse_left_right, parse_remote_head};
use crate::model::{AheadBehind, BranchHealth};

/// The branch the current one is compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DefaultBranch {
    /// Name shown to the user.
    name: String,
    /// Revision handed to `rev-list`.
    rev: String,
}

type Lookup = fn(&dyn Gateway) -> Option<DefaultBranch>;

const ORIGIN_HEAD: &str = "refs/remotes/origin/HEAD";

/// Tried in order; the first lookup that answers wins.
const DEFAULT_BRANCH_LOOKUPS: &[Lookup] = &[origin_head, local_main, local_master];

fn origin_head(gw: &dyn Gateway) -> Option<DefaultBranch> {
    let symref = gw.query(&["symbolic-ref", ORIGIN_HEAD]).ok()?;
    let name = parse_remote_head(&symref)?;
    Some(DefaultBranch {
        rev: format!("origin/{name}"),
        name,
    })
}

fn local_main(gw: &dyn Gateway) -> Option<DefaultBranch> {
    verify_local(gw, "main")
}

fn local_master(gw: &dyn Gateway) -> Option<DefaultBranch> {
    verify_local(gw, "master")
}

fn verify_local(gw: &dyn Gateway, name: &str) -> Option<DefaultBranch> {
    let refname = format!("refs/heads/{name}");
    gw.query(&["rev-parse", "--verify", "-q", &refname]).ok()?;
    Some(DefaultBranch {
        name: name.to_string(),
        rev: name.to_string(),
    })
}

fn default_branch(gw: &dyn Gateway) -> Option<DefaultBranch> {
    DEFAULT_BRANCH_LOOKUPS.iter().find_map(|lookup| lookup(gw))
}

/// Divergence of the checked-out branch from the default branch.
///
/// `None` on a detached HEAD, on the default branch itself, or when no
/// default branch can be found.
fn ahead_behind(gw: &dyn Gateway) -> Option<AheadBehind> {
    let current = gw.query(&["rev-parse", "--abbrev-ref", "HEAD"]).ok()?;
    if current.is_empty() || current == "HEAD" {
        return None;
    }
    let base = default_branch(gw)?;
    if base.name == current {
        return None;
    }

    let range = format!("{}...{}", base.rev, current);
    let counts = gw.query(&["rev-list", "--left-right", "--count", &range]);
    let (behind, ahead) = parse_left_right(&counts.ok()?)?;
    Some(AheadBehind {
        base: base.name,
        ahead,
        behind,
    })
}

pub fn collect(gw: &dyn Gateway, now: i64) -> BranchHealth {
    let listing = gw.query_or_default(&["branch", "-a"]);
    let format = "--format=%(committerdate:unix)";
    let commit_times = gw.query_or_default(&["for-each-ref", format, "refs/heads"]);
    BranchHealth {
        total: count_branches(&listing),
        stale: count_stale(&commit_times, now),
        ahead_behind: ahead_behind(gw),
    }
}
