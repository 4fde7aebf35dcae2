/// Local branches without a commit for this many days count as stale.
pub const STALE_AFTER_DAYS: i64 = 30;

/// Count refs listed by `git branch -a`, skipping `origin/HEAD -> origin/main`
/// aliases and the `(HEAD detached at ...)` pseudo-entry.
pub fn count_branches(listing: &str) -> usize {
    listing
        .lines()
        .map(|l| l.trim().trim_start_matches("* "))
        .filter(|l| !l.is_empty() && !l.contains("->") && !l.starts_with('('))
        .count()
}

/// Count unix committer timestamps older than the stale threshold.
///
/// Lines that are not integers are ignored rather than counted as stale.
pub fn count_stale(timestamps: &str, now: i64) -> usize {
    let cutoff = now - STALE_AFTER_DAYS * 24 * 60 * 60;
    timestamps
        .lines()
        .filter_map(|l| l.trim().parse::<i64>().ok())
        .filter(|&ts| ts < cutoff)
        .count()
}

/// Branch name from `git symbolic-ref refs/remotes/origin/HEAD` output.
pub fn parse_remote_head(symref: &str) -> Option<String> {
    let name = symref.trim().strip_prefix("refs/remotes/")?;
    let (_remote, branch) = name.split_once('/')?;
    (!branch.is_empty()).then(|| branch.to_string())
}

/// Parse `git rev-list --left-right --count base...current` into (left, right).
pub fn parse_left_right(out: &str) -> Option<(u32, u32)> {
    let mut parts = out.split_whitespace();
    let left = parts.next()?.parse().ok()?;
    let right = parts.next()?.parse().ok()?;
    Some((left, right))
}
