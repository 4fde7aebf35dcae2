/// Summarize `git status --short` into e.g. `"2 modified, 1 untracked"`, or `"clean"`.
pub fn summarize_status(porcelain: &str) -> String {
    let (mut modified, mut added, mut deleted, mut untracked) = (0, 0, 0, 0);

    for line in porcelain.lines() {
        let code = match line.get(..2) {
            Some(code) => code,
            None => continue,
        };
        if code.contains('?') {
            untracked += 1;
        } else if code.contains('D') {
            deleted += 1;
        } else if code.contains('A') {
            added += 1;
        } else {
            modified += 1;
        }
    }

    let parts: Vec<String> = [
        (modified, "modified"),
        (added, "added"),
        (deleted, "deleted"),
        (untracked, "untracked"),
    ]
    .iter()
    .filter(|(n, _)| *n > 0)
    .map(|(n, label)| format!("{n} {label}"))
    .collect();

    if parts.is_empty() {
        "clean".to_string()
    } else {
        parts.join(", ")
    }
}
