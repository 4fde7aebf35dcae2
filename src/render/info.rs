use super::{fg, BAD, DIM, GOOD, LABEL, TITLE, VALUE};
use crate::metrics::code::format_loc;
use crate::metrics::remote::web_url;
use crate::model::{Report, Trend};
use console::{pad_str, Alignment};

const LABEL_WIDTH: usize = 14;
/// Languages named in the summary row.
const SUMMARY_LANGUAGES: usize = 3;
const STASH: &str = "#D2A8FF";

fn row(label: &str, value: &str) -> String {
    let value = if value.is_empty() { "-" } else { value };
    let label = pad_str(label, LABEL_WIDTH, Alignment::Left, None);
    let label = fg(LABEL).bold().apply_to(label);
    format!("{label}{}", fg(VALUE).apply_to(value))
}

fn dim(text: impl std::fmt::Display) -> String {
    fg(DIM).apply_to(text).to_string()
}

fn language_summary(report: &Report) -> String {
    report
        .code
        .languages
        .iter()
        .take(SUMMARY_LANGUAGES)
        .map(|l| format!("{} {:.1}%", l.name, l.percentage))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Label/value rows; optional facts are left out when there is nothing to show.
pub fn rows(report: &Report) -> Vec<String> {
    let id = &report.identity;
    let code = &report.code;

    let repo_name = fg(TITLE).bold().apply_to(&id.repo_name).to_string();
    let commits = dim(format!("({} commits)", id.commit_count));
    let head = format!("{} {}", dim(&id.commit_hash), id.last_commit_message);
    let email = dim(format!("<{}>", id.user_email));
    let files = dim(format!("({} files)", code.file_count));

    let mut rows = vec![
        row("Repository:", &repo_name),
        row("Branch:", &format!("{} {commits}", id.branch)),
        row("Head:", &head),
        row("Author:", &format!("{} {email}", id.user_name)),
        row("Created:", &id.created),
        row("Last active:", &report.last_activity),
        row("Languages:", &language_summary(report)),
        row("Size:", &format!("{} {files}", code.size)),
        row("Lines:", &format_loc(code.loc)),
    ];

    if !id.remote_url.is_empty() {
        rows.push(row("URL:", &web_url(&id.remote_url)));
    }
    if report.contributors.total > 0 {
        rows.push(row("Authors:", &report.contributors.total.to_string()));
    }
    if !report.latest_tag.is_empty() {
        rows.push(row("Version:", &report.latest_tag));
    }
    if !report.license.is_empty() {
        rows.push(row("License:", &report.license));
    }

    let v = &report.velocity;
    let trend_color = match v.trend {
        Trend::Rising => GOOD,
        Trend::Falling => BAD,
        Trend::Flat => DIM,
    };
    let trend = fg(trend_color).apply_to(v.trend.arrow());
    let velocity = format!("{:.1}/wk {} {trend}", v.per_week, v.sparkline);
    rows.push(row("Velocity:", &velocity));

    if let Some(deps) = report.dependencies {
        let manager = dim(format!("({})", deps.manager));
        rows.push(row("Deps:", &format!("{} {manager}", deps.count)));
    }

    let branches = &report.branches;
    if branches.total > 0 {
        let mut value = branches.total.to_string();
        if branches.stale > 0 {
            let stale = fg(BAD).apply_to(format!("({} stale)", branches.stale));
            value.push_str(&format!(" {stale}"));
        }
        if let Some(divergence) = &branches.ahead_behind {
            value.push_str(&format!(" {}", dim(divergence)));
        }
        rows.push(row("Branches:", &value));
    }

    if !report.ci.is_empty() {
        rows.push(row("CI/CD:", &report.ci.join(", ")));
    }

    let tests = &code.test_ratio;
    if tests.test_lines > 0 {
        let test_lines = format_loc(tests.test_lines);
        let code_lines = format_loc(tests.code_lines);
        let detail = dim(format!("({test_lines} test / {code_lines} code)"));
        let share = format!("{:.0}% {detail}", tests.ratio * 100.0);
        rows.push(row("Tests:", &share));
    }

    if !report.commit_convention.is_empty() {
        rows.push(row("Commits:", &report.commit_convention));
    }
    if report.stash_count > 0 {
        let entries = fg(STASH).apply_to(format!("{} entries", report.stash_count));
        rows.push(row("Stash:", &entries.to_string()));
    }
    if !id.git_version.is_empty() {
        rows.push(row("Git:", &id.git_version));
    }

    let status_color = if id.status == "clean" { GOOD } else { BAD };
    let status = fg(status_color).apply_to(&id.status).to_string();
    rows.push(row("Status:", &status));
    rows
}

pub fn render(report: &Report) -> String {
    rows(report).join("\n")
}
