use crate::collect::collect;
use crate::git::GitRepo;
use crate::render::render;
use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::{ArgAction, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitglance")]
#[command(about = "One-screen summary of a git repository")]
#[command(version, disable_version_flag = true)]
pub struct Cli {
    #[arg(
        long,
        help = "Path inside the git repository (defaults to the current directory)"
    )]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Print the collected report as JSON")]
    pub json: bool,

    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let repo = GitRepo::open(self.repo.as_ref())
            .context("Not a git repository")?;
        let gateway = repo.gateway();

        let spinner = spinner(!self.json);
        let report = collect(&gateway, repo.path(), Utc::now());
        spinner.finish_and_clear();

        if self.json {
            let json = report.to_json().context("Failed to serialize report")?;
            println!("{json}");
        } else {
            println!("{}", render(&report, Local::now().date_naive()));
        }
        Ok(())
    }
}

/// Spinner on stderr while the collector runs; hidden when stderr is not a terminal.
fn spinner(visible: bool) -> ProgressBar {
    if !visible || !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Reading repository...");
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
