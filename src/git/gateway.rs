use crate::error::{GlanceError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Runs one read-only history query and hands back its trimmed output.
///
/// Implementations must be shareable across the collector's worker threads.
/// A query is attempted exactly once; callers decide what a failure means.
pub trait Gateway: Sync {
    fn query(&self, args: &[&str]) -> Result<String>;

    /// Like [`Gateway::query`], but a failure becomes an empty string.
    fn query_or_default(&self, args: &[&str]) -> String {
        match self.query(args) {
            Ok(out) => out,
            Err(e) => {
                debug!("{e}");
                String::new()
            }
        }
    }
}

/// Gateway backed by the `git` executable.
pub struct GitCli {
    root: PathBuf,
}

impl GitCli {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl Gateway for GitCli {
    fn query(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            // keep `git status` from refreshing the index
            .env("GIT_OPTIONAL_LOCKS", "0")
            .output()
            .map_err(|e| GlanceError::query(args, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GlanceError::query(args, stderr.trim()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeGateway;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fake_matches_on_argument_prefixes() {
        let gw = FakeGateway::new()
            .respond(&["log", "--since="], "one")
            .respond(&["log"], "two");

        assert_eq!(gw.query(&["log", "--since=1d"]).unwrap(), "one");
        assert_eq!(gw.query(&["log", "-1"]).unwrap(), "two");
        assert!(gw.query(&["status"]).is_err());
        assert_eq!(gw.query_or_default(&["status"]), "");
    }

    #[test]
    fn git_cli_reports_failure_outside_a_repository() {
        let dir = tempfile::tempdir().unwrap();
        let gw = GitCli::new(dir.path());
        // Either git is missing or the directory is not a repository; both fail.
        assert!(gw.query(&["rev-parse", "--verify", "HEAD"]).is_err());
    }
}
