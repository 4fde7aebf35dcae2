use crate::error::{GlanceError, Result};
use crate::git::GitCli;
use gix::discover;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository containing `path`, or the current dir if `None`.
    ///
    /// The path is resolved to an absolute one first, so relative paths and `.`
    /// give an absolute working-tree root. Bare repositories are rejected: every
    /// metric reads the working tree.
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir()?,
        };
        let repo_path = std::fs::canonicalize(&repo_path)?;

        let repo = discover(&repo_path)?;
        let path = repo
            .workdir()
            .ok_or_else(|| GlanceError::NotARepository(repo_path.clone()))?
            .to_path_buf();

        info!("repository root: {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn gateway(&self) -> GitCli {
        GitCli::new(&self.path)
    }
}
