//! Repository discovery and the `git grep` search backend.
//!
//! # Public API
//! - [`RepoLocator`]: finds the root directory to search from
//! - [`SearchBackend`]: runs a search and returns raw `file:line:text` lines
//! - [`GitRepo`]: git2-backed repository handle, implements [`RepoLocator`]
//! - [`GitGrepBackend`]: shells out to `git --no-pager grep`
//!
//! # Backend Contract
//! - Runs from the repository root so filenames come back root-relative
//! - Disables `core.quotePath` so non-ASCII filenames come back as raw UTF-8
//! - Exit status 1 with nothing on stderr means "no matches", not a failure
//! - Any other non-zero exit or spawn failure becomes [`GitGrepError::Backend`]

use crate::core::error::{GitGrepError, Result};
use git2::Repository;
use std::path::{Path, PathBuf};
use std::process::Command;

const GIT_CMD: &str = "git";

pub trait RepoLocator {
    /// Working directory root, or `None` outside a repository
    fn find_root(&self) -> Option<PathBuf>;
}

pub trait SearchBackend {
    fn search(&self, root: &Path, pattern: &str) -> Result<Vec<String>>;
}

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo { repo })
    }

    /// Working directory of the repository, `None` for bare repositories
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }
}

impl RepoLocator for GitRepo {
    fn find_root(&self) -> Option<PathBuf> {
        self.workdir().map(Path::to_path_buf)
    }
}

/// Locates the repository enclosing a starting directory
pub struct DiscoverLocator {
    start: PathBuf,
}

impl DiscoverLocator {
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            start: start.into(),
        }
    }
}

impl RepoLocator for DiscoverLocator {
    fn find_root(&self) -> Option<PathBuf> {
        match GitRepo::open(&self.start) {
            Ok(repo) => {
                let root = repo.find_root();
                log::debug!("Repository root for {}: {root:?}", self.start.display());
                root
            }
            Err(e) => {
                log::debug!("No repository at {}: {e}", self.start.display());
                None
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GitGrepBackend {
    pub ignore_case: bool,
    pub extra_args: Vec<String>,
}

impl GitGrepBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }

    fn build_command(&self, root: &Path, pattern: &str) -> Command {
        let mut cmd = Command::new(GIT_CMD);
        cmd.args(["-c", "core.quotePath=false"])
            .arg("--no-pager")
            .arg("grep")
            .arg("-n")
            .arg("-I")
            .arg("--no-color");
        if self.ignore_case {
            cmd.arg("-i");
        }
        cmd.args(&self.extra_args);
        cmd.arg("-e").arg(pattern);
        cmd.current_dir(root);
        cmd
    }
}

impl SearchBackend for GitGrepBackend {
    fn search(&self, root: &Path, pattern: &str) -> Result<Vec<String>> {
        let mut cmd = self.build_command(root, pattern);
        log::debug!("Running {cmd:?} in {}", root.display());

        let output = cmd
            .output()
            .map_err(|e| GitGrepError::backend_error(format!("could not run git: {e}")))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        log::debug!("git grep exited with {}", output.status);

        if !output.status.success() {
            if output.status.code() == Some(1) && stderr.trim().is_empty() {
                return Ok(Vec::new());
            }
            return Err(GitGrepError::backend_error(format!(
                "git grep failed: {}",
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().map(str::to_string).collect())
    }
}
