use std::path::Path;

use git2::Repository;

use crate::error::{IssueTagError, Result};

/// Name reported when the repository has no active branch (detached HEAD).
pub const DETACHED_HEAD: &str = "HEAD";

/// Wrapper around git2 Repository for branch resolution.
///
/// The hook only needs to know which branch is checked out; everything
/// else about the repository stays out of scope.
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Creates a new GitRepo instance for the current working directory.
    ///
    /// Discovers the git repository in the current directory or parent
    /// directories.
    ///
    /// # Returns
    /// * `Ok(GitRepo)` - Successfully initialized repository wrapper
    /// * `Err` - If not in a git repository
    pub fn new() -> Result<Self> {
        Self::open(".")
    }

    /// Open or discover a git repository at an explicit path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path.as_ref()).map_err(|e| {
            IssueTagError::branch(format!("Not in a git repository: {}", e))
        })?;

        Ok(GitRepo { repo })
    }

    /// Gets the name of the branch HEAD points at.
    ///
    /// Returns [DETACHED_HEAD] when the repository is in a detached state,
    /// so the caller always gets a usable string. On an unborn branch
    /// (fresh repository with no commits) the symbolic target is resolved
    /// instead.
    ///
    /// # Returns
    /// * `Ok(String)` - Branch shorthand, e.g. "AA-123-fix-bug"
    /// * `Err` - If HEAD cannot be read
    pub fn current_branch(&self) -> Result<String> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => head
                .shorthand()
                .map(|s| s.to_string())
                .ok_or_else(|| IssueTagError::branch("Branch name is not valid UTF-8")),
            Ok(_) => Ok(DETACHED_HEAD.to_string()),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
                let head = self.repo.find_reference("HEAD")?;
                let target = head.symbolic_target().unwrap_or(DETACHED_HEAD);

                Ok(target.trim_start_matches("refs/heads/").to_string())
            }
            Err(e) => Err(e.into()),
        }
    }
}
