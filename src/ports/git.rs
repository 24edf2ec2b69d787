use std::path::Path;

use crate::domain::AppError;

/// Version-control operations over a local workspace directory.
///
/// Each operation maps to one or two blocking subprocess invocations; a
/// non-zero exit is the sole failure signal and surfaces as
/// `AppError::GitError` carrying the captured output.
pub trait GitPort {
    /// Initialize an empty repository at `root`.
    fn init(&self, root: &Path) -> Result<(), AppError>;

    /// Configure the commit identity, scoped to this repository only.
    fn set_identity(&self, root: &Path, email: &str, name: &str) -> Result<(), AppError>;

    /// Pull the default-branch contents of `url` into the working tree.
    fn pull(&self, root: &Path, url: &str) -> Result<(), AppError>;

    /// Register a named remote.
    fn add_remote(&self, root: &Path, name: &str, url: &str) -> Result<(), AppError>;

    /// Stage every file in the working tree.
    fn stage_all(&self, root: &Path) -> Result<(), AppError>;

    /// Create a signed commit with `message`.
    fn commit(&self, root: &Path, message: &str) -> Result<(), AppError>;

    /// Force-rename the current branch.
    fn rename_branch(&self, root: &Path, branch: &str) -> Result<(), AppError>;

    /// Push `branch` and establish the upstream tracking relationship.
    fn push_upstream(&self, root: &Path, remote: &str, branch: &str) -> Result<(), AppError>;
}
