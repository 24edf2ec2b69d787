use crate::domain::AppError;

/// Connection endpoints for a freshly created remote repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle {
    /// Human-facing URL, reported on success.
    pub html_url: String,
    /// SSH push target registered as the local `origin`.
    pub ssh_url: String,
}

pub trait RemoteRepositoryPort {
    /// Create a private, non-auto-initialized repository by name.
    ///
    /// Any failure (auth, name collision, network) is fatal for the run;
    /// there is no retry and no cleanup of half-created remote state.
    fn create_private_repository(&self, name: &str) -> Result<RepositoryHandle, AppError>;
}
