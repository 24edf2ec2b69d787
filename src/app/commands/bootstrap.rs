//! End-to-end bootstrap: create the remote, then seed and publish locally.

use std::path::Path;

use crate::app::workspace;
use crate::domain::{AppError, BootstrapRequest};
use crate::ports::{BannerPort, GitPort, RemoteRepositoryPort, RepositoryHandle};

/// Run the bootstrap sequence for one request.
///
/// The remote repository is created first; the workspace is then seeded and
/// pushed to it. Any failure is fatal for the whole run — a remote created
/// before a later failure is left as-is, with no compensating cleanup.
pub fn execute<R, G, B>(
    request: &BootstrapRequest,
    parent: &Path,
    remote: &R,
    git: &G,
    banner: &B,
) -> Result<RepositoryHandle, AppError>
where
    R: RemoteRepositoryPort,
    G: GitPort,
    B: BannerPort,
{
    let handle = remote.create_private_repository(&request.name)?;
    workspace::publish(request, &handle, parent, git, banner)?;
    Ok(handle)
}
