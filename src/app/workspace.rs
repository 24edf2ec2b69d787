//! Local workspace builder: turns an empty directory into a published repository.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::EffectiveConfig;
use crate::domain::{AppError, BootstrapRequest, readme};
use crate::ports::{BannerPort, BannerRequest, GitPort, RepositoryHandle};

/// Branch the initial commit is published on.
pub const DEFAULT_BRANCH: &str = "main";
/// Message for the initial commit.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Materialize, seed, and publish the local workspace for `request`.
///
/// Steps run in strict order, each a precondition for the next: init,
/// identity config, template pull, banner, README rewrite, remote
/// registration, stage, commit, branch rename, push. A failing step aborts
/// the rest; earlier steps are not rolled back and the directory is left on
/// disk for inspection.
pub fn publish<G: GitPort, B: BannerPort>(
    request: &BootstrapRequest,
    handle: &RepositoryHandle,
    parent: &Path,
    git: &G,
    banner: &B,
) -> Result<PathBuf, AppError> {
    let root = parent.join(&request.name);
    let config = &request.config;

    trace(config, "Initializing local repository");
    fs::create_dir_all(&root)?;
    git.init(&root)?;
    git.set_identity(&root, &config.git_email, &config.git_name)?;

    trace(config, "Pulling template contents");
    git.pull(&root, &request.template_url())?;

    trace(config, "Generating banner");
    write_banner(request, &root, banner)?;
    rewrite_readme(&root, &request.name)?;

    trace(config, "Publishing");
    git.add_remote(&root, "origin", &handle.ssh_url)?;
    git.stage_all(&root)?;
    git.commit(&root, INITIAL_COMMIT_MESSAGE)?;
    git.rename_branch(&root, DEFAULT_BRANCH)?;
    git.push_upstream(&root, "origin", DEFAULT_BRANCH)?;

    Ok(root)
}

fn write_banner<B: BannerPort>(
    request: &BootstrapRequest,
    root: &Path,
    banner: &B,
) -> Result<(), AppError> {
    let banner_request = BannerRequest::for_repository(&request.name);
    let url = banner.generate(&banner_request)?;
    let bytes = banner.fetch(&url)?;

    let asset_path = root.join(readme::BANNER_ASSET_PATH);
    if let Some(dir) = asset_path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(asset_path, bytes)?;
    Ok(())
}

/// Inject the banner block into README.md; an absent README is a no-op.
fn rewrite_readme(root: &Path, name: &str) -> Result<(), AppError> {
    let path = root.join("README.md");
    if !path.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(&path)?;
    fs::write(&path, readme::inject_banner(&content, name))?;
    Ok(())
}

fn trace(config: &EffectiveConfig, message: &str) {
    if config.verbose {
        println!("→ {message}");
    }
}
