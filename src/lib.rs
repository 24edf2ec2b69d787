//! sprout: bootstrap new GitHub repositories from a template, with generated
//! names and AI banner art.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::commands::{bootstrap, generate, naming};
use domain::BootstrapRequest;
use domain::config::{self, FileConfig};
use services::{
    ConsoleNameDecider, GitCommandAdapter, GitHubApiConfig, HttpGitHubClient, HttpReplicateClient,
    ReplicateApiConfig,
};

pub use domain::AppError;
pub use domain::config::CliOverrides;
pub use ports::RepositoryHandle;

/// Generate candidate repository names for display.
pub fn generate_names() -> Vec<String> {
    generate::candidates()
}

/// Run the full bootstrap sequence: resolve config, pick a name, create the
/// remote repository, seed the local workspace, and push.
///
/// Returns the handle of the published repository. Every failure propagates
/// to the caller; nothing already created is rolled back.
pub fn bootstrap(overrides: CliOverrides) -> Result<RepositoryHandle, AppError> {
    let file = FileConfig::load_default()?;
    let config = config::resolve(file, &overrides)?;

    let name = naming::choose_name(overrides.name.as_deref(), &ConsoleNameDecider::new())?;

    let remote = HttpGitHubClient::new(config.github_token.clone(), &GitHubApiConfig::default())?;
    let banner =
        HttpReplicateClient::new(config.replicate_token.clone(), &ReplicateApiConfig::default())?;
    let git = GitCommandAdapter::new(config.verbose);
    let parent = std::env::current_dir()?;

    let request = BootstrapRequest::new(name, config);
    let handle = bootstrap::execute(&request, &parent, &remote, &git, &banner)?;
    println!("✅ Bootstrapped {}", handle.html_url);
    Ok(handle)
}
