mod console_prompt;
mod git_command;
mod github_api;
mod replicate_api;

pub use console_prompt::ConsoleNameDecider;
pub use git_command::GitCommandAdapter;
pub use github_api::{GitHubApiConfig, HttpGitHubClient};
pub use replicate_api::{HttpReplicateClient, ReplicateApiConfig};
