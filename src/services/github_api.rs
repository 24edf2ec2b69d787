//! GitHub API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::domain::AppError;
use crate::ports::{RemoteRepositoryPort, RepositoryHandle};

/// GitHub API endpoint configuration.
#[derive(Debug, Clone)]
pub struct GitHubApiConfig {
    /// API base URL.
    pub api_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GitHubApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: 30 }
    }
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

/// HTTP client for repository creation against the GitHub REST API.
#[derive(Clone)]
pub struct HttpGitHubClient {
    token: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGitHubClient")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpGitHubClient {
    /// Create a new client authenticated by a bearer token.
    pub fn new(token: String, config: &GitHubApiConfig) -> Result<Self, AppError> {
        let api_url = Url::parse(&config.api_url)
            .map_err(|e| AppError::Configuration(format!("Invalid GitHub API URL: {}", e)))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { token, api_url, client })
    }
}

#[derive(Debug, Deserialize)]
struct RepoResponse {
    html_url: String,
    ssh_url: String,
}

impl RemoteRepositoryPort for HttpGitHubClient {
    fn create_private_repository(&self, name: &str) -> Result<RepositoryHandle, AppError> {
        let endpoint = self
            .api_url
            .join("user/repos")
            .map_err(|e| AppError::Configuration(format!("Invalid GitHub API URL: {}", e)))?;

        let response = self
            .client
            .post(endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(USER_AGENT, "sprout")
            .header(ACCEPT, "application/vnd.github+json")
            .json(&json!({ "name": name, "private": true, "auto_init": false }))
            .send()
            .map_err(|e| AppError::RemoteCreation(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::RemoteCreation(format!(
                "API error ({}): {}",
                status.as_u16(),
                body.trim()
            )));
        }

        let repo: RepoResponse = response
            .json()
            .map_err(|e| AppError::RemoteCreation(format!("Failed to parse response: {}", e)))?;

        Ok(RepositoryHandle { html_url: repo.html_url, ssh_url: repo.ssh_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::Server) -> HttpGitHubClient {
        let config = GitHubApiConfig { api_url: server.url(), timeout_secs: 1 };
        HttpGitHubClient::new("fake-token".to_string(), &config).unwrap()
    }

    #[test]
    fn create_repository_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/user/repos")
            .match_header("authorization", "Bearer fake-token")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"html_url": "https://github.com/me/demo-repo",
                    "ssh_url": "git@github.com:me/demo-repo.git"}"#,
            )
            .expect(1)
            .create();

        let handle = client_for(&server).create_private_repository("demo-repo").unwrap();
        assert_eq!(handle.html_url, "https://github.com/me/demo-repo");
        assert_eq!(handle.ssh_url, "git@github.com:me/demo-repo.git");
        mock.assert();
    }

    #[test]
    fn auth_failure_is_fatal_without_retry() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/user/repos")
            .with_status(401)
            .with_body("Bad credentials")
            .expect(1)
            .create();

        let result = client_for(&server).create_private_repository("demo-repo");
        match result {
            Err(AppError::RemoteCreation(message)) => {
                assert!(message.contains("401"), "message: {message}");
            }
            other => panic!("expected RemoteCreation, got {other:?}"),
        }
        mock.assert();
    }

    #[test]
    fn name_collision_is_fatal() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/user/repos")
            .with_status(422)
            .with_body(r#"{"message": "name already exists on this account"}"#)
            .create();

        let result = client_for(&server).create_private_repository("demo-repo");
        assert!(matches!(result, Err(AppError::RemoteCreation(_))));
    }
}
