use std::io;

use thiserror::Error;

/// Library-wide error type for sprout operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required configuration keys absent from both file and CLI.
    #[error("Missing required configuration: {}", .0.join(", "))]
    MissingConfig(Vec<String>),

    /// Config file could not be parsed.
    #[error("Config file parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Remote repository creation failed (auth, name collision, network).
    #[error("Repository creation failed: {0}")]
    RemoteCreation(String),

    /// Git execution failed; carries the captured combined output.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// Banner image generation failed.
    #[error("Banner generation failed: {0}")]
    Generation(String),

    /// Banner image download failed.
    #[error("Banner download failed: {0}")]
    Download(String),

    /// User quit during interactive naming.
    #[error("Aborted by user")]
    Aborted,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
