//! Effective configuration: the persisted config file merged with CLI overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// Well-known config file name under `$HOME`.
pub const CONFIG_FILE_NAME: &str = ".sprout.yml";

/// Persisted configuration read from `$HOME/.sprout.yml`.
///
/// Every field is optional here; completeness is only enforced by `resolve`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub github_token: Option<String>,
    pub github_username: Option<String>,
    pub bot_git_email: Option<String>,
    pub bot_git_name: Option<String>,
    pub replicate_token: Option<String>,
    pub template_repo: Option<String>,
}

impl FileConfig {
    /// Read the config file at `path`. A missing file is an empty base config,
    /// not an error.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(FileConfig::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Read the config file from its well-known location under `$HOME`.
    pub fn load_default() -> Result<Self, AppError> {
        Self::load(&default_path()?)
    }
}

/// Resolve the well-known config file path.
pub fn default_path() -> Result<PathBuf, AppError> {
    let home = std::env::var("HOME")
        .map_err(|_| AppError::config_error("HOME environment variable not set"))?;
    Ok(PathBuf::from(home).join(CONFIG_FILE_NAME))
}

/// Command-line overrides, one field per flag. Overrides win field-by-field.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub name: Option<String>,
    pub template: Option<String>,
    pub github_token: Option<String>,
    pub github_username: Option<String>,
    pub git_email: Option<String>,
    pub git_name: Option<String>,
    pub replicate_token: Option<String>,
    pub verbose: bool,
}

/// Fully-resolved configuration; every field is non-empty once `resolve` succeeds.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub github_token: String,
    pub github_username: String,
    pub git_email: String,
    pub git_name: String,
    pub replicate_token: String,
    pub template_repo: String,
    pub verbose: bool,
}

/// Merge the config file with CLI overrides.
///
/// Reports every missing required key in a single `MissingConfig` error so the
/// user sees all gaps at once, keyed by the config-file key names.
pub fn resolve(file: FileConfig, cli: &CliOverrides) -> Result<EffectiveConfig, AppError> {
    let mut missing = Vec::new();

    let config = EffectiveConfig {
        github_token: pick(&mut missing, "github_token", &cli.github_token, &file.github_token),
        github_username: pick(
            &mut missing,
            "github_username",
            &cli.github_username,
            &file.github_username,
        ),
        git_email: pick(&mut missing, "bot_git_email", &cli.git_email, &file.bot_git_email),
        git_name: pick(&mut missing, "bot_git_name", &cli.git_name, &file.bot_git_name),
        replicate_token: pick(
            &mut missing,
            "replicate_token",
            &cli.replicate_token,
            &file.replicate_token,
        ),
        template_repo: pick(&mut missing, "template_repo", &cli.template, &file.template_repo),
        verbose: cli.verbose,
    };

    if missing.is_empty() { Ok(config) } else { Err(AppError::MissingConfig(missing)) }
}

fn pick(
    missing: &mut Vec<String>,
    key: &str,
    over: &Option<String>,
    base: &Option<String>,
) -> String {
    match over.clone().or_else(|| base.clone()).filter(|value| !value.is_empty()) {
        Some(value) => value,
        None => {
            missing.push(key.to_string());
            String::new()
        }
    }
}
