use crate::domain::config::EffectiveConfig;

/// Immutable description of one bootstrap run: the repository name plus the
/// resolved configuration it was invoked with.
#[derive(Debug, Clone)]
pub struct BootstrapRequest {
    pub name: String,
    pub config: EffectiveConfig,
}

impl BootstrapRequest {
    pub fn new(name: String, config: EffectiveConfig) -> Self {
        Self { name, config }
    }

    /// SSH URL of the template repository whose tree seeds the workspace.
    pub fn template_url(&self) -> String {
        format!("git@github.com:{}.git", self.config.template_repo)
    }
}
