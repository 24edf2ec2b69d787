use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::GitPort;

/// Git adapter invoking the `git` binary with structured argument lists.
///
/// Every invocation is scoped to the workspace root via `current_dir`; no
/// process-global directory change and no shell string interpolation.
#[derive(Debug, Clone, Default)]
pub struct GitCommandAdapter {
    verbose: bool,
}

impl GitCommandAdapter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn run(&self, root: &Path, args: &[&str]) -> Result<String, AppError> {
        let command_line = format!("git {}", args.join(" "));
        if self.verbose {
            println!("→ {command_line}");
        }

        let output = Command::new("git").args(args).current_dir(root).output().map_err(|e| {
            AppError::GitError { command: command_line.clone(), details: e.to_string() }
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let combined = format!("{stdout}{stderr}").trim().to_string();

        if self.verbose && !combined.is_empty() {
            println!("{combined}");
        }

        if !output.status.success() {
            return Err(AppError::GitError {
                command: command_line,
                details: if combined.is_empty() { "Unknown error".to_string() } else { combined },
            });
        }

        Ok(combined)
    }
}

impl GitPort for GitCommandAdapter {
    fn init(&self, root: &Path) -> Result<(), AppError> {
        self.run(root, &["init"])?;
        Ok(())
    }

    fn set_identity(&self, root: &Path, email: &str, name: &str) -> Result<(), AppError> {
        self.run(root, &["config", "user.email", email])?;
        self.run(root, &["config", "user.name", name])?;
        Ok(())
    }

    fn pull(&self, root: &Path, url: &str) -> Result<(), AppError> {
        self.run(root, &["pull", url])?;
        Ok(())
    }

    fn add_remote(&self, root: &Path, name: &str, url: &str) -> Result<(), AppError> {
        self.run(root, &["remote", "add", name, url])?;
        Ok(())
    }

    fn stage_all(&self, root: &Path) -> Result<(), AppError> {
        self.run(root, &["add", "."])?;
        Ok(())
    }

    fn commit(&self, root: &Path, message: &str) -> Result<(), AppError> {
        self.run(root, &["commit", "-S", "-m", message])?;
        Ok(())
    }

    fn rename_branch(&self, root: &Path, branch: &str) -> Result<(), AppError> {
        self.run(root, &["branch", "-M", branch])?;
        Ok(())
    }

    fn push_upstream(&self, root: &Path, remote: &str, branch: &str) -> Result<(), AppError> {
        self.run(root, &["push", "-u", remote, branch])?;
        Ok(())
    }
}
