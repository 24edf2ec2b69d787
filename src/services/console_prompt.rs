//! Interactive name confirmation via dialoguer.

use dialoguer::Select;

use crate::domain::AppError;
use crate::ports::{NameDecider, NameDecision};

const CHOICES: [(&str, NameDecision); 3] = [
    ("Use this name", NameDecision::Accept),
    ("Try another", NameDecision::Reject),
    ("Quit", NameDecision::Quit),
];

/// Console decider presenting one candidate at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNameDecider;

impl ConsoleNameDecider {
    pub fn new() -> Self {
        Self
    }
}

impl NameDecider for ConsoleNameDecider {
    fn decide(&self, candidate: &str) -> Result<NameDecision, AppError> {
        let items: Vec<&str> = CHOICES.iter().map(|(label, _)| *label).collect();

        let selection = Select::new()
            .with_prompt(format!("Repository name: {candidate}"))
            .items(&items)
            .default(0)
            .interact()
            .map_err(|e| AppError::config_error(format!("Name selection failed: {e}")))?;

        Ok(CHOICES[selection].1)
    }
}
