use crate::domain::AppError;

/// Outcome of presenting one candidate name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameDecision {
    Accept,
    Reject,
    Quit,
}

pub trait NameDecider {
    /// Present a candidate and return the user's decision.
    fn decide(&self, candidate: &str) -> Result<NameDecision, AppError>;
}
