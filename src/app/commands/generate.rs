//! Batch name generation for `--generate`.

use crate::domain::naming;

/// Number of candidate names printed per invocation.
pub const CANDIDATE_COUNT: usize = 5;

/// Produce the candidate names for display. No other side effect.
pub fn candidates() -> Vec<String> {
    naming::candidates(CANDIDATE_COUNT)
}
