//! Repository name resolution: explicit or interactively confirmed.

use crate::domain::{AppError, naming};
use crate::ports::{NameDecider, NameDecision};

/// Resolve the repository name for a bootstrap run.
///
/// An explicit name wins without consulting the decider. Otherwise candidates
/// are proposed one at a time until the decider accepts one or quits; the
/// loop is unbounded and terminates only on user input.
pub fn choose_name<D: NameDecider>(
    explicit: Option<&str>,
    decider: &D,
) -> Result<String, AppError> {
    if let Some(name) = explicit {
        return Ok(name.to_string());
    }

    loop {
        let candidate = naming::candidate();
        match decider.decide(&candidate)? {
            NameDecision::Accept => return Ok(candidate),
            NameDecision::Reject => continue,
            NameDecision::Quit => return Err(AppError::Aborted),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    struct ScriptedDecider {
        script: RefCell<VecDeque<NameDecision>>,
        proposed: RefCell<Vec<String>>,
    }

    impl ScriptedDecider {
        fn new(script: &[NameDecision]) -> Self {
            Self {
                script: RefCell::new(script.iter().copied().collect()),
                proposed: RefCell::new(Vec::new()),
            }
        }
    }

    impl NameDecider for ScriptedDecider {
        fn decide(&self, candidate: &str) -> Result<NameDecision, AppError> {
            self.proposed.borrow_mut().push(candidate.to_string());
            Ok(self.script.borrow_mut().pop_front().expect("script exhausted"))
        }
    }

    #[test]
    fn explicit_name_skips_the_decider() {
        let decider = ScriptedDecider::new(&[]);
        let name = choose_name(Some("demo-repo"), &decider).unwrap();
        assert_eq!(name, "demo-repo");
        assert!(decider.proposed.borrow().is_empty());
    }

    #[test]
    fn reject_redraws_until_accept() {
        let decider =
            ScriptedDecider::new(&[NameDecision::Reject, NameDecision::Reject, NameDecision::Accept]);

        let name = choose_name(None, &decider).unwrap();
        let proposed = decider.proposed.borrow();
        assert_eq!(proposed.len(), 3);
        assert_eq!(name, proposed[2]);
    }

    #[test]
    fn quit_aborts_immediately() {
        let decider = ScriptedDecider::new(&[NameDecision::Quit]);

        let result = choose_name(None, &decider);
        assert!(matches!(result, Err(AppError::Aborted)));
        assert_eq!(decider.proposed.borrow().len(), 1);
    }
}
