use poketeam::error::TeamValidationError;
use pretty_assertions::assert_eq;

/// [`assert`]s that validation failed with exactly the given problems, in order.
#[track_caller]
pub fn assert_validation_problems(result: Result<(), TeamValidationError>, expected: &[&str]) {
    match result {
        Ok(()) => panic!("expected validation to fail with {expected:?}"),
        Err(err) => assert_eq!(err.problems().collect::<Vec<_>>(), expected),
    }
}
