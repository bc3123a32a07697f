use promissum::{Failure, Outcome, Task};

fn sample_failure() -> Failure {
    Task::<i32>::failed("oops").wait().unwrap_err().into_failure()
}

#[test]
fn test_success_arm() {
    let outcome = Outcome::Success(5);
    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
    assert_eq!(outcome.clone().success(), Some(5));
    assert!(outcome.clone().failure().is_none());
    assert_eq!(outcome.into_result().unwrap(), 5);
}

#[test]
fn test_failure_arm() {
    let outcome: Outcome<i32> = Outcome::Failure(sample_failure());
    assert!(outcome.is_failure());
    assert!(outcome.clone().success().is_none());

    let failure = outcome.into_result().unwrap_err();
    assert_eq!(failure.cause().to_string(), "oops");
}

#[test]
fn test_outcome_from_result() {
    let outcome = Outcome::from(Ok::<_, Failure>(9));
    assert!(outcome.is_success());

    let outcome: Outcome<i32> = Outcome::from(Err(sample_failure()));
    assert!(outcome.is_failure());
}

#[test]
fn test_cloned_outcome_shares_the_failure() {
    let outcome: Outcome<i32> = Outcome::Failure(sample_failure());
    let copy = outcome.clone();

    let original = outcome.into_result().unwrap_err();
    let cloned = copy.into_result().unwrap_err();
    assert_eq!(original.cause().to_string(), cloned.cause().to_string());
    assert_eq!(
        original.context().location().line(),
        cloned.context().location().line()
    );
}

#[test]
fn test_peek_yields_the_stored_outcome() {
    let task = Task::resolved("done");
    let outcome = task.peek().expect("pre-resolved task has an outcome");
    assert_eq!(outcome.success(), Some("done"));
}
