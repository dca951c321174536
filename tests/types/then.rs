use std::sync::Arc;

use simple_result::{Error, Errors, Outcome, TypedOutcome};

use crate::common::{
    assert_failed_sharing, assert_failed_with, assert_success, assert_success_value_ptr,
};

fn text(s: &str) -> Arc<str> {
    Arc::from(s)
}

fn errors_of<R: simple_result::traits::Rail>(outcome: &R) -> Errors {
    outcome.failure().cloned().expect("outcome should be failed")
}

#[test]
fn then_map_on_success_wraps_the_returned_value() {
    let value = text("Hello there!");

    let next = Outcome::ok().then_map(|| Arc::clone(&value));

    assert_success_value_ptr(&next, &value);
}

#[test]
fn then_map_on_failure_skips_the_continuation() {
    let error = Error::new("Deadlock");
    let failed = Outcome::fail(error.clone());
    let errors = errors_of(&failed);

    let mut calls = 0;
    let next = failed.then_map(|| {
        calls += 1;
        text("Hello there!")
    });

    assert_eq!(calls, 0);
    assert_failed_with(&next, &[error]);
    assert_failed_sharing(&next, &errors);
}

#[test]
fn then_on_success_returns_the_continuation_outcome() {
    let inner_success = Outcome::ok();
    let inner_failure = Outcome::fail("Situation is terrible!");
    let inner_errors = errors_of(&inner_failure);

    let success = Outcome::ok().then(|| inner_success.clone());
    let failure = Outcome::ok().then(|| inner_failure.clone());

    assert_eq!(success, inner_success);
    assert_eq!(failure, inner_failure);
    assert_failed_sharing(&failure, &inner_errors);
}

#[test]
fn then_on_failure_returns_the_source_outcome() {
    let source = Outcome::fail("Bad");
    let source_errors = errors_of(&source);

    let mut calls = 0;
    let after_success = source.clone().then(|| {
        calls += 1;
        Outcome::ok()
    });
    let after_failure = source.clone().then(|| {
        calls += 1;
        Outcome::fail("Situation is terrible!")
    });

    assert_eq!(calls, 0);
    assert_eq!(after_success, source);
    assert_eq!(after_failure, source);
    assert_failed_sharing(&after_success, &source_errors);
    assert_failed_sharing(&after_failure, &source_errors);
}

#[test]
fn then_on_success_returns_the_typed_continuation_outcome() {
    let value = text("Hello there!");
    let error = Error::new("Not functional?!");
    let expected_success = TypedOutcome::ok(Arc::clone(&value));
    let expected_failure = TypedOutcome::<Arc<str>>::fail(error.clone());
    let failure_errors = errors_of(&expected_failure);

    let success = Outcome::ok().then(|| expected_success.clone());
    let failure = Outcome::ok().then(|| expected_failure.clone());

    assert_success_value_ptr(&success, &value);
    assert_eq!(success, expected_success);
    assert_failed_with(&failure, &[error]);
    assert_failed_sharing(&failure, &failure_errors);
}

#[test]
fn then_on_failure_forwards_errors_into_the_typed_result() {
    let error = Error::new("Deadlock");
    let source = Outcome::fail(error.clone());
    let source_errors = errors_of(&source);

    let mut calls = 0;
    let success: TypedOutcome<Arc<str>> = source.clone().then(|| {
        calls += 1;
        TypedOutcome::ok(text("Hello there!"))
    });
    let failure: TypedOutcome<Arc<str>> = source.then(|| {
        calls += 1;
        TypedOutcome::fail("Not functional?!")
    });

    assert_eq!(calls, 0);
    assert_failed_with(&success, &[error.clone()]);
    assert_failed_with(&failure, &[error]);
    assert_failed_sharing(&success, &source_errors);
    assert_failed_sharing(&failure, &source_errors);
}

#[test]
fn typed_then_map_passes_the_stored_value() {
    let value = text("Good time need good result");
    let source = TypedOutcome::ok(Arc::clone(&value));

    let mut seen = None;
    let next = source.then_map(|x| {
        seen = Some(x);
        "Hello there!"
    });

    assert_eq!(next.into_value(), Some("Hello there!"));
    let seen = seen.expect("continuation should run");
    assert!(Arc::ptr_eq(&seen, &value));
}

#[test]
fn typed_then_map_on_failure_skips_the_continuation() {
    let error = Error::new("Deadlocker");
    let source = TypedOutcome::<Arc<str>>::fail(error.clone());

    let mut seen = None;
    let next = source.then_map(|x| {
        seen = Some(x);
        "Hello there!"
    });

    assert_failed_with(&next, &[error]);
    assert!(seen.is_none());
}

#[test]
fn typed_then_returning_untyped_outcome_is_verbatim() {
    let value = text("Good time need good result");
    let source = TypedOutcome::ok(Arc::clone(&value));
    let error = Error::new("Not functional?!");
    let expected_success = Outcome::ok();
    let expected_failure = Outcome::fail(error.clone());
    let failure_errors = errors_of(&expected_failure);

    let mut seen = Vec::new();
    let success = source.clone().then(|x| {
        seen.push(x);
        expected_success.clone()
    });
    let failure = source.then(|x| {
        seen.push(x);
        expected_failure.clone()
    });

    assert_success(&success);
    assert_eq!(success, expected_success);
    assert_failed_with(&failure, &[error]);
    assert_failed_sharing(&failure, &failure_errors);
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|x| Arc::ptr_eq(x, &value)));
}

#[test]
fn typed_then_returning_untyped_outcome_on_failure_skips_the_continuation() {
    let error = Error::new("Deadlock");
    let source = TypedOutcome::<Arc<str>>::fail(error.clone());

    let mut seen = Vec::new();
    let success = source.clone().then(|x| {
        seen.push(x);
        Outcome::ok()
    });
    let failure = source.then(|x| {
        seen.push(x);
        Outcome::fail("Not functional?!")
    });

    assert_failed_with(&success, &[error.clone()]);
    assert_failed_with(&failure, &[error]);
    assert!(seen.is_empty());
}

#[test]
fn typed_then_returning_typed_outcome_is_verbatim() {
    let value = text("Good time need good result");
    let source = TypedOutcome::ok(Arc::clone(&value));
    let inner_value = text("Hello there!");
    let error = Error::new("Not functional?!");
    let expected_success = TypedOutcome::ok(Arc::clone(&inner_value));
    let expected_failure = TypedOutcome::<Arc<str>>::fail(error.clone());

    let mut seen = Vec::new();
    let success = source.clone().then(|x| {
        seen.push(x);
        expected_success.clone()
    });
    let failure = source.then(|x| {
        seen.push(x);
        expected_failure.clone()
    });

    assert_success_value_ptr(&success, &inner_value);
    assert_eq!(success, expected_success);
    assert_failed_with(&failure, &[error]);
    assert_eq!(failure, expected_failure);
    assert!(seen.iter().all(|x| Arc::ptr_eq(x, &value)));
}

#[test]
fn typed_then_returning_typed_outcome_on_failure_skips_the_continuation() {
    let error = Error::new("Deadlock");
    let source = TypedOutcome::<Arc<str>>::fail(error.clone());
    let source_errors = errors_of(&source);

    let mut seen = Vec::new();
    let success = source.clone().then(|x| {
        seen.push(x);
        TypedOutcome::ok(text("Hello there!"))
    });
    let failure: TypedOutcome<Arc<str>> = source.then(|x| {
        seen.push(x);
        TypedOutcome::fail("Not functional?!")
    });

    assert_failed_with(&success, &[error.clone()]);
    assert_failed_with(&failure, &[error]);
    assert_failed_sharing(&failure, &source_errors);
    assert!(seen.is_empty());
}

#[test]
fn chain_links_compose_left_to_right() {
    let shouted = TypedOutcome::ok(String::from("a"))
        .then(|s| TypedOutcome::ok(s + "!"))
        .then(|s| TypedOutcome::ok(s + "?"));

    assert_eq!(shouted, TypedOutcome::ok(String::from("a!?")));
}

#[test]
fn failure_in_the_middle_short_circuits_the_rest() {
    let mut reached = Vec::new();

    let result = Outcome::ok()
        .then(|| {
            reached.push(1);
            TypedOutcome::ok(10)
        })
        .then(|_| -> TypedOutcome<i32> {
            reached.push(2);
            TypedOutcome::fail("step two failed")
        })
        .then_map(|n| {
            reached.push(3);
            n * 2
        })
        .then(|_| {
            reached.push(4);
            Outcome::ok()
        });

    assert_eq!(reached, [1, 2]);
    assert_eq!(result.errors()[0].message(), "step two failed");
}

#[test]
#[should_panic(expected = "continuation exploded")]
fn panics_inside_a_continuation_propagate() {
    let _ = Outcome::ok().then_map::<u8, _>(|| panic!("continuation exploded"));
}
