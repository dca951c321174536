use simple_result::convert::{first_error, outcome_from_result, untyped};
use simple_result::{Error, Errors, Outcome, TypedOutcome};

use crate::common::{assert_failed_sharing, assert_success};

#[test]
fn results_become_typed_outcomes() {
    let ok: TypedOutcome<u8> = outcome_from_result(Ok::<u8, &str>(1));
    assert_eq!(ok, TypedOutcome::ok(1));

    let err: TypedOutcome<u8> = Err::<u8, String>("bad".into()).into();
    assert_eq!(err.errors(), [Error::new("bad")]);
}

#[test]
fn unit_results_become_untyped_outcomes() {
    assert_eq!(Outcome::from(Ok::<(), &str>(())), Outcome::ok());
    assert_eq!(Outcome::from(Err::<(), &str>("bad")), Outcome::fail("bad"));
}

#[test]
fn dropping_the_type_shares_the_failure() {
    let failed = TypedOutcome::<String>::fail("boom");
    let errors = failed.failure().cloned().unwrap();

    let untyped_failure: Outcome = failed.into();
    assert_failed_sharing(&untyped_failure, &errors);

    assert_success(&untyped(TypedOutcome::ok(1)));
}

#[test]
fn outcomes_work_with_the_question_mark_operator() {
    fn total(a: TypedOutcome<u32>, b: TypedOutcome<u32>) -> Result<u32, Errors> {
        Ok(a.into_result()? + b.into_result()?)
    }

    assert_eq!(total(TypedOutcome::ok(1), TypedOutcome::ok(2)), Ok(3));

    let err = total(TypedOutcome::ok(1), TypedOutcome::fail("missing")).unwrap_err();
    assert_eq!(err.first().message(), "missing");

    let as_result: Result<(), Errors> = Outcome::fail("x").into();
    assert!(as_result.is_err());
}

#[test]
fn first_error_keeps_the_head_of_the_sequence() {
    let failed = TypedOutcome::<u8>::fail_many(["first", "second"]);
    assert_eq!(first_error(failed), Err(Error::new("first")));

    assert_eq!(first_error(TypedOutcome::ok(3)), Ok(3));
}
