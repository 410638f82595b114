use chain_rail::{Failure, Rail};

use crate::support::{error_operation, observe, partial_operation, Outcome, Spy};

#[test]
fn rail_mirrors_chain_semantics() {
    let rail = Rail::ok(20)
        .bind(|v| partial_operation(v, 1))
        .then(observe)
        .bind(|v| partial_operation(v, 1));

    assert_eq!(rail.steps(), 3);
    assert_eq!(rail.halted_at(), None);
    assert_eq!(rail.finish(), Ok(22));
}

#[test]
fn rail_records_halting_step_and_skips_rest() {
    let spy = Spy::new();

    let rail = Rail::ok(1)
        .bind(|v| partial_operation(v, 1))
        .bind(error_operation)
        .then(|v| spy.notify(v))
        .bind(|v| spy.add(v, 1));

    assert_eq!(spy.calls(), 0);
    assert_eq!(rail.steps(), 4);
    assert_eq!(rail.halted_at(), Some(2));
    assert!(rail.is_error());
    assert_eq!(rail.finish(), Err(Failure::Detailed("error_operation always fails")));
}

#[test]
fn rail_created_from_error_halts_at_zero() {
    let rail: Rail<i32, Failure> = Rail::err(Failure::Generic);

    assert_eq!(rail.halted_at(), Some(0));
    assert_eq!(rail.steps(), 0);
}

#[test]
fn rail_map_counts_as_step() {
    let rail = Rail::<i32, Failure>::ok(2).map(|v| v * 10).map(|v| v.to_string());

    assert_eq!(rail.steps(), 2);
    assert_eq!(rail.finish().as_deref(), Ok("20"));
}

#[test]
fn rail_map_err_keeps_bookkeeping() {
    let rail = Rail::ok(1).bind(error_operation).map_err(|e| e.into_detail().unwrap_or_default());

    assert_eq!(rail.halted_at(), Some(1));
    assert_eq!(rail.as_result(), &Err("error_operation always fails"));
}

#[test]
fn rail_recover_clears_halt() {
    let rail = Rail::ok(1)
        .bind(error_operation)
        .recover(|_| Ok(10))
        .bind(|v| partial_operation(v, 1));

    assert_eq!(rail.halted_at(), None);
    assert_eq!(rail.finish(), Ok(11));
}

#[test]
fn rail_failed_recovery_keeps_halt() {
    let rail = Rail::ok(1)
        .bind(|v| partial_operation(v, 1))
        .bind(error_operation)
        .recover(|_| Err(Failure::Detailed("still failing")));

    assert_eq!(rail.halted_at(), Some(2));
    assert_eq!(rail.finish(), Err(Failure::Detailed("still failing")));
}

#[test]
fn rail_fallback_only_applies_to_errors() {
    let ok: Outcome = Rail::ok(5).fallback(0).finish();
    let recovered: Outcome = Rail::err(Failure::Generic).fallback(0).finish();

    assert_eq!(ok, Ok(5));
    assert_eq!(recovered, Ok(0));
}

#[test]
fn rail_converts_to_and_from_result() {
    let outcome: Outcome = Ok(3);
    let rail: Rail<_, _> = outcome.into();
    let back: Outcome = rail.bind(|v| partial_operation(v, 1)).into();

    assert_eq!(back, Ok(4));
}
