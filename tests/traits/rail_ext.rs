use chain_rail::traits::RailExt;
use chain_rail::Failure;

use crate::support::{error_operation, observe, partial_operation, Outcome, Spy};

#[test]
fn bind_and_then_in_method_position() {
    let result = Ok(20)
        .bind(|v| partial_operation(v, 1))
        .then(observe)
        .bind(|v| partial_operation(v, 1));

    assert_eq!(result, Ok(22));
}

#[test]
fn method_chain_stops_at_first_error() {
    let spy = Spy::new();

    let result = Ok(1)
        .bind(error_operation)
        .then(|v| spy.notify(v))
        .bind(|v| spy.add(v, 1));

    assert_eq!(result, Err(Failure::Detailed("error_operation always fails")));
    assert_eq!(spy.calls(), 0);
}

#[test]
fn into_rail_tracks_steps() {
    let outcome: Outcome = Ok(1);
    let rail = outcome.into_rail().bind(|v| partial_operation(v, 1)).then(observe);

    assert_eq!(rail.steps(), 2);
    assert_eq!(rail.finish(), Ok(2));
}
