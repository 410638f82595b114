use chain_rail::{chain, Failure};

use crate::support::{echo, error_operation, observe, partial_operation, Outcome, Spy};


#[test]
fn chain_threads_partial_application_argument() {
    assert_eq!(chain!(Ok(40) ~> partial_operation(2)), Ok(42));
}

#[test]
fn chain_short_circuits_on_first_error() {
    let spy = Spy::new();

    let result = chain!(Ok(1) ~> error_operation ~> spy.add(3) ~>> observe);

    assert_eq!(result, error_operation(1));
    assert_eq!(spy.calls(), 0);
}

#[test]
fn chain_side_effect_step_does_not_alter_value() {
    let result = chain!(Ok(20) ~> partial_operation(1) ~>> observe ~> partial_operation(1));

    assert_eq!(result, Ok(22));
}

#[test]
fn chain_side_effect_step_runs_exactly_once() {
    let spy = Spy::new();

    let result = chain!(Ok(5) ~>> spy.notify() ~> echo ~>> spy.notify());

    assert_eq!(result, Ok(5));
    assert_eq!(spy.calls(), 2);
}

#[test]
fn chain_evaluates_each_step_once_left_to_right() {
    let order = std::cell::RefCell::new(Vec::new());
    let record = |value: i32, name: &'static str| -> Outcome {
        order.borrow_mut().push(name);
        Ok(value + 1)
    };

    let result = chain!(Ok(0) ~> (record)("first") ~> (record)("second") ~> (record)("third"));

    assert_eq!(result, Ok(3));
    assert_eq!(*order.borrow(), ["first", "second", "third"]);
}

#[test]
fn chain_head_is_evaluated_once() {
    let spy = Spy::new();
    let head = || {
        spy.hit();
        Ok(1)
    };

    assert_eq!(chain!(head() ~> partial_operation(1) ~> partial_operation(1)), Ok(3));
    assert_eq!(spy.calls(), 1);
}

#[test]
fn chain_with_error_head_skips_every_step() {
    let spy = Spy::new();
    let head: Outcome = Err(Failure::Generic);

    assert_eq!(chain!(head ~> spy.add(1) ~>> spy.notify()), Err(Failure::Generic));
    assert_eq!(spy.calls(), 0);
}

#[test]
fn chain_without_connectors_is_unchanged() {
    let value: Outcome = Ok(7);

    assert_eq!(chain!(value), Ok(7));
    assert_eq!(chain!(partial_operation(1, 2)), Ok(3));
    assert_eq!(chain! { let base = 10; base * 2 }, 20);
}

#[test]
fn chain_block_keeps_statements_untouched() {
    let result = chain! {
        let base = 40;
        let k = 2;
        Ok(base) ~> partial_operation(k)
    };

    assert_eq!(result, Ok(42));
}

#[test]
fn chain_internal_parameter_does_not_collide_with_user_names() {
    let __chain_value = 100;
    let value = 1;

    let result = chain! {
        let __chain_value = __chain_value + 1;
        Ok(value) ~> partial_operation(__chain_value) ~> partial_operation(__chain_value)
    };

    assert_eq!(result, Ok(203));
    assert_eq!(__chain_value, 100);
}

#[test]
fn chain_closure_parameter_named_like_internal_one_is_independent() {
    let step = |__chain_value: i32, k: i32| partial_operation(__chain_value, k * 10);

    assert_eq!(chain!(Ok(2) ~> (step)(1) ~> (step)(2)), Ok(32));
}

#[test]
#[should_panic(expected = "step fault")]
fn chain_propagates_panicking_step() {
    let explode = |_: i32| -> Outcome { panic!("step fault") };
    let _ = chain!(Ok(1) ~> (explode) ~> partial_operation(1));
}

#[test]
fn chain_result_feeds_later_step_argument() {
    let offset = chain!(Ok(1) ~> partial_operation(1));

    let result = chain!(Ok(40) ~> partial_operation(offset.unwrap_or_default()));

    assert_eq!(result, Ok(42));
}

#[test]
fn chain_with_parenthesised_head_matches_flat_chain() {
    let nested = chain!((Ok(40) ~> partial_operation(1)) ~> partial_operation(1));
    let flat = chain!(Ok(40) ~> partial_operation(1) ~> partial_operation(1));

    assert_eq!(nested, Ok(42));
    assert_eq!(nested, flat);
}

#[test]
fn chain_with_doubly_parenthesised_head() {
    let result = chain!(((Ok(1) ~> partial_operation(1)) ~>> observe ~> echo) ~> partial_operation(1));

    assert_eq!(result, Ok(3));
}

#[test]
fn chain_skips_outer_steps_when_parenthesised_head_fails() {
    let spy = Spy::default();

    let result = chain!((Ok(1) ~> error_operation) ~> spy.add(1) ~>> spy.notify());

    assert_eq!(result, Err(Failure::Detailed("error_operation always fails")));
    assert_eq!(spy.calls(), 0);
}

#[test]
fn chain_keeps_detailed_error_unchanged() {
    let result = chain!(Ok(3) ~> partial_operation(1) ~> error_operation ~> partial_operation(3));

    assert_eq!(result, Err(Failure::Detailed("error_operation always fails")));
}

#[test]
fn chain_returns_result_usable_with_question_mark() {
    fn run(start: i32) -> Result<i32, Failure<&'static str>> {
        let value = chain!(Ok(start) ~> partial_operation(1))?;
        chain!(Ok(value) ~>> observe ~> partial_operation(1))
    }

    assert_eq!(run(1), Ok(3));
}
