use stack_icon::config::Options;
use stack_icon::ui::mvi::Reducer;
use stack_icon::ui::quantity::{QuantityIntent, QuantityReducer, QuantityState};

fn state(min: i64, max: i64) -> QuantityState {
    QuantityState::new(Options::from_values(min, min, max).options)
}

#[test]
fn increment_moves_up_and_records_previous() {
    let new = QuantityReducer::reduce(state(1, 99), QuantityIntent::Increment);
    assert_eq!(new.current(), 2);
    assert_eq!(new.previous(), 1);
}

#[test]
fn decrement_at_min_is_noop() {
    let before = state(1, 99);
    let after = QuantityReducer::reduce(before, QuantityIntent::Decrement);
    assert_eq!(after, before);
    assert!(after.change_since(&before).is_none());
}

#[test]
fn increment_at_max_is_noop() {
    let at_max = QuantityReducer::reduce(state(1, 3), QuantityIntent::Set { value: 3 });
    let after = QuantityReducer::reduce(at_max, QuantityIntent::Increment);
    assert_eq!(after.current(), 3);
    assert!(after.change_since(&at_max).is_none());
}

#[test]
fn zero_max_is_unbounded() {
    let mut current = state(1, 0);
    for _ in 0..500 {
        current = QuantityReducer::reduce(current, QuantityIntent::Increment);
    }
    assert_eq!(current.current(), 501);
}

#[test]
fn set_outside_bounds_is_rejected() {
    let before = state(2, 10);
    for value in [1, 11, 0, -4] {
        let after = QuantityReducer::reduce(before, QuantityIntent::Set { value });
        assert_eq!(after, before, "value {value} should be rejected");
    }
}

#[test]
fn set_to_current_emits_no_change() {
    let before = state(1, 99);
    let after = QuantityReducer::reduce(before, QuantityIntent::Set { value: 1 });
    assert!(after.change_since(&before).is_none());
}

#[test]
fn set_reports_jump() {
    let before = state(1, 99);
    let after = QuantityReducer::reduce(before, QuantityIntent::Set { value: 7 });
    let change = after.change_since(&before).unwrap();
    assert_eq!((change.previous, change.current), (1, 7));
}
