//! Reducer for the quantity controller.

use crate::ui::mvi::Reducer;

use super::intent::QuantityIntent;
use super::state::QuantityState;

/// Reducer for bounded counter transitions.
///
/// Pure function. Emitting the change event and scheduling animations is
/// done by the caller after comparing the old and new state.
pub struct QuantityReducer;

impl Reducer for QuantityReducer {
    type State = QuantityState;
    type Intent = QuantityIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let candidate = match intent {
            QuantityIntent::Increment => state.current().checked_add(1),
            QuantityIntent::Decrement => state.current().checked_sub(1),
            QuantityIntent::Set { value } => Some(value),
        };

        match candidate {
            Some(value) => state.accept(value),
            None => state,
        }
    }
}
