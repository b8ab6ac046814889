//! Intents for the quantity controller.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the quantity reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityIntent {
    /// Add one item. Rejected at `max` unless unbounded.
    Increment,

    /// Remove one item. Rejected below `max(1, min)`.
    Decrement,

    /// Jump to an absolute value.
    /// Rejected when out of bounds or equal to the current value.
    Set { value: i64 },
}

impl Intent for QuantityIntent {}
