//! Quantity controller feature module.
//!
//! Owns the bounded counter of a widget.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Counter, previous value and bounds
//! - `intent.rs` - Increment, Decrement, Set
//! - `reducer.rs` - Bounds-checked transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::QuantityIntent;
pub use reducer::QuantityReducer;
pub use state::QuantityState;
