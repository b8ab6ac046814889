//! Quantity-to-level mapping shared by the controller and the animation engine.

mod level;

pub use level::{Direction, LevelTransition, QuantityChange, TransitionKind, VisualLevel};
