//! Animation: level state machine, declarative timelines and their player.
//!
//! The engine decides *what* plays for a change and returns a
//! [`Timeline`]; the [`Player`] decides *when* each step is written to the
//! render target. Only these two ever write visual properties.

mod easing;
mod engine;
mod player;
mod stagger;
mod timeline;

pub use easing::Easing;
pub use engine::{AnimationEngine, Timing};
pub use player::Player;
pub use stagger::stagger_offsets;
pub use timeline::{Step, Timeline};
