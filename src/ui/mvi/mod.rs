//! Model-View-Intent (MVI) primitives.
//!
//! Every state change of a widget goes through a reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Animation / View
//!    ↑                                   │
//!    └───────────── key press ───────────┘
//! ```
//!
//! - **State**: Immutable snapshot, compared to detect changes
//! - **Intent**: User actions or programmatic requests
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
