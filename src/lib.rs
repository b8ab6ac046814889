//! Animated stack icon: a bounded quantity counter whose value is shown as a
//! stack of one, two, or three-or-more items.
//!
//! The crate is split the way data flows through it:
//!
//! ```text
//! config ──→ Options ──→ quantity reducer ──→ QuantityChange
//!                                                  │
//!                         level mapper ←───────────┘
//!                              │
//!                  animation engine ──→ Timeline ──→ Player ──→ RenderTarget
//! ```
//!
//! [`widget::StackIcon`] ties these together behind the four public
//! operations: `initialize`, `increment`, `decrement` and `set_quantity`.

pub mod animation;
pub mod config;
pub mod logging;
pub mod render;
pub mod stack;
pub mod ui;
pub mod widget;
