//! Terminal front end: one [`StackIconWidget`](stack_widget::StackIconWidget)
//! per configured stack, driven by keyboard input and frame ticks.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod quantity;
pub mod render;
pub mod runtime;
pub mod stack_widget;
pub mod terminal_guard;
pub mod theme;
