//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent key presses, button clicks, and programmatic
/// requests such as applying the configured start value.
pub trait Intent: Send + 'static {}
