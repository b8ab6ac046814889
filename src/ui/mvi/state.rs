//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are small values compared with `PartialEq`; the caller diffs
/// the state before and after a reduce to decide whether anything
/// downstream (animation, indicator) has to react.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
