//! Base trait for UI state.

/// Marker trait for state objects.
///
/// States are cloneable snapshots, comparable so callers can tell whether
/// an intent changed anything, and default to their initial state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
