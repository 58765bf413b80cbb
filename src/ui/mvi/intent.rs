//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents carry either a user action (toggle a checkbox, change page) or
/// the result of something the caller did outside the reducer (a refetched
/// list, the answer to a confirmation prompt).
pub trait Intent: Send + 'static {}
