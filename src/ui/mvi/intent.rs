//! Base trait for intents (user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions such as button presses. They carry
/// no behavior of their own and are processed by reducers to produce
/// new states.
pub trait Intent: Send + 'static {}
