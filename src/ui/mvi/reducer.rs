//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> Result<State, Error>.
/// Configuration that shapes the transition (such as operator semantics)
/// lives on the reducer value itself, never in the state.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Error returned when a transition cannot be computed.
    type Error: std::error::Error;

    /// Process an intent and return the new state.
    ///
    /// On error the caller keeps the previous state; the reducer never
    /// hands back a partially updated one.
    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Result<Self::State, Self::Error>;
}
