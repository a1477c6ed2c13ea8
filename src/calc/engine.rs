//! Stateful host around the pure reducer.

use crate::ui::mvi::Reducer;

use super::display::Display;
use super::error::EngineError;
use super::intent::CalcIntent;
use super::policy::EnginePolicy;
use super::reducer::CalcReducer;
use super::state::CalculatorState;

/// Owns the current state and applies intents one at a time.
///
/// A failed dispatch leaves the state untouched and latches the error.
/// While latched, only `AllClear` is accepted.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    reducer: CalcReducer,
    state: CalculatorState,
    display: Display,
    fault: Option<EngineError>,
}

impl Calculator {
    pub fn new(policy: EnginePolicy) -> Self {
        Self {
            reducer: CalcReducer::new(policy),
            ..Self::default()
        }
    }

    pub fn dispatch(&mut self, intent: CalcIntent) -> Result<(), EngineError> {
        if self.fault.is_some() && intent != CalcIntent::AllClear {
            tracing::debug!(?intent, "Ignoring intent while faulted");
            return Ok(());
        }

        let next = self
            .reducer
            .reduce(self.state.clone(), intent)
            .and_then(|state| Display::project(&state).map(|view| (state, view)));

        match next {
            Ok((state, view)) => {
                tracing::debug!(?intent, value = view.value, "Dispatched");
                self.state = state;
                self.display = view;
                self.fault = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(?intent, error = %err, "Calculator fault");
                self.fault = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn fault(&self) -> Option<&EngineError> {
        self.fault.as_ref()
    }

    pub fn policy(&self) -> EnginePolicy {
        self.reducer.policy()
    }
}
