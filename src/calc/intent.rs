//! Key presses understood by the calculator reducer.

use crate::ui::mvi::Intent;

use super::state::Operation;

/// Intents that can be dispatched to the calculator reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcIntent {
    /// Digit key 0-9. Values above 9 are rejected by the front end.
    PressDigit(u8),
    /// Decimal separator. Idempotent.
    Dot,
    /// Reset to the initial empty state.
    AllClear,
    /// Flip the sign of the entry being typed.
    Negate,
    /// Divide the entry being typed by 100.
    Percentage,
    Divide,
    Multiply,
    Subtract,
    Add,
    /// Evaluate the whole expression.
    Equals,
}

impl From<Operation> for CalcIntent {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Divide => Self::Divide,
            Operation::Multiply => Self::Multiply,
            Operation::Subtract => Self::Subtract,
            Operation::Add => Self::Add,
        }
    }
}

impl Intent for CalcIntent {}
