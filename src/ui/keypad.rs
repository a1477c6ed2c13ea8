//! Button grid of the calculator.

use crate::calc::{CalcIntent, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    AllClear,
    Negate,
    Percent,
    Digit(u8),
    Dot,
    Op(Operation),
    Equals,
}

/// Visual family of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Action,
    Digit,
    Operation,
}

/// Rows of `(button, width in columns)`; every row spans four columns.
pub const KEYPAD: [&[(Button, u32)]; 5] = [
    &[
        (Button::AllClear, 1),
        (Button::Negate, 1),
        (Button::Percent, 1),
        (Button::Op(Operation::Divide), 1),
    ],
    &[
        (Button::Digit(7), 1),
        (Button::Digit(8), 1),
        (Button::Digit(9), 1),
        (Button::Op(Operation::Multiply), 1),
    ],
    &[
        (Button::Digit(4), 1),
        (Button::Digit(5), 1),
        (Button::Digit(6), 1),
        (Button::Op(Operation::Subtract), 1),
    ],
    &[
        (Button::Digit(1), 1),
        (Button::Digit(2), 1),
        (Button::Digit(3), 1),
        (Button::Op(Operation::Add), 1),
    ],
    &[(Button::Digit(0), 2), (Button::Dot, 1), (Button::Equals, 1)],
];

pub const KEYPAD_COLUMNS: u32 = 4;

impl Button {
    pub fn label(self) -> String {
        match self {
            Self::AllClear => "AC".to_string(),
            Self::Negate => "±".to_string(),
            Self::Percent => "%".to_string(),
            Self::Digit(d) => d.to_string(),
            Self::Dot => ".".to_string(),
            Self::Op(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
        }
    }

    pub fn kind(self) -> ButtonKind {
        match self {
            Self::AllClear | Self::Negate | Self::Percent => ButtonKind::Action,
            Self::Digit(_) | Self::Dot => ButtonKind::Digit,
            Self::Op(_) | Self::Equals => ButtonKind::Operation,
        }
    }

    pub fn intent(self) -> CalcIntent {
        match self {
            Self::AllClear => CalcIntent::AllClear,
            Self::Negate => CalcIntent::Negate,
            Self::Percent => CalcIntent::Percentage,
            Self::Digit(d) => CalcIntent::PressDigit(d),
            Self::Dot => CalcIntent::Dot,
            Self::Op(op) => op.into(),
            Self::Equals => CalcIntent::Equals,
        }
    }

    /// The keypad button that sends `intent`.
    pub fn for_intent(intent: CalcIntent) -> Option<Self> {
        KEYPAD
            .iter()
            .flat_map(|row| row.iter())
            .map(|(button, _)| *button)
            .find(|button| button.intent() == intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_span_all_columns() {
        for row in KEYPAD {
            let width: u32 = row.iter().map(|(_, w)| w).sum();
            assert_eq!(width, KEYPAD_COLUMNS);
        }
    }

    #[test]
    fn every_intent_has_a_button() {
        let mut intents: Vec<CalcIntent> = (0..=9).map(CalcIntent::PressDigit).collect();
        intents.extend([
            CalcIntent::Dot,
            CalcIntent::AllClear,
            CalcIntent::Negate,
            CalcIntent::Percentage,
            CalcIntent::Divide,
            CalcIntent::Multiply,
            CalcIntent::Subtract,
            CalcIntent::Add,
            CalcIntent::Equals,
        ]);
        for intent in intents {
            let button = Button::for_intent(intent).expect("button for intent");
            assert_eq!(button.intent(), intent);
        }
    }

    #[test]
    fn operator_labels_use_keypad_glyphs() {
        assert_eq!(Button::Op(Operation::Divide).label(), "÷");
        assert_eq!(Button::Op(Operation::Subtract).label(), "−");
        assert_eq!(Button::Digit(0).kind(), ButtonKind::Digit);
    }
}
