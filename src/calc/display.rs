//! Read-model handed to the front end after every dispatch.

use super::codec::{count_trailing_zeroes, model_to_number, number_to_model};
use super::error::EngineError;
use super::state::{CalculatorState, NumberModel, Operation, StackItem};

/// What the numeric readout and the operator highlight need.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Display {
    pub value: f64,
    /// Show a decimal separator even when `value` is integral.
    pub dot: bool,
    /// Typed zeroes after the last significant fraction digit.
    pub trailing_zeroes: usize,
    /// Operator just pressed, if no digits were typed since.
    pub recent_operation: Option<Operation>,
}

/// Coarse size bucket for the readout, picked from the rendered length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Large,
    Medium,
    Small,
    Tiny,
}

impl Display {
    /// Projects the state onto the readout.
    ///
    /// Right after an operator the readout keeps showing the operand that
    /// was just pushed.
    pub fn project(state: &CalculatorState) -> Result<Self, EngineError> {
        if state.current.is_empty() && !state.stack.is_empty() {
            let recent_operation = match state.stack.last() {
                Some(StackItem::Operation(op)) => *op,
                _ => return Err(EngineError::malformed("stack does not end in an operator")),
            };
            let operand = match state.stack.len().checked_sub(2).map(|i| &state.stack[i]) {
                Some(StackItem::Number(value)) => *value,
                _ => return Err(EngineError::malformed("no operand before the last operator")),
            };
            let model = number_to_model(operand)?;
            return Ok(Self {
                recent_operation: Some(recent_operation),
                ..Self::from_model(&model)
            });
        }
        Ok(Self::from_model(&state.current))
    }

    fn from_model(model: &NumberModel) -> Self {
        let trailing_zeroes = count_trailing_zeroes(&model.fraction);
        Self {
            value: model_to_number(model),
            dot: model.dot || !model.fraction.is_empty() || trailing_zeroes > 0,
            trailing_zeroes,
            recent_operation: None,
        }
    }

    /// Readout text, e.g. `-0`, `3.`, `3.00`, `0.25`.
    pub fn text(&self) -> String {
        let mut text = format_number(self.value);
        if self.dot && self.value.fract() == 0.0 {
            text.push('.');
        }
        text.extend(std::iter::repeat('0').take(self.trailing_zeroes));
        text
    }

    pub fn size_class(&self) -> SizeClass {
        match self.text().chars().count() {
            0..=9 => SizeClass::Large,
            10..=14 => SizeClass::Medium,
            15..=19 => SizeClass::Small,
            _ => SizeClass::Tiny,
        }
    }
}

/// Shortest round-trip rendering, keeping the sign of negative zero.
pub fn format_number(value: f64) -> String {
    if value == 0.0 && value.is_sign_negative() {
        return "-0".to_string();
    }
    value.to_string()
}

/// Renders the pending expression, e.g. `12 + 3 ×`.
pub fn format_stack(stack: &[StackItem]) -> String {
    stack
        .iter()
        .map(|item| match item {
            StackItem::Number(value) => format_number(*value),
            StackItem::Operation(op) => op.symbol().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(integer: &[u8], dot: bool, fraction: &[u8], negative: bool) -> CalculatorState {
        CalculatorState {
            stack: Vec::new(),
            current: NumberModel {
                integer: integer.to_vec(),
                dot,
                fraction: fraction.to_vec(),
                negative,
            },
        }
    }

    #[test]
    fn initial_state_projects_to_default() {
        let display = Display::project(&CalculatorState::default()).unwrap();
        assert_eq!(display, Display::default());
        assert_eq!(display.text(), "0");
    }

    #[test]
    fn keeps_typed_trailing_zeroes() {
        let display = Display::project(&typed(&[3], true, &[0, 0], false)).unwrap();
        assert_eq!(display.value, 3.0);
        assert!(display.dot);
        assert_eq!(display.trailing_zeroes, 2);
        assert_eq!(display.text(), "3.00");
    }

    #[test]
    fn bare_dot_is_shown() {
        let display = Display::project(&typed(&[0], true, &[], false)).unwrap();
        assert_eq!(display.text(), "0.");
    }

    #[test]
    fn negative_zero_keeps_sign() {
        let display = Display::project(&typed(&[0], false, &[], true)).unwrap();
        assert_eq!(display.text(), "-0");
    }

    #[test]
    fn pending_operator_shows_previous_operand() {
        let state = CalculatorState {
            stack: vec![
                StackItem::Number(1.5),
                StackItem::Operation(Operation::Multiply),
            ],
            current: NumberModel::default(),
        };
        let display = Display::project(&state).unwrap();
        assert_eq!(display.value, 1.5);
        assert!(display.dot);
        assert_eq!(display.trailing_zeroes, 0);
        assert_eq!(display.recent_operation, Some(Operation::Multiply));
    }

    #[test]
    fn typing_clears_recent_operation() {
        let mut state = typed(&[2], false, &[], false);
        state.stack = vec![StackItem::Number(1.0), StackItem::Operation(Operation::Add)];
        let display = Display::project(&state).unwrap();
        assert_eq!(display.recent_operation, None);
        assert_eq!(display.value, 2.0);
    }

    #[test]
    fn malformed_stack_is_reported() {
        let state = CalculatorState {
            stack: vec![StackItem::Number(1.0)],
            current: NumberModel::default(),
        };
        assert!(matches!(
            Display::project(&state),
            Err(EngineError::MalformedStack { .. })
        ));
    }

    #[test]
    fn size_class_follows_text_length() {
        let short = Display {
            value: 12.0,
            ..Display::default()
        };
        assert_eq!(short.size_class(), SizeClass::Large);
        let long = Display {
            value: 123456789012.0,
            ..Display::default()
        };
        assert_eq!(long.size_class(), SizeClass::Medium);
        let huge = Display {
            value: 12345678901234567.0,
            dot: true,
            trailing_zeroes: 3,
            ..Display::default()
        };
        assert_eq!(huge.size_class(), SizeClass::Tiny);
    }

    #[test]
    fn formats_pending_expression() {
        let stack = [
            StackItem::Number(12.0),
            StackItem::Operation(Operation::Add),
            StackItem::Number(-0.5),
            StackItem::Operation(Operation::Divide),
        ];
        assert_eq!(format_stack(&stack), "12 + -0.5 ÷");
    }
}
