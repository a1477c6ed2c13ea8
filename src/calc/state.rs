use crate::ui::mvi::UiState;

/// Binary operator available on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Divide,
    Multiply,
    Subtract,
    Add,
}

impl Operation {
    /// Multiplicative operators bind tighter than additive ones.
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Self::Divide | Self::Multiply)
    }

    /// Glyph printed on the keypad button.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Divide => "÷",
            Self::Multiply => "×",
            Self::Subtract => "−",
            Self::Add => "+",
        }
    }
}

/// The number currently being typed, kept as the digits the user pressed.
///
/// Digits are stored most-significant first. `fraction` stays empty while
/// `dot` is false unless the model was produced by the codec.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumberModel {
    pub integer: Vec<u8>,
    pub dot: bool,
    pub fraction: Vec<u8>,
    pub negative: bool,
}

impl NumberModel {
    /// True for the untouched model produced at startup or after an operator.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Digits land in the fraction once a separator was typed.
    pub fn push_digit(mut self, digit: u8) -> Self {
        if self.dot || !self.fraction.is_empty() {
            self.fraction.push(digit);
        } else {
            self.integer.push(digit);
        }
        self
    }
}

/// One finalized entry of the expression stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StackItem {
    Number(f64),
    Operation(Operation),
}

/// Complete calculator state: pending expression plus the entry being typed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculatorState {
    pub stack: Vec<StackItem>,
    pub current: NumberModel,
}

impl UiState for CalculatorState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_go_to_integer_until_dot() {
        let model = NumberModel::default().push_digit(1).push_digit(2);
        assert_eq!(model.integer, vec![1, 2]);
        assert!(model.fraction.is_empty());
    }

    #[test]
    fn digits_after_dot_go_to_fraction() {
        let model = NumberModel {
            dot: true,
            ..NumberModel::default()
        }
        .push_digit(5);
        assert!(model.integer.is_empty());
        assert_eq!(model.fraction, vec![5]);
    }

    #[test]
    fn negated_model_is_not_empty() {
        let model = NumberModel {
            negative: true,
            ..NumberModel::default()
        };
        assert!(!model.is_empty());
    }
}
