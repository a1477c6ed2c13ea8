//! Reducer for the calculator keypad.

use crate::ui::mvi::Reducer;

use super::codec::{model_to_number, number_to_model};
use super::error::EngineError;
use super::evaluate::evaluate;
use super::intent::CalcIntent;
use super::policy::{EnginePolicy, OperatorChain, OperatorTable};
use super::state::{CalculatorState, NumberModel, Operation, StackItem};

/// Pure keypad state machine.
///
/// Holds only configuration; every call to `reduce` builds the next state
/// from the previous one.
#[derive(Debug, Clone, Copy)]
pub struct CalcReducer {
    policy: EnginePolicy,
    table: OperatorTable,
}

impl CalcReducer {
    pub fn new(policy: EnginePolicy) -> Self {
        Self {
            policy,
            table: OperatorTable::new(policy.division),
        }
    }

    pub fn policy(&self) -> EnginePolicy {
        self.policy
    }

    fn push_operation(&self, state: CalculatorState, op: Operation) -> CalculatorState {
        let CalculatorState { mut stack, current } = state;

        let replace = self.policy.operator_chain == OperatorChain::Replace
            && current.is_empty()
            && matches!(stack.last(), Some(StackItem::Operation(_)));
        if replace {
            stack.pop();
        } else {
            stack.push(StackItem::Number(model_to_number(&current)));
        }
        stack.push(StackItem::Operation(op));

        CalculatorState {
            stack,
            current: NumberModel::default(),
        }
    }
}

impl Default for CalcReducer {
    fn default() -> Self {
        Self::new(EnginePolicy::default())
    }
}

impl Reducer for CalcReducer {
    type State = CalculatorState;
    type Intent = CalcIntent;
    type Error = EngineError;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Result<Self::State, Self::Error> {
        let next = match intent {
            CalcIntent::PressDigit(digit) => {
                if digit > 9 {
                    return Err(EngineError::InvalidDigit { digit });
                }
                CalculatorState {
                    current: state.current.push_digit(digit),
                    ..state
                }
            }
            CalcIntent::Dot => CalculatorState {
                current: NumberModel {
                    dot: true,
                    ..state.current
                },
                ..state
            },
            CalcIntent::AllClear => CalculatorState::default(),
            CalcIntent::Negate => CalculatorState {
                current: NumberModel {
                    negative: !state.current.negative,
                    ..state.current
                },
                ..state
            },
            CalcIntent::Percentage => CalculatorState {
                current: number_to_model(model_to_number(&state.current) / 100.0)?,
                ..state
            },
            CalcIntent::Divide => self.push_operation(state, Operation::Divide),
            CalcIntent::Multiply => self.push_operation(state, Operation::Multiply),
            CalcIntent::Subtract => self.push_operation(state, Operation::Subtract),
            CalcIntent::Add => self.push_operation(state, Operation::Add),
            CalcIntent::Equals => {
                let CalculatorState { mut stack, current } = state;
                stack.push(StackItem::Number(model_to_number(&current)));
                let result = evaluate(&stack, &self.table)?;
                CalculatorState {
                    stack: Vec::new(),
                    current: number_to_model(result)?,
                }
            }
        };
        Ok(next)
    }
}
