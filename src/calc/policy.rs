//! Engine behavior switches that the keypad history left ambiguous.

use serde::{Deserialize, Serialize};

use super::state::Operation;

/// What the Divide key computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionMode {
    /// `left / right`.
    #[default]
    Quotient,
    /// `left * right`. Reproduces the legacy keypad, which multiplied on Divide.
    Product,
}

/// How an operator pressed right after another operator is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorChain {
    /// Push the empty entry as `0`, then the new operator.
    #[default]
    ImplicitZero,
    /// Swap the pending operator for the new one.
    Replace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnginePolicy {
    pub division: DivisionMode,
    pub operator_chain: OperatorChain,
}

pub type BinaryOp = fn(f64, f64) -> f64;

/// One binary function per keypad operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorTable {
    divide: BinaryOp,
    multiply: BinaryOp,
    subtract: BinaryOp,
    add: BinaryOp,
}

impl OperatorTable {
    pub fn new(division: DivisionMode) -> Self {
        let divide: BinaryOp = match division {
            DivisionMode::Quotient => quotient,
            DivisionMode::Product => product,
        };
        Self {
            divide,
            multiply: product,
            subtract: difference,
            add: sum,
        }
    }

    pub fn apply(&self, op: Operation, left: f64, right: f64) -> f64 {
        let f = match op {
            Operation::Divide => self.divide,
            Operation::Multiply => self.multiply,
            Operation::Subtract => self.subtract,
            Operation::Add => self.add,
        };
        f(left, right)
    }
}

fn quotient(left: f64, right: f64) -> f64 {
    left / right
}

fn product(left: f64, right: f64) -> f64 {
    left * right
}

fn difference(left: f64, right: f64) -> f64 {
    left - right
}

fn sum(left: f64, right: f64) -> f64 {
    left + right
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::new(DivisionMode::default())
    }
}
