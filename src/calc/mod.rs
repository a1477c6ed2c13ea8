//! Calculator engine.
//!
//! Turns keypad presses into a running value with standard two-tier
//! operator precedence.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Typed digits and the pending expression stack
//! - `intent.rs` - Keypad actions (digits, dot, operators, equals, ...)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `display.rs` - Read-model projected from the state for rendering
//! - `engine.rs` - Stateful `dispatch` host with fault latching

mod codec;
mod display;
mod engine;
mod error;
mod evaluate;
mod intent;
mod policy;
mod reducer;
mod state;

pub use codec::{count_trailing_zeroes, model_to_number, number_to_model};
pub use display::{format_number, format_stack, Display, SizeClass};
pub use engine::Calculator;
pub use error::EngineError;
pub use evaluate::evaluate;
pub use intent::CalcIntent;
pub use policy::{BinaryOp, DivisionMode, EnginePolicy, OperatorChain, OperatorTable};
pub use reducer::CalcReducer;
pub use state::{CalculatorState, NumberModel, Operation, StackItem};
