//! Shared test utilities.

#![allow(dead_code)]

use tapcalc::calc::{CalcIntent, CalcReducer, Calculator, CalculatorState, EnginePolicy};
use tapcalc::ui::mvi::Reducer;

/// Runs intents through a fresh calculator, panicking on the first fault.
pub fn press(intents: &[CalcIntent]) -> Calculator {
    press_with(EnginePolicy::default(), intents)
}

pub fn press_with(policy: EnginePolicy, intents: &[CalcIntent]) -> Calculator {
    let mut calc = Calculator::new(policy);
    for intent in intents {
        calc.dispatch(*intent)
            .unwrap_or_else(|err| panic!("{intent:?} failed: {err}"));
    }
    calc
}

/// Folds intents through the bare reducer.
pub fn reduce_all(state: CalculatorState, intents: &[CalcIntent]) -> CalculatorState {
    let reducer = CalcReducer::default();
    intents.iter().fold(state, |state, intent| {
        reducer.reduce(state, *intent).expect("reduce")
    })
}

pub fn digits(number: &str) -> Vec<CalcIntent> {
    number
        .chars()
        .map(|c| CalcIntent::PressDigit(c.to_digit(10).expect("digit") as u8))
        .collect()
}
