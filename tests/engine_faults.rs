mod common;

use common::press;
use tapcalc::calc::{CalcIntent, CalculatorState, EngineError};

#[test]
fn division_by_zero_latches_fault() {
    let mut calc = press(&[
        CalcIntent::PressDigit(3),
        CalcIntent::Divide,
        CalcIntent::PressDigit(0),
    ]);
    let err = calc.dispatch(CalcIntent::Equals).unwrap_err();
    assert!(matches!(err, EngineError::NonFinite { .. }));
    assert!(err.to_string().contains("finite"));
    assert!(calc.fault().is_some());

    // Readout keeps the last good projection.
    assert_eq!(calc.display().text(), "0");
}

#[test]
fn all_clear_recovers_from_fault() {
    let mut calc = press(&[
        CalcIntent::PressDigit(3),
        CalcIntent::Divide,
        CalcIntent::PressDigit(0),
    ]);
    let _ = calc.dispatch(CalcIntent::Equals);

    calc.dispatch(CalcIntent::PressDigit(1)).unwrap();
    assert!(calc.fault().is_some());

    calc.dispatch(CalcIntent::AllClear).unwrap();
    assert!(calc.fault().is_none());
    assert_eq!(calc.state(), &CalculatorState::default());

    calc.dispatch(CalcIntent::PressDigit(1)).unwrap();
    assert_eq!(calc.display().text(), "1");
}

#[test]
fn zero_divided_by_zero_is_not_finite() {
    let mut calc = press(&[CalcIntent::Divide]);
    let err = calc.dispatch(CalcIntent::Equals).unwrap_err();
    assert!(matches!(err, EngineError::NonFinite { value } if value.is_nan()));
}

#[test]
fn out_of_range_digit_is_rejected() {
    let mut calc = press(&[]);
    assert_eq!(
        calc.dispatch(CalcIntent::PressDigit(12)),
        Err(EngineError::InvalidDigit { digit: 12 })
    );
}
