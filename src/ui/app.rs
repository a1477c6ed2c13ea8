use crate::calc::{format_stack, CalcIntent, Calculator};
use crate::config::UiConfig;
use crate::ui::keypad::Button;

/// Text shown in place of the value while the calculator is faulted.
pub const FAULT_TEXT: &str = "Error";

/// Front end state wrapped around the calculator.
///
/// Key handling reaches the engine only through [`App::dispatch`].
pub struct App {
    should_quit: bool,
    calculator: Calculator,
    show_stack: bool,
    /// Button lit up by the last key press, cleared on the next tick.
    pressed: Option<Button>,
}

impl App {
    pub fn new(calculator: Calculator, ui: &UiConfig) -> Self {
        Self {
            should_quit: false,
            calculator,
            show_stack: ui.show_stack,
            pressed: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn dispatch(&mut self, intent: CalcIntent) {
        self.pressed = Button::for_intent(intent);
        // Failures are latched inside the calculator and rendered as FAULT_TEXT.
        let _ = self.calculator.dispatch(intent);
    }

    pub fn on_tick(&mut self) {
        self.pressed = None;
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn pressed(&self) -> Option<Button> {
        self.pressed
    }

    /// Main readout text.
    pub fn readout(&self) -> String {
        if self.calculator.fault().is_some() {
            return FAULT_TEXT.to_string();
        }
        self.calculator.display().text()
    }

    /// Pending expression line, when enabled and non-empty.
    pub fn pending_expression(&self) -> Option<String> {
        let stack = &self.calculator.state().stack;
        if !self.show_stack || stack.is_empty() {
            return None;
        }
        Some(format_stack(stack))
    }
}
