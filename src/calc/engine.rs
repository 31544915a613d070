//! Input-accumulation state machine.
//!
//! [`transition`] takes the current [`CalculatorState`] and one [`Input`] and
//! returns the next state plus whether the display has to be refreshed. The
//! caller owns the state; nothing here is global or mutable in place.

use super::number::{format_number, parse_float, round_result};
use super::operator::{apply, Operator};

/// A single decimal digit. The keypad only ever produces these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_digit().then_some(Digit(c))
    }

    /// Digit for `value % 10`.
    pub fn from_value(value: u8) -> Self {
        Digit((b'0' + value % 10) as char)
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

/// Inputs the engine reacts to. Help is not an engine concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Digit(Digit),
    Decimal,
    /// `None` is the equals key.
    Operator(Option<Operator>),
    ToggleSign,
    ClearEntry,
    ClearAll,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pub display_value: String,
    pub first_operand: Option<f64>,
    pub pending_operator: Option<Operator>,
    pub awaiting_second_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display_value: "0".to_string(),
            first_operand: None,
            pending_operator: None,
            awaiting_second_operand: false,
        }
    }
}

/// Result of one engine step.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: CalculatorState,
    /// True when the display must be rewritten (and trigger strings checked).
    pub refresh: bool,
}

impl Transition {
    fn refreshed(state: CalculatorState) -> Self {
        Self { state, refresh: true }
    }

    fn unchanged(state: CalculatorState) -> Self {
        Self { state, refresh: false }
    }
}

pub fn transition(state: &CalculatorState, input: Input) -> Transition {
    match input {
        Input::Digit(d) => state.input_digit(d),
        Input::Decimal => state.input_decimal(),
        Input::Operator(next) => state.handle_operator(next),
        Input::ToggleSign => state.toggle_sign(),
        Input::ClearEntry => state.clear_entry(),
        Input::ClearAll => state.clear_all(),
    }
}

impl CalculatorState {
    pub fn input_digit(&self, digit: Digit) -> Transition {
        let mut next = self.clone();
        if next.awaiting_second_operand {
            next.display_value = digit.as_char().to_string();
            next.awaiting_second_operand = false;
        } else if next.display_value == "0" {
            next.display_value = digit.as_char().to_string();
        } else {
            next.display_value.push(digit.as_char());
        }
        Transition::refreshed(next)
    }

    pub fn input_decimal(&self) -> Transition {
        let mut next = self.clone();
        if next.awaiting_second_operand {
            next.display_value = "0.".to_string();
            next.awaiting_second_operand = false;
            return Transition::refreshed(next);
        }
        if next.display_value.contains('.') {
            return Transition::unchanged(next);
        }
        next.display_value.push('.');
        Transition::refreshed(next)
    }

    pub fn handle_operator(&self, operator: Option<Operator>) -> Transition {
        let mut next = self.clone();
        let input_value = parse_float(&next.display_value);

        // Operator pressed again before a second operand: just swap it
        if next.pending_operator.is_some() && next.awaiting_second_operand {
            next.pending_operator = operator;
            return Transition::unchanged(next);
        }

        match next.first_operand {
            None if !input_value.is_nan() => {
                next.first_operand = Some(input_value);
            }
            Some(first) if next.pending_operator.is_some() => {
                // Only the display is rounded; the chain carries the raw value
                let result = apply(first, input_value, next.pending_operator);
                next.display_value = format_number(round_result(result));
                next.first_operand = Some(result);
            }
            _ => {}
        }

        next.awaiting_second_operand = true;
        next.pending_operator = operator;
        Transition::refreshed(next)
    }

    pub fn toggle_sign(&self) -> Transition {
        let mut next = self.clone();
        next.display_value = format_number(-parse_float(&next.display_value));
        Transition::refreshed(next)
    }

    pub fn clear_entry(&self) -> Transition {
        let mut next = self.clone();
        next.display_value = "0".to_string();
        Transition::refreshed(next)
    }

    pub fn clear_all(&self) -> Transition {
        Transition::refreshed(CalculatorState::default())
    }
}
