//! Keypad actions as delivered by the input dispatcher.
//!
//! Actions are tagged `kind[:value]`, e.g. `digit:7`, `operator:multiply`,
//! `all-clear`. The same tags are used for key bindings in the config file.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::engine::{Digit, Input};
use super::operator::Operator;

#[derive(Debug, Error, PartialEq)]
pub enum DispatchError {
    #[error("unknown action `{0}`")]
    UnknownAction(String),
    #[error("unknown operator `{0}`")]
    UnknownOperator(String),
    #[error("`{0}` is not a single decimal digit")]
    InvalidDigit(String),
    #[error("action `{0}` needs a value")]
    MissingValue(String),
    #[error("action `{0}` takes no value")]
    UnexpectedValue(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonAction {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    AllClear,
    ToggleSign,
    Percent,
    Help,
}

impl ButtonAction {
    /// Build an action from its dispatcher kind and optional value.
    pub fn from_parts(kind: &str, value: Option<&str>) -> Result<Self, DispatchError> {
        let kind_lower = kind.trim().to_ascii_lowercase();
        let needs_value = matches!(kind_lower.as_str(), "digit" | "operator");
        match (needs_value, value) {
            (true, None) => return Err(DispatchError::MissingValue(kind_lower)),
            (false, Some(_)) => return Err(DispatchError::UnexpectedValue(kind_lower)),
            _ => {}
        }

        match kind_lower.as_str() {
            "digit" => {
                let raw = value.unwrap_or_default().trim();
                let mut chars = raw.chars();
                match (chars.next().and_then(Digit::new), chars.next()) {
                    (Some(d), None) => Ok(ButtonAction::Digit(d)),
                    _ => Err(DispatchError::InvalidDigit(raw.to_string())),
                }
            }
            "operator" => {
                let op: Operator = value.unwrap_or_default().trim().parse()?;
                // the percent key is a function key but dispatches as an operator
                Ok(match op {
                    Operator::Percent => ButtonAction::Percent,
                    other => ButtonAction::Operator(other),
                })
            }
            "decimal" => Ok(ButtonAction::Decimal),
            "equals" => Ok(ButtonAction::Equals),
            "clear" => Ok(ButtonAction::Clear),
            "all-clear" => Ok(ButtonAction::AllClear),
            "toggle-sign" | "toggle" => Ok(ButtonAction::ToggleSign),
            "percent" => Ok(ButtonAction::Percent),
            "help" => Ok(ButtonAction::Help),
            _ => Err(DispatchError::UnknownAction(kind.to_string())),
        }
    }

    /// Engine input for this action; `None` for help, which only touches the UI.
    pub fn to_input(self) -> Option<Input> {
        match self {
            ButtonAction::Digit(d) => Some(Input::Digit(d)),
            ButtonAction::Decimal => Some(Input::Decimal),
            ButtonAction::Operator(op) => Some(Input::Operator(Some(op))),
            ButtonAction::Percent => Some(Input::Operator(Some(Operator::Percent))),
            ButtonAction::Equals => Some(Input::Operator(None)),
            ButtonAction::Clear => Some(Input::ClearEntry),
            ButtonAction::AllClear => Some(Input::ClearAll),
            ButtonAction::ToggleSign => Some(Input::ToggleSign),
            ButtonAction::Help => None,
        }
    }

    /// Keypad label.
    pub fn label(self) -> String {
        match self {
            ButtonAction::Digit(d) => d.as_char().to_string(),
            ButtonAction::Decimal => ".".to_string(),
            ButtonAction::Operator(op) => op.symbol().to_string(),
            ButtonAction::Equals => "=".to_string(),
            ButtonAction::Clear => "C".to_string(),
            ButtonAction::AllClear => "AC".to_string(),
            ButtonAction::ToggleSign => "±".to_string(),
            ButtonAction::Percent => "%".to_string(),
            ButtonAction::Help => "?".to_string(),
        }
    }
}

impl FromStr for ButtonAction {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((kind, value)) => ButtonAction::from_parts(kind, Some(value)),
            None => ButtonAction::from_parts(s, None),
        }
    }
}

impl fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonAction::Digit(d) => write!(f, "digit:{}", d.as_char()),
            ButtonAction::Decimal => f.write_str("decimal"),
            ButtonAction::Operator(op) => write!(f, "operator:{}", op.name()),
            ButtonAction::Equals => f.write_str("equals"),
            ButtonAction::Clear => f.write_str("clear"),
            ButtonAction::AllClear => f.write_str("all-clear"),
            ButtonAction::ToggleSign => f.write_str("toggle-sign"),
            ButtonAction::Percent => f.write_str("percent"),
            ButtonAction::Help => f.write_str("help"),
        }
    }
}
