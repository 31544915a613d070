use std::fmt;
use std::str::FromStr;

use super::button::DispatchError;

/// Binary operators offered by the keypad. There is no divide key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Percent,
}

impl Operator {
    /// Tag used by the input dispatcher (`operator:add`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Percent => "percent",
        }
    }

    /// Keypad glyph.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Percent => "%",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(Operator::Add),
            "subtract" => Ok(Operator::Subtract),
            "multiply" => Ok(Operator::Multiply),
            "percent" => Ok(Operator::Percent),
            _ => Err(DispatchError::UnknownOperator(s.to_string())),
        }
    }
}

/// Apply `operator` to the operand pair. With no operator the second operand
/// passes through unchanged.
pub fn apply(first: f64, second: f64, operator: Option<Operator>) -> f64 {
    match operator {
        Some(Operator::Add) => first + second,
        Some(Operator::Subtract) => first - second,
        Some(Operator::Multiply) => first * second,
        Some(Operator::Percent) => (first * second) / 100.0,
        None => second,
    }
}
