//! Calculator engine: number handling, operators, and the input state machine.
//!
//! Everything in here is pure. The engine never touches the terminal, timers,
//! or logging; the widget layer in [`crate::app`] turns transitions into
//! side-effect requests.

pub mod button;
pub mod engine;
pub mod number;
pub mod operator;

pub use button::{ButtonAction, DispatchError};
pub use engine::{CalculatorState, Digit};
pub use operator::Operator;
