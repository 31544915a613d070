//! Keyboard bindings for keypad actions.

use crate::calc::{ButtonAction, Digit, Operator};
use crossterm::event::KeyCode;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Keymap {
    chars: HashMap<char, ButtonAction>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut chars = HashMap::new();
        for n in 0..10u8 {
            let d = Digit::from_value(n);
            chars.insert(d.as_char(), ButtonAction::Digit(d));
        }
        chars.insert('.', ButtonAction::Decimal);
        chars.insert(',', ButtonAction::Decimal);
        chars.insert('+', ButtonAction::Operator(Operator::Add));
        chars.insert('-', ButtonAction::Operator(Operator::Subtract));
        chars.insert('*', ButtonAction::Operator(Operator::Multiply));
        chars.insert('%', ButtonAction::Percent);
        chars.insert('=', ButtonAction::Equals);
        chars.insert('n', ButtonAction::ToggleSign);
        chars.insert('c', ButtonAction::Clear);
        chars.insert('a', ButtonAction::AllClear);
        chars.insert('?', ButtonAction::Help);
        chars.insert('h', ButtonAction::Help);
        Self { chars }
    }
}

impl Keymap {
    /// Defaults with `overrides` layered on top.
    pub fn with_overrides(overrides: impl IntoIterator<Item = (char, ButtonAction)>) -> Self {
        let mut map = Self::default();
        map.chars.extend(overrides);
        map
    }

    pub fn lookup(&self, code: KeyCode) -> Option<ButtonAction> {
        match code {
            KeyCode::Char(c) => self.chars.get(&c).copied(),
            KeyCode::Enter => Some(ButtonAction::Equals),
            KeyCode::Backspace | KeyCode::Delete => Some(ButtonAction::Clear),
            KeyCode::Esc => Some(ButtonAction::AllClear),
            KeyCode::F(1) => Some(ButtonAction::Help),
            _ => None,
        }
    }
}
