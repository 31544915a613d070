use crate::calc::{ButtonAction, Digit, Operator};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

const BODY_WIDTH: u16 = 28;
const BODY_HEIGHT: u16 = 20;
const HELP_HEIGHT: u16 = 13;

pub struct CalcLayout {
    pub display: Rect,
    pub help_box: Rect,
    pub status_bar: Rect,
    pub buttons: Vec<(Rect, ButtonAction)>,
}

/// Keypad, top row first.
pub fn keypad_rows() -> [[ButtonAction; 4]; 5] {
    let d = |n| ButtonAction::Digit(Digit::from_value(n));
    [
        [
            ButtonAction::AllClear,
            ButtonAction::Clear,
            ButtonAction::ToggleSign,
            ButtonAction::Percent,
        ],
        [d(7), d(8), d(9), ButtonAction::Operator(Operator::Multiply)],
        [d(4), d(5), d(6), ButtonAction::Operator(Operator::Subtract)],
        [d(1), d(2), d(3), ButtonAction::Operator(Operator::Add)],
        [d(0), ButtonAction::Decimal, ButtonAction::Help, ButtonAction::Equals],
    ]
}

pub fn compute_layout(area: Rect) -> CalcLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Calculator body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    let body = centered(content, BODY_WIDTH, BODY_HEIGHT);

    let body_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Display
            Constraint::Min(5),    // Keypad
        ])
        .split(body);

    let display = body_chunks[0];
    let keypad = body_chunks[1];

    let rows = keypad_rows();
    let row_rects = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, rows.len() as u32); 5])
        .split(keypad);

    let mut buttons = Vec::with_capacity(20);
    for (row, row_rect) in rows.iter().zip(row_rects.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(*row_rect);
        for (action, cell) in row.iter().zip(cells.iter()) {
            buttons.push((*cell, *action));
        }
    }

    let help_box = centered(body, body.width.saturating_sub(2), HELP_HEIGHT);

    CalcLayout {
        display,
        help_box,
        status_bar,
        buttons,
    }
}

/// Keypad action under the given terminal cell, if any.
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<ButtonAction> {
    let pos = Position::new(column, row);
    compute_layout(area)
        .buttons
        .into_iter()
        .find(|(rect, _)| rect.contains(pos))
        .map(|(_, action)| action)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
