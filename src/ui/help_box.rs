use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

const KEYS: &[(&str, &str)] = &[
    ("0-9 .", "digits"),
    ("+ - *", "add, sub, multiply"),
    ("%", "percent of"),
    ("= Enter", "evaluate"),
    ("n", "toggle sign"),
    ("c Bksp", "clear entry"),
    ("a Esc", "all clear"),
    ("q", "quit"),
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if !state.screen.help_visible {
        return;
    }

    let block = Block::default()
        .title(" Help ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_unwinding())
        .padding(Padding::horizontal(1));

    let lines: Vec<Line> = KEYS
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!("{:<8}", keys), Theme::help_key()),
                Span::styled(*what, Theme::help_text()),
            ])
        })
        .chain(std::iter::once(Line::from("")))
        .chain(std::iter::once(Line::from(Span::styled(
            "Some numbers read upside down.",
            Theme::border(),
        ))))
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
