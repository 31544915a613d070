use crate::app::state::AppState;
use crate::calc::ButtonAction;
use crate::ui::layout::CalcLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, layout: &CalcLayout, state: &AppState) {
    let pending = state.widget.calculator().pending_operator;
    let help_open = state.widget.help_visible();

    for (rect, action) in &layout.buttons {
        let style = match action {
            ButtonAction::Operator(op) if Some(*op) == pending => Theme::key_pending(),
            ButtonAction::Percent if pending == Some(crate::calc::Operator::Percent) => {
                Theme::key_pending()
            }
            ButtonAction::Operator(_) | ButtonAction::Equals | ButtonAction::Percent => {
                Theme::key_operator()
            }
            ButtonAction::Digit(_) | ButtonAction::Decimal => Theme::key_digit(),
            ButtonAction::Help if help_open => Theme::key_pending(),
            _ => Theme::key_function(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::border());
        let inner = block.inner(*rect);
        frame.render_widget(block, *rect);

        let label = Paragraph::new(Span::styled(action.label(), style)).alignment(Alignment::Center);
        frame.render_widget(label, inner);
    }
}
