use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const HINT: &str = " ? help  q quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let left = format!(" {} ", state.status_line());

    // Pad to fill remaining space
    let used = left.width() + HINT.width();
    let remaining = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(left, Theme::status_bar()),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
        Span::styled(HINT, Style::default().fg(Theme::ACCENT_TEAL).bg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
