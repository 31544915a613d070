use crate::app::state::{AppState, SpinVisual};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// The display read upside down, the way calculator words are spelled.
pub fn upside_down(text: &str) -> String {
    text.chars()
        .rev()
        .map(|c| match c {
            '0' => 'O',
            '1' => 'I',
            '2' => 'Z',
            '3' => 'E',
            '4' => 'h',
            '5' => 'S',
            '6' => 'g',
            '7' => 'L',
            '8' => 'B',
            '9' => 'G',
            other => other,
        })
        .collect()
}

/// Keep the tail of `text` when it does not fit, marking the cut with `…`.
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut tail: Vec<char> = Vec::new();
    let mut used = 1; // the ellipsis
    for c in text.chars().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        tail.push(c);
    }
    let mut out = String::from("…");
    out.extend(tail.into_iter().rev());
    out
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let screen = &state.screen;
    let (border_style, spinner) = match screen.spin {
        SpinVisual::Neutral => (Theme::border(), None),
        SpinVisual::Spinning => (
            Theme::border_spinning(),
            Some(SPINNER[screen.frame % SPINNER.len()]),
        ),
        SpinVisual::Unwinding => (
            Theme::border_unwinding(),
            Some(SPINNER[SPINNER.len() - 1 - screen.frame % SPINNER.len()]),
        ),
    };

    let title = match spinner {
        Some(glyph) => format!(" crabcalc {} ", glyph),
        None => " crabcalc ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(border_style)
        .padding(Padding::new(1, 1, 1, 0));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (text, style) = if screen.spin == SpinVisual::Spinning {
        (upside_down(&screen.text), Theme::display_flipped())
    } else {
        (screen.text.clone(), Theme::display_text())
    };

    let text = fit_to_width(&text, inner.width as usize);
    let paragraph = Paragraph::new(Span::styled(text, style)).alignment(Alignment::Right);
    frame.render_widget(paragraph, inner);
}
