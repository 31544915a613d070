use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_TEAL: Color = Color::Rgb(0x2d, 0xd4, 0xbf);
    pub const ACCENT_ORANGE: Color = Color::Rgb(0xf5, 0x9e, 0x0b);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_spinning() -> Style {
        Style::default().fg(Self::ACCENT_ORANGE).add_modifier(Modifier::BOLD)
    }

    pub fn border_unwinding() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn display_text() -> Style {
        Style::default().fg(Self::ACCENT_TEAL).add_modifier(Modifier::BOLD)
    }

    pub fn display_flipped() -> Style {
        Style::default().fg(Self::ACCENT_ORANGE).add_modifier(Modifier::BOLD)
    }

    pub fn key_digit() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn key_operator() -> Style {
        Style::default().fg(Self::ACCENT_ORANGE).add_modifier(Modifier::BOLD)
    }

    pub fn key_function() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn key_pending() -> Style {
        Style::default().fg(Color::Black).bg(Self::ACCENT_ORANGE)
    }

    pub fn help_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn help_key() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
