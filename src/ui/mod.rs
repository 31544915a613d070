mod display;
mod help_box;
mod keypad;
pub mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let calc_layout = layout::compute_layout(area);

    display::render(frame, calc_layout.display, state);
    keypad::render(frame, &calc_layout, state);
    help_box::render(frame, calc_layout.help_box, state);
    status_bar::render(frame, calc_layout.status_bar, state);
}
