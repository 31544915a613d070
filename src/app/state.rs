use crate::app::keymap::Keymap;
use crate::app::sink::{AnimationTrigger, DisplaySink};
use crate::app::spin::SpinPhase;
use crate::app::widget::Widget;
use crate::config::AppConfig;
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinVisual {
    Neutral,
    Spinning,
    Unwinding,
}

/// What the terminal currently shows. This is the host side of the sink
/// traits; rendering reads it and nothing else writes it.
#[derive(Debug)]
pub struct Screen {
    pub text: String,
    pub spin: SpinVisual,
    pub help_visible: bool,
    /// Animation frame counter, advanced on ticks while spinning.
    pub frame: usize,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            spin: SpinVisual::Neutral,
            help_visible: false,
            frame: 0,
        }
    }

    /// Advance the spin animation. Returns true when a redraw is needed.
    pub fn tick(&mut self) -> bool {
        if self.spin == SpinVisual::Neutral {
            return false;
        }
        self.frame = self.frame.wrapping_add(1);
        true
    }
}

impl DisplaySink for Screen {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

impl AnimationTrigger for Screen {
    fn start_trigger_animation(&mut self) {
        self.spin = SpinVisual::Spinning;
        self.frame = 0;
    }

    fn reverse_trigger_animation(&mut self) {
        self.spin = SpinVisual::Unwinding;
    }

    fn end_trigger_animation(&mut self) {
        self.spin = SpinVisual::Neutral;
        self.frame = 0;
    }

    fn show_help_panel(&mut self) {
        self.help_visible = true;
    }

    fn hide_help_panel(&mut self) {
        self.help_visible = false;
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub widget: Widget,
    pub screen: Screen,
    pub keymap: Keymap,
    /// Last known terminal area, used to hit-test mouse clicks.
    pub viewport: Rect,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, keymap: Keymap) -> Self {
        let widget = Widget::new(&config);
        Self {
            config,
            widget,
            screen: Screen::new(),
            keymap,
            viewport: Rect::default(),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        let calc = self.widget.calculator();
        let mut s = match (calc.first_operand, calc.pending_operator) {
            (Some(first), Some(op)) => {
                format!("{} {}", crate::calc::number::format_number(first), op.symbol())
            }
            (Some(first), None) => crate::calc::number::format_number(first),
            (None, _) => String::new(),
        };
        let phase = match self.widget.spin_phase() {
            SpinPhase::Idle => return s,
            SpinPhase::Spinning => "spinning",
            SpinPhase::Unwinding => "unwinding",
        };
        if !s.is_empty() {
            s.push_str(" | ");
        }
        s.push_str(phase);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::event::TimerKind;
    use crate::calc::{ButtonAction, Digit, Operator};

    #[test]
    fn test_screen_tracks_animation_calls() {
        let mut screen = Screen::new();
        assert!(!screen.tick());
        screen.start_trigger_animation();
        assert!(screen.tick());
        assert_eq!(screen.frame, 1);
        screen.reverse_trigger_animation();
        assert_eq!(screen.spin, SpinVisual::Unwinding);
        screen.end_trigger_animation();
        assert_eq!(screen.spin, SpinVisual::Neutral);
        assert_eq!(screen.frame, 0);
    }

    #[test]
    fn test_status_line_shows_pending_operation() {
        let mut state = AppState::new(AppConfig::default(), Keymap::default());
        assert_eq!(state.status_line(), "");
        state
            .widget
            .press(ButtonAction::Digit(Digit::new('9').unwrap()));
        state.widget.press(ButtonAction::Operator(Operator::Multiply));
        assert_eq!(state.status_line(), "9 ×");
        state.widget.press(ButtonAction::AllClear);
        for c in ['2', '1', '7'] {
            state.widget.press(ButtonAction::Digit(Digit::new(c).unwrap()));
        }
        assert_eq!(state.status_line(), "spinning");
        state.widget.timer_elapsed(TimerKind::SpinForwardDone);
        assert_eq!(state.status_line(), "unwinding");
    }
}
