//! Help box visibility with a single live auto-hide timer.
//!
//! Every showing from hidden bumps a generation and schedules a hide timer
//! tagged with it, so each showing stays up for the full delay. Timers from
//! earlier showings are ignored when they fire. Pressing help while the box
//! is up leaves it visible and does not arm another timer.

use crate::app::action::Action;
use crate::app::event::TimerKind;
use std::time::Duration;

#[derive(Debug)]
pub struct HelpPanel {
    auto_hide: Duration,
    visible: bool,
    generation: u64,
}

impl HelpPanel {
    pub fn new(auto_hide: Duration) -> Self {
        Self {
            auto_hide,
            visible: false,
            generation: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) -> Vec<Action> {
        if self.visible {
            return vec![];
        }
        self.visible = true;
        self.generation += 1;
        vec![
            Action::ShowHelp,
            Action::Schedule {
                after: self.auto_hide,
                timer: TimerKind::HideHelp(self.generation),
            },
        ]
    }

    /// Hide right away (any other key press).
    pub fn hide(&mut self) -> Vec<Action> {
        if !self.visible {
            return vec![];
        }
        self.visible = false;
        vec![Action::HideHelp]
    }

    pub fn timer_elapsed(&mut self, generation: u64) -> Vec<Action> {
        if generation != self.generation {
            tracing::trace!(generation, current = self.generation, "stale help timer");
            return vec![];
        }
        self.hide()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> HelpPanel {
        HelpPanel::new(Duration::from_millis(3000))
    }

    #[test]
    fn test_show_arms_timer() {
        let mut p = panel();
        assert_eq!(
            p.show(),
            vec![
                Action::ShowHelp,
                Action::Schedule {
                    after: Duration::from_millis(3000),
                    timer: TimerKind::HideHelp(1)
                }
            ]
        );
        assert!(p.is_visible());
        assert_eq!(p.timer_elapsed(1), vec![Action::HideHelp]);
        assert!(!p.is_visible());
    }

    #[test]
    fn test_second_show_does_not_toggle_or_rearm() {
        let mut p = panel();
        p.show();
        assert!(p.show().is_empty());
        assert!(p.is_visible());
    }

    #[test]
    fn test_reshow_after_manual_hide_gets_fresh_timer() {
        let mut p = panel();
        p.show();
        assert_eq!(p.hide(), vec![Action::HideHelp]);
        let again = p.show();
        assert_eq!(
            again[1],
            Action::Schedule {
                after: Duration::from_millis(3000),
                timer: TimerKind::HideHelp(2)
            }
        );

        // the first showing's timer no longer applies
        assert!(p.timer_elapsed(1).is_empty());
        assert!(p.is_visible());
        assert_eq!(p.timer_elapsed(2), vec![Action::HideHelp]);
    }

    #[test]
    fn test_hide_when_hidden_is_noop() {
        let mut p = panel();
        assert!(p.hide().is_empty());
        assert!(p.timer_elapsed(0).is_empty());
    }
}
