//! The calculator widget: engine state plus the spin and help collaborators.
//!
//! Every button press goes through [`Widget::press`], which runs one engine
//! transition and collects the side effects it implies.

use crate::app::action::Action;
use crate::app::event::TimerKind;
use crate::app::help::HelpPanel;
use crate::app::spin::{SpinGuard, SpinPhase};
use crate::calc::engine::transition;
use crate::calc::{ButtonAction, CalculatorState};
use crate::config::AppConfig;

#[derive(Debug)]
pub struct Widget {
    calc: CalculatorState,
    spin: SpinGuard,
    help: HelpPanel,
}

impl Widget {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            calc: CalculatorState::default(),
            spin: SpinGuard::new(&config.animation),
            help: HelpPanel::new(config.help.auto_hide()),
        }
    }

    pub fn calculator(&self) -> &CalculatorState {
        &self.calc
    }

    pub fn spin_phase(&self) -> SpinPhase {
        self.spin.phase()
    }

    pub fn help_visible(&self) -> bool {
        self.help.is_visible()
    }

    /// Initial display write at start-up.
    pub fn refresh(&mut self) -> Vec<Action> {
        let mut actions = vec![Action::SetText(self.calc.display_value.clone())];
        actions.extend(self.spin.check(&self.calc.display_value));
        actions
    }

    pub fn press(&mut self, button: ButtonAction) -> Vec<Action> {
        tracing::debug!(%button, "button pressed");
        let mut actions = Vec::new();

        if button != ButtonAction::Help {
            actions.extend(self.help.hide());
        }

        match button.to_input() {
            Some(input) => {
                let step = transition(&self.calc, input);
                self.calc = step.state;
                if step.refresh {
                    actions.push(Action::SetText(self.calc.display_value.clone()));
                    actions.extend(self.spin.check(&self.calc.display_value));
                }
            }
            None => actions.extend(self.help.show()),
        }

        actions
    }

    pub fn timer_elapsed(&mut self, timer: TimerKind) -> Vec<Action> {
        tracing::trace!(?timer, "timer elapsed");
        match timer {
            TimerKind::HideHelp(generation) => self.help.timer_elapsed(generation),
            TimerKind::SpinForwardDone | TimerKind::SpinUnwindDone => {
                self.spin.timer_elapsed(timer)
            }
        }
    }
}
