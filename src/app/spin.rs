//! Spin easter egg: a two-phase animation started when the display shows a
//! trigger string.
//!
//! The guard holds from the first phase until the unwind finishes, so a
//! trigger reached mid-animation is ignored rather than queued.

use crate::app::action::Action;
use crate::app::event::TimerKind;
use crate::config::model::AnimationConfig;
use std::collections::HashSet;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Spinning,
    Unwinding,
}

/// Re-entrancy guard for the spin. It stays engaged until the unwind timer
/// fires (spin plus unwind), not just the forward spin.
#[derive(Debug)]
pub struct SpinGuard {
    enabled: bool,
    triggers: HashSet<String>,
    spin: Duration,
    unwind: Duration,
    phase: SpinPhase,
}

impl SpinGuard {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            enabled: config.enabled,
            triggers: config.triggers.iter().cloned().collect(),
            spin: config.spin_duration(),
            unwind: config.unwind_duration(),
            phase: SpinPhase::Idle,
        }
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn is_trigger(&self, text: &str) -> bool {
        self.triggers.contains(text)
    }

    /// Called after every display refresh.
    pub fn check(&mut self, text: &str) -> Vec<Action> {
        if !self.enabled || self.phase != SpinPhase::Idle || !self.is_trigger(text) {
            return vec![];
        }
        self.phase = SpinPhase::Spinning;
        tracing::info!(text, "spin triggered");
        vec![
            Action::StartSpin,
            Action::Schedule {
                after: self.spin,
                timer: TimerKind::SpinForwardDone,
            },
        ]
    }

    pub fn timer_elapsed(&mut self, timer: TimerKind) -> Vec<Action> {
        match (timer, self.phase) {
            (TimerKind::SpinForwardDone, SpinPhase::Spinning) => {
                self.phase = SpinPhase::Unwinding;
                vec![
                    Action::ReverseSpin,
                    Action::Schedule {
                        after: self.unwind,
                        timer: TimerKind::SpinUnwindDone,
                    },
                ]
            }
            (TimerKind::SpinUnwindDone, SpinPhase::Unwinding) => {
                self.phase = SpinPhase::Idle;
                tracing::debug!("spin finished");
                vec![Action::EndSpin]
            }
            _ => vec![],
        }
    }
}
