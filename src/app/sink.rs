//! Capability traits between the widget and whatever hosts it.
//!
//! The widget only produces [`Action`] values. [`deliver`] routes them to a
//! display sink, an animation trigger, and a scheduler, so the terminal UI and
//! the test harness plug in the same way.

use crate::app::action::Action;
use crate::app::event::{AppEvent, TimerKind};
use std::time::Duration;
use tokio::sync::mpsc;

pub trait DisplaySink {
    fn set_text(&mut self, text: &str);
}

pub trait AnimationTrigger {
    fn start_trigger_animation(&mut self);
    fn reverse_trigger_animation(&mut self);
    fn end_trigger_animation(&mut self);
    fn show_help_panel(&mut self);
    fn hide_help_panel(&mut self);
}

/// Fire-and-forget deferred callbacks. Scheduled timers cannot be cancelled.
pub trait Scheduler {
    fn schedule(&mut self, after: Duration, timer: TimerKind);
}

/// Production scheduler: one sleeping tokio task per timer, reporting back
/// through the app event channel.
pub struct TokioScheduler {
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl TokioScheduler {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { event_tx }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, after: Duration, timer: TimerKind) {
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let _ = tx.send(AppEvent::Timer(timer));
        });
    }
}

/// Carry out `actions` in order. Returns `true` if one of them was `Quit`.
pub fn deliver<S, T>(actions: Vec<Action>, screen: &mut S, scheduler: &mut T) -> bool
where
    S: DisplaySink + AnimationTrigger,
    T: Scheduler,
{
    let mut quit = false;
    for action in actions {
        match action {
            Action::SetText(text) => screen.set_text(&text),
            Action::StartSpin => screen.start_trigger_animation(),
            Action::ReverseSpin => screen.reverse_trigger_animation(),
            Action::EndSpin => screen.end_trigger_animation(),
            Action::ShowHelp => screen.show_help_panel(),
            Action::HideHelp => screen.hide_help_panel(),
            Action::Schedule { after, timer } => scheduler.schedule(after, timer),
            Action::Quit => quit = true,
        }
    }
    quit
}
