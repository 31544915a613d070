use crate::app::event::TimerKind;
use std::time::Duration;

/// Side effects requested by the handler; the main loop carries them out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetText(String),
    StartSpin,
    ReverseSpin,
    EndSpin,
    ShowHelp,
    HideHelp,
    Schedule { after: Duration, timer: TimerKind },
    Quit,
}
