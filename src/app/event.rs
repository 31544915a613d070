use crossterm::event::Event as CrosstermEvent;

/// Deferred callbacks the widget can ask the host to run later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// End of the forward spin; starts the unwind.
    SpinForwardDone,
    /// End of the unwind; back to neutral.
    SpinUnwindDone,
    /// Auto-hide of the help box, tagged with the showing it belongs to.
    HideHelp(u64),
}

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A scheduled timer elapsed
    Timer(TimerKind),

    /// Tick for UI refresh
    Tick,
}
