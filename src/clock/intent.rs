use crate::ui::mvi::Intent;

/// Events the clock reducer understands: the two action controls, the
/// four duration adjustments, and the one-second countdown pulse.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClockIntent {
    /// Start from stopped, pause while running, resume while paused.
    StartStop,
    /// Back to stopped with every field at its default.
    Reset,
    /// One-second countdown pulse. Ignored outside `Running`.
    Tick,
    IncrementSession,
    DecrementSession,
    IncrementBreak,
    DecrementBreak,
}

impl Intent for ClockIntent {}
