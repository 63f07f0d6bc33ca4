use crate::ui::mvi::UiState;

/// Default work-session length (25 minutes).
pub const DEFAULT_SESSION_SECS: u32 = 1500;
/// Default break length (5 minutes).
pub const DEFAULT_BREAK_SECS: u32 = 300;
/// Smallest configurable interval length.
pub const MIN_DURATION_SECS: u32 = 60;
/// Largest configurable interval length.
pub const MAX_DURATION_SECS: u32 = 3600;
/// Durations move in whole-minute steps.
pub const DURATION_STEP_SECS: u32 = 60;

/// Which interval the clock is counting down.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    #[default]
    Session,
    Break,
}

impl Mode {
    pub fn flipped(self) -> Self {
        match self {
            Mode::Session => Mode::Break,
            Mode::Break => Mode::Session,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Session => "Session",
            Mode::Break => "Break",
        }
    }
}

/// Whether the countdown is decrementing, held, or fully reset.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RunState {
    #[default]
    Stopped,
    Paused,
    Running,
}

/// The whole clock aggregate. Replaced wholesale on every transition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClockState {
    pub mode: Mode,
    pub run_state: RunState,
    pub session_secs: u32,
    pub break_secs: u32,
    /// Latched countdown value. Only authoritative outside `Stopped`;
    /// while stopped the face tracks `session_secs` live instead.
    pub remaining_secs: u32,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            mode: Mode::Session,
            run_state: RunState::Stopped,
            session_secs: DEFAULT_SESSION_SECS,
            break_secs: DEFAULT_BREAK_SECS,
            remaining_secs: DEFAULT_SESSION_SECS,
        }
    }
}

impl UiState for ClockState {}

impl ClockState {
    pub fn duration_of(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Session => self.session_secs,
            Mode::Break => self.break_secs,
        }
    }

    /// Seconds shown on the clock face.
    pub fn displayed_secs(&self) -> u32 {
        match self.run_state {
            RunState::Stopped => self.session_secs,
            RunState::Paused | RunState::Running => self.remaining_secs,
        }
    }

    /// Under a minute left on the face.
    pub fn is_low_time(&self) -> bool {
        self.displayed_secs() < 60
    }

    /// Formatted `mm:ss` face text.
    pub fn face(&self) -> String {
        format_mmss(self.displayed_secs())
    }
}

/// Zero-padded `mm:ss`: minutes are the whole quotient, so an hour
/// renders as `60:00`.
pub fn format_mmss(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_pads_both_fields() {
        assert_eq!(format_mmss(1500), "25:00");
        assert_eq!(format_mmss(59), "00:59");
        assert_eq!(format_mmss(61), "01:01");
        assert_eq!(format_mmss(0), "00:00");
    }

    #[test]
    fn format_full_hour_uses_sixty_minutes() {
        assert_eq!(format_mmss(3600), "60:00");
    }

    #[test]
    fn stopped_face_tracks_session_length_live() {
        let mut state = ClockState::default();
        state.session_secs = 600;
        state.remaining_secs = 42;
        assert_eq!(state.displayed_secs(), 600);
    }

    #[test]
    fn running_face_shows_latched_remaining() {
        let state = ClockState {
            run_state: RunState::Running,
            remaining_secs: 42,
            ..ClockState::default()
        };
        assert_eq!(state.displayed_secs(), 42);
        assert!(state.is_low_time());
    }

    #[test]
    fn low_time_flag_clears_at_one_minute() {
        let state = ClockState {
            run_state: RunState::Running,
            remaining_secs: 60,
            ..ClockState::default()
        };
        assert!(!state.is_low_time());
    }
}
