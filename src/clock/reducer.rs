use crate::clock::intent::ClockIntent;
use crate::clock::state::{
    ClockState, RunState, DURATION_STEP_SECS, MAX_DURATION_SECS, MIN_DURATION_SECS,
};
use crate::ui::mvi::Reducer;

/// Side effects the reducer requests. Effects are plain data; the app
/// applies them against the injected cue sink after the state swap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClockEffect {
    /// Start the cue from its beginning.
    PlayCue,
    /// Stop the cue and rewind it, whether or not it was playing.
    StopCue,
}

pub struct ClockReducer;

impl Reducer for ClockReducer {
    type State = ClockState;
    type Intent = ClockIntent;
    type Effect = ClockEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Effect>) {
        match intent {
            ClockIntent::StartStop => match state.run_state {
                RunState::Stopped => (
                    ClockState {
                        run_state: RunState::Running,
                        remaining_secs: state.session_secs,
                        ..state
                    },
                    None,
                ),
                RunState::Running => (
                    ClockState {
                        run_state: RunState::Paused,
                        ..state
                    },
                    None,
                ),
                RunState::Paused => (
                    ClockState {
                        run_state: RunState::Running,
                        ..state
                    },
                    None,
                ),
            },
            ClockIntent::Reset => (ClockState::default(), Some(ClockEffect::StopCue)),
            ClockIntent::Tick => {
                if state.run_state != RunState::Running {
                    // Stale pulse after a pause or reset: nothing to do.
                    return (state, None);
                }
                let remaining = state.remaining_secs.saturating_sub(1);
                if remaining == 0 {
                    // The tick that empties the interval completes it:
                    // cue, mode flip, reload from the new mode's length.
                    let mode = state.mode.flipped();
                    let remaining_secs = state.duration_of(mode);
                    (
                        ClockState {
                            mode,
                            remaining_secs,
                            ..state
                        },
                        Some(ClockEffect::PlayCue),
                    )
                } else {
                    (
                        ClockState {
                            remaining_secs: remaining,
                            ..state
                        },
                        None,
                    )
                }
            }
            ClockIntent::IncrementSession => (
                ClockState {
                    session_secs: incremented(state.session_secs),
                    ..state
                },
                None,
            ),
            ClockIntent::DecrementSession => (
                ClockState {
                    session_secs: decremented(state.session_secs),
                    ..state
                },
                None,
            ),
            ClockIntent::IncrementBreak => (
                ClockState {
                    break_secs: incremented(state.break_secs),
                    ..state
                },
                None,
            ),
            ClockIntent::DecrementBreak => (
                ClockState {
                    break_secs: decremented(state.break_secs),
                    ..state
                },
                None,
            ),
        }
    }
}

fn incremented(secs: u32) -> u32 {
    if secs < MAX_DURATION_SECS {
        secs + DURATION_STEP_SECS
    } else {
        secs
    }
}

fn decremented(secs: u32) -> u32 {
    if secs >= MIN_DURATION_SECS + DURATION_STEP_SECS {
        secs - DURATION_STEP_SECS
    } else {
        secs
    }
}
