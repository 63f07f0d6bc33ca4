//! The timer state machine: a pure reducer over the clock aggregate.

mod intent;
mod reducer;
mod state;

pub use intent::ClockIntent;
pub use reducer::{ClockEffect, ClockReducer};
pub use state::{
    format_mmss, ClockState, Mode, RunState, DEFAULT_BREAK_SECS, DEFAULT_SESSION_SECS,
    DURATION_STEP_SECS, MAX_DURATION_SECS, MIN_DURATION_SECS,
};
