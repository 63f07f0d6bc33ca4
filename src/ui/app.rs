use crate::audio::CueSink;
use crate::clock::{ClockEffect, ClockIntent, ClockReducer, ClockState, RunState};
use crate::ui::mvi::Reducer;
use std::time::{Duration, Instant};

/// Interval between autonomous countdown ticks while running.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// The widget aggregate: clock state, the injected cue sink, and the
/// owned tick deadline.
///
/// The deadline replaces the original widget's module-global interval
/// handle: it is armed on entry to `Running` and cleared synchronously on
/// any transition away from it, so cancel-on-transition is enforced by
/// ownership rather than by convention.
pub struct App {
    should_quit: bool,
    clock: ClockState,
    cue: Box<dyn CueSink>,
    /// Deadline of the next countdown tick; `Some` only while running.
    next_tick: Option<Instant>,
}

impl App {
    pub fn new(cue: Box<dyn CueSink>) -> Self {
        Self {
            should_quit: false,
            clock: ClockState::default(),
            cue,
            next_tick: None,
        }
    }

    pub fn clock(&self) -> &ClockState {
        &self.clock
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// True while a countdown tick is scheduled.
    pub fn tick_armed(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Run the reducer, apply any requested cue effect, and keep the tick
    /// deadline in sync with the run state.
    ///
    /// Leaving `Running` clears the deadline before control returns, so a
    /// pulse arriving after a pause or reset can never decrement the
    /// clock; the reducer ignores stale `Tick` intents as a second guard.
    pub fn dispatch(&mut self, intent: ClockIntent) {
        let was_running = self.clock.run_state == RunState::Running;
        let (state, effect) = ClockReducer::reduce(std::mem::take(&mut self.clock), intent);
        self.clock = state;

        match effect {
            Some(ClockEffect::PlayCue) => self.cue.play(),
            Some(ClockEffect::StopCue) => self.cue.stop(),
            None => {}
        }

        let running = self.clock.run_state == RunState::Running;
        if running && !was_running {
            self.next_tick = Some(Instant::now() + TICK_INTERVAL);
        } else if !running {
            self.next_tick = None;
        }
    }

    /// Coarse pulse from the event thread. Fires a countdown tick once
    /// the armed deadline has elapsed and re-arms it a second ahead.
    pub fn on_tick(&mut self) {
        let Some(deadline) = self.next_tick else {
            return;
        };
        if Instant::now() < deadline {
            return;
        }
        self.next_tick = Some(Instant::now() + TICK_INTERVAL);
        self.dispatch(ClockIntent::Tick);
    }
}
