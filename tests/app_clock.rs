use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use pomoclock::audio::CueSink;
use pomoclock::clock::{
    ClockIntent, Mode, RunState, DEFAULT_BREAK_SECS, DEFAULT_SESSION_SECS, DURATION_STEP_SECS,
    MIN_DURATION_SECS,
};
use pomoclock::ui::app::App;
use pomoclock::ui::input::handle_key;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct RecordingCue {
    plays: Rc<RefCell<u32>>,
    stops: Rc<RefCell<u32>>,
}

impl CueSink for RecordingCue {
    fn play(&mut self) {
        *self.plays.borrow_mut() += 1;
    }

    fn stop(&mut self) {
        *self.stops.borrow_mut() += 1;
    }
}

fn make_app() -> (App, Rc<RefCell<u32>>, Rc<RefCell<u32>>) {
    let cue = RecordingCue::default();
    let plays = Rc::clone(&cue.plays);
    let stops = Rc::clone(&cue.stops);
    (App::new(Box::new(cue)), plays, stops)
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

// -- key map --------------------------------------------------------------

#[test]
fn space_starts_pauses_and_resumes() {
    let (mut app, _, _) = make_app();
    handle_key(&mut app, press(KeyCode::Char(' ')));
    assert_eq!(app.clock().run_state, RunState::Running);
    assert_eq!(app.clock().remaining_secs, DEFAULT_SESSION_SECS);
    handle_key(&mut app, press(KeyCode::Char(' ')));
    assert_eq!(app.clock().run_state, RunState::Paused);
    handle_key(&mut app, press(KeyCode::Char(' ')));
    assert_eq!(app.clock().run_state, RunState::Running);
}

#[test]
fn session_keys_adjust_in_minute_steps() {
    let (mut app, _, _) = make_app();
    handle_key(&mut app, press(KeyCode::Char('w')));
    assert_eq!(
        app.clock().session_secs,
        DEFAULT_SESSION_SECS + DURATION_STEP_SECS
    );
    handle_key(&mut app, press(KeyCode::Char('s')));
    handle_key(&mut app, press(KeyCode::Char('s')));
    assert_eq!(
        app.clock().session_secs,
        DEFAULT_SESSION_SECS - DURATION_STEP_SECS
    );
    // Stopped face tracks the session length live.
    assert_eq!(
        app.clock().displayed_secs(),
        DEFAULT_SESSION_SECS - DURATION_STEP_SECS
    );
}

#[test]
fn break_keys_adjust_in_minute_steps() {
    let (mut app, _, _) = make_app();
    handle_key(&mut app, press(KeyCode::Char('e')));
    assert_eq!(
        app.clock().break_secs,
        DEFAULT_BREAK_SECS + DURATION_STEP_SECS
    );
    handle_key(&mut app, press(KeyCode::Char('d')));
    assert_eq!(app.clock().break_secs, DEFAULT_BREAK_SECS);
}

#[test]
fn reset_key_restores_defaults_and_stops_cue() {
    let (mut app, _, stops) = make_app();
    handle_key(&mut app, press(KeyCode::Char('w')));
    handle_key(&mut app, press(KeyCode::Char('e')));
    handle_key(&mut app, press(KeyCode::Char(' ')));
    handle_key(&mut app, press(KeyCode::Char('r')));
    assert_eq!(app.clock().run_state, RunState::Stopped);
    assert_eq!(app.clock().mode, Mode::Session);
    assert_eq!(app.clock().session_secs, DEFAULT_SESSION_SECS);
    assert_eq!(app.clock().break_secs, DEFAULT_BREAK_SECS);
    assert_eq!(*stops.borrow(), 1);
    assert!(!app.tick_armed());
}

#[test]
fn quit_keys_request_quit() {
    let (mut app, _, _) = make_app();
    handle_key(&mut app, press(KeyCode::Char('q')));
    assert!(app.should_quit());

    let (mut app, _, _) = make_app();
    handle_key(&mut app, press(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn key_release_is_ignored() {
    let (mut app, _, _) = make_app();
    let release = KeyEvent {
        code: KeyCode::Char(' '),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Release,
        state: KeyEventState::empty(),
    };
    handle_key(&mut app, release);
    assert_eq!(app.clock().run_state, RunState::Stopped);
}

#[test]
fn unmapped_keys_change_nothing() {
    let (mut app, plays, stops) = make_app();
    handle_key(&mut app, press(KeyCode::Char('x')));
    handle_key(&mut app, press(KeyCode::Up));
    assert_eq!(app.clock().run_state, RunState::Stopped);
    assert_eq!(*plays.borrow(), 0);
    assert_eq!(*stops.borrow(), 0);
}

// -- end-to-end completion through the app --------------------------------

#[test]
fn minimum_session_completes_with_one_cue() {
    let (mut app, plays, _) = make_app();
    // 25 minutes down to the 1-minute floor.
    while app.clock().session_secs > MIN_DURATION_SECS {
        handle_key(&mut app, press(KeyCode::Char('s')));
    }
    handle_key(&mut app, press(KeyCode::Char(' ')));
    assert_eq!(app.clock().remaining_secs, MIN_DURATION_SECS);

    for _ in 0..MIN_DURATION_SECS {
        app.dispatch(ClockIntent::Tick);
    }
    assert_eq!(app.clock().mode, Mode::Break);
    assert_eq!(app.clock().remaining_secs, DEFAULT_BREAK_SECS);
    assert_eq!(*plays.borrow(), 1);
}

#[test]
fn pause_freezes_countdown_until_resume() {
    let (mut app, _, _) = make_app();
    handle_key(&mut app, press(KeyCode::Char(' ')));
    for _ in 0..5 {
        app.dispatch(ClockIntent::Tick);
    }
    let frozen = app.clock().remaining_secs;
    handle_key(&mut app, press(KeyCode::Char(' ')));
    app.dispatch(ClockIntent::Tick);
    app.dispatch(ClockIntent::Tick);
    assert_eq!(app.clock().remaining_secs, frozen);
    handle_key(&mut app, press(KeyCode::Char(' ')));
    app.dispatch(ClockIntent::Tick);
    assert_eq!(app.clock().remaining_secs, frozen - 1);
}
