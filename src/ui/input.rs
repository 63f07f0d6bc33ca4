use crate::clock::ClockIntent;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Map a key press to a clock operation.
///
/// Space toggles start/stop, `r` resets, `w`/`s` adjust the session
/// length by a minute, `e`/`d` adjust the break length, `q`/Esc quits.
/// Everything else is ignored.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char(' ') => app.dispatch(ClockIntent::StartStop),
        KeyCode::Char('r') => app.dispatch(ClockIntent::Reset),
        KeyCode::Char('w') => app.dispatch(ClockIntent::IncrementSession),
        KeyCode::Char('s') => app.dispatch(ClockIntent::DecrementSession),
        KeyCode::Char('e') => app.dispatch(ClockIntent::IncrementBreak),
        KeyCode::Char('d') => app.dispatch(ClockIntent::DecrementBreak),
        _ => {}
    }
}
