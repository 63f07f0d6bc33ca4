//! pomoclock — a terminal 25+5 work/break interval clock.
//!
//! The countdown itself is a pure reducer in [`clock`]; cue playback goes
//! through the injected capability in [`audio`]; everything else is
//! presentation in [`ui`].

pub mod audio;
pub mod clock;
pub mod logging;
pub mod ui;
