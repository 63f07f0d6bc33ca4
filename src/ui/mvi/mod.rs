//! Intent/reducer primitives for unidirectional data flow in the UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effect) ──→ View
//!    ↑                                        │
//!    └────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of everything the view draws
//! - **Intent**: user actions and timer pulses
//! - **Reducer**: pure transition function; side effects come back as data

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
