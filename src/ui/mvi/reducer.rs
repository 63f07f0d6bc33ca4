//! Reducer trait: pure state transitions with effects as data.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// `reduce` must stay a pure function: it consumes the current state and
/// an intent and returns the next state plus at most one requested side
/// effect. The caller applies the effect after storing the new state, so
/// nothing observable happens inside the reducer itself.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Side effects the reducer may request, expressed as data.
    type Effect: Send + 'static;

    /// Process an intent and return the new state and requested effect.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Effect>);
}
