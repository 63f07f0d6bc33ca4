//! Base trait for reducer inputs.

/// Marker trait for intent objects: key presses mapped to operations and
/// autonomous timer pulses. Intents are the only way state changes.
pub trait Intent: Send + 'static {}
