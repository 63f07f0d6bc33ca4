//! Base trait for state aggregates driven by a reducer.

/// Marker trait for reducer-owned state.
///
/// A state value carries everything the view needs to draw one frame and
/// is replaced wholesale on every transition, so it must be cheap to
/// clone and comparable for change detection.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
