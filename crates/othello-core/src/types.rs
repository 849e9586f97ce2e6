//! Common type aliases used throughout the engine.

/// Search depth in plies.
pub type Depth = u32;

/// Heuristic score. Positive values favor the evaluated side.
pub type Score = i32;
