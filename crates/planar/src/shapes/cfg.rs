//! Shape defaults (internal).
//!
//! Policy
//! - Fixed constants. Callers that need another resolution pass it explicitly
//!   (`Circle::vertices_with`).

/// Vertex count used by `Circle::vertices`.
pub(crate) const DEFAULT_CIRCLE_RESOLUTION: usize = 64;
/// Smallest vertex count that yields a non-degenerate polygon.
pub(crate) const MIN_POLYGON_VERTICES: usize = 3;
