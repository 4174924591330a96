//! Errors raised by direct grid access.

/// Failures of raw grid access.
///
/// These indicate an indexing bug in the caller. Boundary-aware code (the
/// visibility query and the ray walk) reads out-of-range cells as air instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The coordinate lies outside the grid's extents.
    #[error("block coordinate ({x}, {y}, {z}) is outside the grid")]
    OutOfRange {
        /// X coordinate that was requested
        x: i32,
        /// Y coordinate that was requested
        y: i32,
        /// Z coordinate that was requested
        z: i32,
    },
}
