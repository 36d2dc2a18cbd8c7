use thiserror::Error;

/// Errors for malformed construction parameters and violated search
/// preconditions. A search that completes without finding a path is not an
/// error; see [SearchOutcome::NotFound](crate::SearchOutcome::NotFound).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid needs at least one row")]
    ZeroRows,

    #[error("cell ({x}, {y}) lies outside the {rows}x{rows} grid")]
    OutOfBounds { x: i32, y: i32, rows: usize },

    #[error("start and end must be different cells")]
    StartIsEnd,
}
