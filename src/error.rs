use crate::grid::Coord;
use thiserror::Error;

/// Errors raised while building a [CostGrid](crate::grid::CostGrid) or validating search input.
///
/// Failing to find a path is not an error, see [SearchResult](crate::SearchResult).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinate {coord} lies outside the {rows}x{cols} grid")]
    OutOfBounds { coord: Coord, rows: usize, cols: usize },

    #[error("grid has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("negative cost {cost} at {coord}")]
    NegativeCost { coord: Coord, cost: i64 },

    #[error("cost {0} does not fit in a cell")]
    CostOverflow(i64),
}

pub type GridResult<T> = std::result::Result<T, GridError>;
