//! # terrain_pathfinding
//!
//! Least-cost pathfinding on rectangular grids whose cells carry per-terrain entry costs.
//! Paths are computed with [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over
//! 4-connected moves using a Manhattan-distance heuristic, which is admissible for any grid of
//! non-negative costs, so the returned path is always a cheapest one. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use terrain_pathfinding::{find_path, Coord, GridBuilder, Terrain, TerrainCosts};
//!
//! let mut layout = GridBuilder::square(3);
//! layout.set(Coord::new(1, 1), Terrain::Building).unwrap();
//! let grid = layout.build(&TerrainCosts::default()).unwrap();
//! let result = find_path(&grid, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
//! assert_eq!(result.cost(), Some(4));
//! ```
pub mod astar;
pub mod error;
pub mod grid;
pub mod path;
pub mod render;
pub mod solver;
pub mod terrain;

pub use error::{GridError, GridResult};
pub use grid::{Cost, CostGrid, Coord};
pub use path::{Path, SearchResult};
pub use render::render_path;
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver};
pub use terrain::{GridBuilder, Terrain, TerrainCosts};

/// Inline capacity of neighbour lists; a cell has at most four neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;

/// Computes a cheapest path from `start` to `goal` with the default [AstarSolver].
///
/// Returns [GridError::OutOfBounds] if either endpoint lies outside the grid and
/// [SearchResult::Unreachable] if no path exists.
pub fn find_path(grid: &CostGrid, start: Coord, goal: Coord) -> GridResult<SearchResult> {
    AstarSolver::new().find_path(grid, start, goal)
}
