use smallvec::SmallVec;

use crate::{
    grid::{CostGrid, Coord},
    solver::{grid_successors, GridSolver},
    N_SMALLVEC_SIZE,
};

/// Uninformed search, useful as a baseline for [AstarSolver](super::astar::AstarSolver).
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Successors = SmallVec<[(Coord, u64); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &CostGrid, node: &Coord) -> Self::Successors {
        grid_successors(grid, node)
    }

    fn heuristic(&self, _: &CostGrid, _: &Coord, _: &Coord) -> u64 {
        0
    }

    /// Floods the grid without the component check.
    fn use_components(&self) -> bool {
        false
    }
}
