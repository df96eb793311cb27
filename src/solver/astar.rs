use smallvec::SmallVec;

use crate::{
    grid::{CostGrid, Coord},
    solver::{grid_successors, GridSolver},
    N_SMALLVEC_SIZE,
};

#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Skip the search when start and goal lie in different connected components.
    pub use_components: bool,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            use_components: true,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    type Successors = SmallVec<[(Coord, u64); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &CostGrid, node: &Coord) -> Self::Successors {
        grid_successors(grid, node)
    }

    /// Manhattan distance priced at the cheapest cell on the grid. Every step enters a cell
    /// costing at least that much, so the estimate stays admissible and consistent even when
    /// some cells are free to enter.
    fn heuristic(&self, grid: &CostGrid, p1: &Coord, p2: &Coord) -> u64 {
        p1.manhattan_distance(p2) as u64 * grid.min_cost() as u64
    }

    fn use_components(&self) -> bool {
        self.use_components
    }
}
