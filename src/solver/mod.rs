use crate::astar::astar_search;
use crate::error::GridResult;
use crate::grid::{CostGrid, Coord};
use crate::path::{Path, SearchResult};
use log::info;

pub mod astar;
pub mod dijkstra;

/// A best-first search strategy over a [CostGrid]. Implementors pick the successor function and
/// the heuristic; the search loop itself is shared.
pub trait GridSolver {
    type Successors: IntoIterator<Item = (Coord, u64)>;

    /// Estimate of the remaining cost from `p1` to `p2`. Must never overestimate.
    fn heuristic(&self, grid: &CostGrid, p1: &Coord, p2: &Coord) -> u64;

    fn successors(&self, grid: &CostGrid, node: &Coord) -> Self::Successors;

    /// Whether to consult the grid's connected components before searching.
    fn use_components(&self) -> bool {
        true
    }

    /// Recomputes the cost of `path` on `grid`, [None] if it is not a valid path there.
    fn path_cost(&self, path: &[Coord], grid: &CostGrid) -> Option<u64> {
        grid.path_cost(path)
    }

    /// Computes a least-cost path from `start` to `goal`.
    ///
    /// Fails only if either endpoint lies outside the grid. An impassable endpoint or a goal in
    /// another connected region yields [SearchResult::Unreachable].
    fn find_path(&self, grid: &CostGrid, start: Coord, goal: Coord) -> GridResult<SearchResult> {
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;
        if !grid.is_passable(start)? || !grid.is_passable(goal)? {
            info!("{} or {} is impassable", start, goal);
            return Ok(SearchResult::Unreachable);
        }
        if self.use_components() && grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(SearchResult::Unreachable);
        }
        let result = astar_search(
            &start,
            |node| self.successors(grid, node),
            |point| self.heuristic(grid, point, &goal),
            |point| *point == goal,
        );
        Ok(match result {
            Some((coords, cost)) => SearchResult::Found(Path::new(coords, cost)),
            None => SearchResult::Unreachable,
        })
    }
}

/// Neighbours of `node` with their entry cost widened to the accumulator type.
pub(crate) fn grid_successors(
    grid: &CostGrid,
    node: &Coord,
) -> smallvec::SmallVec<[(Coord, u64); crate::N_SMALLVEC_SIZE]> {
    grid.neighbors(node)
        .into_iter()
        .map(|(p, c)| (p, c as u64))
        .collect()
}
