use crate::error::{GridError, GridResult};
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use itertools::Itertools;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// A cell position given as (row, column).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }
    pub fn manhattan_distance(&self, other: &Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
    /// True if the two coordinates differ by one step along exactly one axis.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Coord {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Cost of entering a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cost {
    Finite(u32),
    Impassable,
}

impl Cost {
    pub fn is_passable(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }
    pub fn finite(&self) -> Option<u32> {
        match self {
            Cost::Finite(c) => Some(*c),
            Cost::Impassable => None,
        }
    }
}

/// Rectangular, immutable grid of entry costs.
///
/// Connected components of the passable cells are computed once on construction so that
/// [reachable](Self::reachable) can answer in near constant time.
#[derive(Clone, Debug)]
pub struct CostGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cost>,
    components: UnionFind<usize>,
    min_cost: u32,
}

impl CostGrid {
    /// Builds a grid from rows of costs. All rows must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> GridResult<CostGrid> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, r)) = rows.iter().find_position(|r| r.len() != expected) {
            return Err(GridError::NonRectangular {
                row,
                expected,
                found: r.len(),
            });
        }
        let n_rows = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Ok(CostGrid::from_cells(n_rows, expected, cells))
    }

    /// Builds a grid from signed raw costs where [None] marks an impassable cell. Negative costs
    /// are rejected since they break the optimality of the search.
    pub fn from_signed(rows: Vec<Vec<Option<i64>>>) -> GridResult<CostGrid> {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(r, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(c, value)| match value {
                        None => Ok(Cost::Impassable),
                        Some(cost) if cost < 0 => Err(GridError::NegativeCost {
                            coord: Coord::new(r, c),
                            cost,
                        }),
                        Some(cost) => u32::try_from(cost)
                            .map(Cost::Finite)
                            .map_err(|_| GridError::CostOverflow(cost)),
                    })
                    .collect::<GridResult<Vec<Cost>>>()
            })
            .collect::<GridResult<Vec<Vec<Cost>>>>()?;
        CostGrid::from_rows(rows)
    }

    /// A `rows` x `cols` grid where every cell has the same cost.
    pub fn uniform(rows: usize, cols: usize, cost: Cost) -> GridResult<CostGrid> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(CostGrid::from_cells(rows, cols, vec![cost; rows * cols]))
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cost>) -> CostGrid {
        debug_assert_eq!(cells.len(), rows * cols);
        let min_cost = cells.iter().filter_map(Cost::finite).min().unwrap_or(0);
        let mut grid = CostGrid {
            rows,
            cols,
            cells,
            components: UnionFind::new(rows * cols),
            min_cost,
        };
        grid.generate_components();
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    /// Cheapest finite cost on the grid, 0 if no cell is passable.
    pub fn min_cost(&self) -> u32 {
        self.min_cost
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }
    pub fn check_bounds(&self, coord: Coord) -> GridResult<()> {
        if self.in_bounds(coord) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
    fn get_ix(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }
    fn get(&self, coord: Coord) -> Cost {
        self.cells[self.get_ix(coord)]
    }

    pub fn cost_at(&self, coord: Coord) -> GridResult<Cost> {
        self.check_bounds(coord)?;
        Ok(self.get(coord))
    }
    pub fn is_passable(&self, coord: Coord) -> GridResult<bool> {
        self.cost_at(coord).map(|c| c.is_passable())
    }
    fn can_move_to(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && self.get(coord).is_passable()
    }

    /// The in-bounds, passable cells directly above, right of, below and left of `coord`,
    /// in that order, each with the cost of entering it. Nothing is enumerated from an
    /// impassable or out-of-bounds cell.
    pub fn neighbors(&self, coord: &Coord) -> SmallVec<[(Coord, u32); N_SMALLVEC_SIZE]> {
        if !self.can_move_to(*coord) {
            return SmallVec::new();
        }
        let Coord { row, col } = *coord;
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            Some(Coord::new(row, col + 1)),
            Some(Coord::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
        ]
        .into_iter()
        .flatten()
        .filter_map(|p| {
            if self.in_bounds(p) {
                self.get(p).finite().map(|c| (p, c))
            } else {
                None
            }
        })
        .collect()
    }

    /// Rows of costs, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cost]> {
        self.cells.chunks(self.cols)
    }

    /// Checks if start and goal are passable cells on the same component.
    pub fn reachable(&self, start: &Coord, goal: &Coord) -> bool {
        self.can_move_to(*start)
            && self.can_move_to(*goal)
            && self
                .components
                .equiv(self.get_ix(*start), self.get_ix(*goal))
    }
    pub fn unreachable(&self, start: &Coord, goal: &Coord) -> bool {
        !self.reachable(start, goal)
    }

    /// Sum of the costs of every cell entered along `path`, the first cell excluded. Returns
    /// [None] if the path is empty, leaves the grid, steps on an impassable cell or contains a
    /// jump between non-adjacent cells.
    pub fn path_cost(&self, path: &[Coord]) -> Option<u64> {
        let first = path.first()?;
        if !self.can_move_to(*first) {
            return None;
        }
        path.iter().tuple_windows().try_fold(0u64, |acc, (a, b)| {
            if !a.is_adjacent(b) || !self.can_move_to(*b) {
                return None;
            }
            self.get(*b).finite().map(|c| acc + c as u64)
        })
    }

    /// Links up every pair of 4-adjacent passable cells in a fresh [UnionFind].
    fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let point = Coord::new(row, col);
                if !self.can_move_to(point) {
                    continue;
                }
                let parent_ix = self.get_ix(point);
                // Right and down suffice, the other two directions are covered from the neighbour.
                for p in [Coord::new(row, col + 1), Coord::new(row + 1, col)] {
                    if self.can_move_to(p) {
                        let ix = self.get_ix(p);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
        debug!(
            "Generated connected components for {}x{} grid",
            self.rows, self.cols
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(rows: usize, cols: usize) -> CostGrid {
        CostGrid::uniform(rows, cols, Cost::Finite(1)).unwrap()
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows = vec![vec![Cost::Finite(1); 3], vec![Cost::Finite(1); 2]];
        assert_eq!(
            CostGrid::from_rows(rows).unwrap_err(),
            GridError::NonRectangular {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(CostGrid::from_rows(vec![]).unwrap_err(), GridError::Empty);
        assert_eq!(
            CostGrid::from_rows(vec![vec![]]).unwrap_err(),
            GridError::Empty
        );
        assert_eq!(
            CostGrid::uniform(0, 3, Cost::Finite(1)).unwrap_err(),
            GridError::Empty
        );
    }

    #[test]
    fn rejects_negative_costs() {
        let err = CostGrid::from_signed(vec![vec![Some(1), Some(2)], vec![Some(-3), None]])
            .unwrap_err();
        assert_eq!(
            err,
            GridError::NegativeCost {
                coord: Coord::new(1, 0),
                cost: -3
            }
        );
        let err = CostGrid::from_signed(vec![vec![Some(i64::MAX)]]).unwrap_err();
        assert_eq!(err, GridError::CostOverflow(i64::MAX));
    }

    #[test]
    fn signed_input_maps_none_to_impassable() {
        let grid = CostGrid::from_signed(vec![vec![Some(0), None, Some(7)]]).unwrap();
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.cost_at(Coord::new(0, 0)), Ok(Cost::Finite(0)));
        assert_eq!(grid.cost_at(Coord::new(0, 1)), Ok(Cost::Impassable));
        assert_eq!(grid.is_passable(Coord::new(0, 2)), Ok(true));
        assert_eq!(grid.min_cost(), 0);
    }

    #[test]
    fn out_of_bounds_access() {
        let grid = open(2, 3);
        let coord = Coord::new(2, 0);
        assert_eq!(
            grid.cost_at(coord),
            Err(GridError::OutOfBounds {
                coord,
                rows: 2,
                cols: 3
            })
        );
        assert!(grid.is_passable(Coord::new(0, 3)).is_err());
        assert!(grid.in_bounds(Coord::new(1, 2)));
    }

    #[test]
    fn neighbors_filter_bounds_and_obstacles() {
        //  ___
        // |S# |
        // |   |
        //  ___
        let grid = CostGrid::from_signed(vec![
            vec![Some(1), None, Some(1)],
            vec![Some(2), Some(3), Some(1)],
        ])
        .unwrap();
        let corner: Vec<_> = grid.neighbors(&Coord::new(0, 0)).into_iter().collect();
        assert_eq!(corner, vec![(Coord::new(1, 0), 2)]);
        let middle: Vec<_> = grid.neighbors(&Coord::new(1, 1)).into_iter().collect();
        assert_eq!(
            middle,
            vec![(Coord::new(1, 2), 1), (Coord::new(1, 0), 2)]
        );
        assert!(grid.neighbors(&Coord::new(0, 1)).is_empty());
        assert!(grid.neighbors(&Coord::new(5, 5)).is_empty());
    }

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        //  ___
        // | # |
        // | # |
        //  ___
        let grid = CostGrid::from_signed(vec![
            vec![Some(1), None, Some(1)],
            vec![Some(1), None, Some(1)],
        ])
        .unwrap();
        let p1 = Coord::new(0, 0);
        let p2 = Coord::new(1, 0);
        let p3 = Coord::new(0, 2);
        let wall = Coord::new(0, 1);
        assert!(grid.reachable(&p1, &p2));
        assert!(grid.unreachable(&p1, &p3));
        assert!(grid.unreachable(&p1, &wall));
        assert!(grid.unreachable(&wall, &wall));
    }

    #[test]
    fn path_cost_validates_steps() {
        let grid = CostGrid::from_signed(vec![
            vec![Some(5), Some(1), Some(1)],
            vec![Some(1), None, Some(10)],
        ])
        .unwrap();
        let path = [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 2)];
        assert_eq!(grid.path_cost(&path), Some(12));
        assert_eq!(grid.path_cost(&path[..1]), Some(0));
        assert_eq!(grid.path_cost(&[]), None);
        assert_eq!(grid.path_cost(&[Coord::new(0, 0), Coord::new(1, 1)]), None);
        assert_eq!(grid.path_cost(&[Coord::new(0, 0), Coord::new(0, 2)]), None);
        assert_eq!(grid.path_cost(&[Coord::new(1, 1)]), None);
    }
}
