use crate::grid::Coord;
use core::fmt;
use itertools::Itertools;

/// A least-cost route from start to goal, both included. Consecutive cells are 4-adjacent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    coords: Vec<Coord>,
    cost: u64,
}

impl Path {
    pub(crate) fn new(coords: Vec<Coord>, cost: u64) -> Path {
        debug_assert!(!coords.is_empty());
        debug_assert!(coords.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b)));
        Path { coords, cost }
    }
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }
    pub fn into_coords(self) -> Vec<Coord> {
        self.coords
    }
    /// Total cost of every entered cell; the start cell is never charged.
    pub fn cost(&self) -> u64 {
        self.cost
    }
    /// Number of cells on the path, including start and goal.
    pub fn len(&self) -> usize {
        self.coords.len()
    }
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
    pub fn start(&self) -> Coord {
        self.coords[0]
    }
    pub fn goal(&self) -> Coord {
        self.coords[self.coords.len() - 1]
    }
    pub fn contains(&self, coord: &Coord) -> bool {
        self.coords.contains(coord)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.coords.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;
    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (cost {})", self.coords.iter().join(" -> "), self.cost)
    }
}

/// Outcome of a search. Running out of cells to explore is a regular result, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    Found(Path),
    Unreachable,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchResult::Found(path) => Some(path),
            SearchResult::Unreachable => None,
        }
    }
    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchResult::Found(path) => Some(path),
            SearchResult::Unreachable => None,
        }
    }
    pub fn cost(&self) -> Option<u64> {
        self.path().map(Path::cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_cells_and_cost() {
        let path = Path::new(vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)], 2);
        assert_eq!(path.to_string(), "(0, 0) -> (0, 1) -> (1, 1) (cost 2)");
        assert_eq!(path.start(), Coord::new(0, 0));
        assert_eq!(path.goal(), Coord::new(1, 1));
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn result_accessors() {
        let found = SearchResult::Found(Path::new(vec![Coord::new(2, 2)], 0));
        assert!(found.is_found());
        assert_eq!(found.cost(), Some(0));
        assert!(SearchResult::Unreachable.path().is_none());
        assert!(SearchResult::Unreachable.into_path().is_none());
    }
}
