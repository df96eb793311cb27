//! Terrain kinds and the table that prices them, plus a builder that lays terrain out on a grid
//! before freezing it into a [CostGrid].
use crate::error::{GridError, GridResult};
use crate::grid::{Cost, CostGrid, Coord};
use log::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Terrain {
    #[default]
    Road,
    Water,
    Building,
}

/// Entry cost of each terrain kind. Buildings can never be entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerrainCosts {
    pub road: u32,
    pub water: u32,
}

impl Default for TerrainCosts {
    fn default() -> TerrainCosts {
        TerrainCosts { road: 1, water: 10 }
    }
}

impl TerrainCosts {
    pub fn cost(&self, terrain: Terrain) -> Cost {
        match terrain {
            Terrain::Road => Cost::Finite(self.road),
            Terrain::Water => Cost::Finite(self.water),
            Terrain::Building => Cost::Impassable,
        }
    }
}

/// Mutable terrain layout. Starts out as all road.
#[derive(Clone, Debug)]
pub struct GridBuilder {
    rows: usize,
    cols: usize,
    terrain: Vec<Terrain>,
}

impl GridBuilder {
    pub fn new(rows: usize, cols: usize) -> GridBuilder {
        GridBuilder {
            rows,
            cols,
            terrain: vec![Terrain::Road; rows * cols],
        }
    }
    /// Square layout, the shape used by the interactive map editor.
    pub fn square(size: usize) -> GridBuilder {
        GridBuilder::new(size, size)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, coord: Coord) -> Option<Terrain> {
        self.index(coord).map(|ix| self.terrain[ix])
    }

    /// Places `terrain` at `coord`. Coordinates outside the layout are rejected.
    pub fn set(&mut self, coord: Coord, terrain: Terrain) -> GridResult<&mut GridBuilder> {
        let Some(ix) = self.index(coord) else {
            return Err(GridError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            });
        };
        self.terrain[ix] = terrain;
        Ok(self)
    }

    /// Places `terrain` on every coordinate in `coords`.
    pub fn set_all<I>(&mut self, coords: I, terrain: Terrain) -> GridResult<&mut GridBuilder>
    where
        I: IntoIterator<Item = Coord>,
    {
        for coord in coords {
            self.set(coord, terrain)?;
        }
        Ok(self)
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.rows && coord.col < self.cols).then(|| coord.row * self.cols + coord.col)
    }

    /// Prices every cell with `costs` and produces the search grid.
    pub fn build(&self, costs: &TerrainCosts) -> GridResult<CostGrid> {
        if self.terrain.is_empty() {
            return Err(GridError::Empty);
        }
        debug!("Building {}x{} cost grid with {:?}", self.rows, self.cols, costs);
        let cells = self.terrain.iter().map(|&t| costs.cost(t)).collect();
        Ok(CostGrid::from_cells(self.rows, self.cols, cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_costs() {
        let costs = TerrainCosts::default();
        assert_eq!(costs.cost(Terrain::Road), Cost::Finite(1));
        assert_eq!(costs.cost(Terrain::Water), Cost::Finite(10));
        assert_eq!(costs.cost(Terrain::Building), Cost::Impassable);
    }

    #[test]
    fn builder_places_terrain() {
        let mut builder = GridBuilder::square(3);
        builder
            .set(Coord::new(1, 1), Terrain::Building)
            .unwrap()
            .set(Coord::new(0, 2), Terrain::Water)
            .unwrap();
        assert_eq!(builder.get(Coord::new(1, 1)), Some(Terrain::Building));
        assert_eq!(builder.get(Coord::new(0, 0)), Some(Terrain::Road));
        assert_eq!(builder.get(Coord::new(3, 0)), None);

        let grid = builder
            .build(&TerrainCosts { road: 2, water: 5 })
            .unwrap();
        assert_eq!(grid.cost_at(Coord::new(0, 0)), Ok(Cost::Finite(2)));
        assert_eq!(grid.cost_at(Coord::new(0, 2)), Ok(Cost::Finite(5)));
        assert_eq!(grid.cost_at(Coord::new(1, 1)), Ok(Cost::Impassable));
        assert_eq!(grid.min_cost(), 2);
    }

    #[test]
    fn builder_rejects_out_of_bounds() {
        let mut builder = GridBuilder::new(2, 4);
        let err = builder
            .set_all([Coord::new(0, 3), Coord::new(2, 0)], Terrain::Water)
            .unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                coord: Coord::new(2, 0),
                rows: 2,
                cols: 4
            }
        );
        assert!(GridBuilder::new(0, 4)
            .build(&TerrainCosts::default())
            .is_err());
    }
}
