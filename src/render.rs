//! Plain-text views of grids and paths.
use crate::grid::{Cost, CostGrid, Coord};
use crate::path::Path;
use crate::terrain::{GridBuilder, Terrain};
use core::fmt;
use itertools::Itertools;

impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.iter_rows() {
            let values = row
                .iter()
                .map(|c| match c {
                    Cost::Finite(c) => c.to_string(),
                    Cost::Impassable => "#".to_owned(),
                })
                .join(" ");
            writeln!(f, "{}", values)?;
        }
        Ok(())
    }
}

fn terrain_glyph(terrain: Terrain) -> char {
    match terrain {
        Terrain::Road => '.',
        Terrain::Water => 'A',
        Terrain::Building => 'E',
    }
}

impl fmt::Display for GridBuilder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() {
            let line = (0..self.cols())
                .filter_map(|col| self.get(Coord::new(row, col)).map(terrain_glyph))
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Draws `path` over the terrain `layout`: `I` marks the start, `D` the goal and `C` every cell
/// in between. Cells off the path show their terrain.
pub fn render_path(layout: &GridBuilder, path: &Path) -> String {
    let (start, goal) = (path.start(), path.goal());
    (0..layout.rows())
        .map(|row| {
            (0..layout.cols())
                .map(|col| {
                    let coord = Coord::new(row, col);
                    if coord == start {
                        'I'
                    } else if coord == goal {
                        'D'
                    } else if path.contains(&coord) {
                        'C'
                    } else {
                        layout.get(coord).map_or(' ', terrain_glyph)
                    }
                })
                .join(" ")
        })
        .map(|line| line + "\n")
        .collect()
}
