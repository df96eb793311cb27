use terrain_pathfinding::{
    find_path, render_path, Coord, GridBuilder, SearchResult, Terrain, TerrainCosts,
};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |~ E|
//  ___
// where
// - # marks a building
// - ~ marks water
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    env_logger::init();
    let mut layout = GridBuilder::square(3);
    layout
        .set(Coord::new(1, 1), Terrain::Building)
        .and_then(|l| l.set(Coord::new(2, 0), Terrain::Water))
        .expect("coordinates lie on the grid");
    println!("{}", layout);
    let grid = layout
        .build(&TerrainCosts::default())
        .expect("layout is not empty");
    let start = Coord::new(0, 0);
    let end = Coord::new(2, 2);
    match find_path(&grid, start, end).expect("endpoints lie on the grid") {
        SearchResult::Found(path) => {
            println!("Path:");
            for p in &path {
                println!("{}", p);
            }
            print!("{}", render_path(&layout, &path));
            println!("Cost: {}", path.cost());
        }
        SearchResult::Unreachable => println!("No path found."),
    }
}
