use grid_astar::{search, Grid, NoProgress, Role, ScoreStore, SearchOutcome};
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ---
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Cells have a 4-neighborhood, so the path has to go around the obstacle.
fn main() {
    let mut grid = Grid::new(3, 3).unwrap();
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    grid.set_role(start, Role::Start).unwrap();
    grid.set_role(end, Role::End).unwrap();
    grid.set_role(Point::new(1, 1), Role::Obstacle).unwrap();

    let mut scores = ScoreStore::new();
    match search(&mut grid, &mut scores, start, end, &mut NoProgress).unwrap() {
        SearchOutcome::Found { cost, path } => {
            println!("A path of cost {cost} has been found:");
            for p in path {
                println!("{p:?}");
            }
            println!("{grid}");
        }
        outcome => println!("No path: {outcome:?}"),
    }
}
