use grid_astar::{search, Grid, Role, ScoreStore, SearchControl, SinkFn};
use grid_util::point::Point;

// Runs a search on a 10x10 grid with a wall and prints one frame per
// engine step, the way a visualizer would redraw. The sink doubles as the
// cancellation signal; here it never cancels.
fn main() {
    let mut grid = Grid::new(10, 10).unwrap();
    let start = Point::new(0, 0);
    let end = Point::new(9, 9);
    grid.set_role(start, Role::Start).unwrap();
    grid.set_role(end, Role::End).unwrap();
    // A wall with a single gap at the bottom.
    for y in 0..9 {
        grid.set_role(Point::new(4, y), Role::Obstacle).unwrap();
    }

    let mut frame = 0;
    let mut sink = SinkFn(|grid: &Grid, scores: &ScoreStore| {
        frame += 1;
        println!("frame {frame} (f(end) = {}):", scores.f(end));
        println!("{grid}");
        SearchControl::Continue
    });

    let mut scores = ScoreStore::new();
    let outcome = search(&mut grid, &mut scores, start, end, &mut sink).unwrap();
    println!("outcome after {frame} frames: {outcome:?}");
    println!(
        "visited {} cells, path cells {}",
        grid.role_count(Role::Visited),
        grid.role_count(Role::Path)
    );
}
