//! # grid_astar
//!
//! The search core of an interactive grid pathfinding demonstrator:
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over a mutable
//! N×N cell grid with 4-directional, uniform-cost movement and the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry)
//! heuristic. The engine reports progress to a caller-supplied
//! [ProgressSink] after every expansion step, which makes the search
//! observable (for step-by-step visualization) and cooperatively
//! cancellable.
//!
//! Rendering, input handling and the event loop are host concerns; the
//! host builds a [Grid], marks start, end and obstacles, and calls
//! [search] with a sink that redraws:
//!
//! ```
//! use grid_astar::{search, Grid, NoProgress, Role, ScoreStore, SearchOutcome};
//! use grid_util::point::Point;
//!
//! let mut grid = Grid::new(5, 5).unwrap();
//! let start = Point::new(0, 0);
//! let end = Point::new(4, 4);
//! grid.set_role(start, Role::Start).unwrap();
//! grid.set_role(end, Role::End).unwrap();
//! grid.set_role(Point::new(1, 1), Role::Obstacle).unwrap();
//!
//! let mut scores = ScoreStore::new();
//! let outcome = search(&mut grid, &mut scores, start, end, &mut NoProgress).unwrap();
//! assert!(matches!(outcome, SearchOutcome::Found { cost: 8, .. }));
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod progress;
pub mod scores;
pub mod search;

pub use cell::{Cell, Role};
pub use error::GridError;
pub use grid::Grid;
pub use progress::{NoProgress, ProgressSink, SearchControl, SinkFn};
pub use scores::{heuristic, ScoreStore, INFINITY};
pub use search::{search, SearchOutcome};
