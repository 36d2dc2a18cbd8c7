use fxhash::{FxBuildHasher, FxHashMap};
use grid_util::point::Point;
use indexmap::IndexMap;

use crate::grid::Grid;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Score of a cell no run has reached yet.
pub const INFINITY: i32 = i32::MAX;

/// Manhattan distance between two positions. With unit edge costs and
/// 4-directional movement this is admissible and consistent, so the search
/// that uses it as its heuristic stays optimal.
pub fn heuristic(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Per-run search bookkeeping: the g/h/f maps and the came-from chain.
///
/// A [ScoreStore] is owned by the caller so scores stay readable after a run
/// (a visualizer draws them per cell), but it belongs to exactly one search
/// at a time: [search](crate::search::search) borrows it mutably and fully
/// overwrites it on entry, so nothing leaks from one run into the next.
#[derive(Clone, Debug, Default)]
pub struct ScoreStore {
    g: FxHashMap<Point, i32>,
    h: FxHashMap<Point, i32>,
    f: FxHashMap<Point, i32>,
    came_from: FxIndexMap<Point, Point>,
}

impl ScoreStore {
    pub fn new() -> ScoreStore {
        ScoreStore::default()
    }

    /// Re-initializes the store for a run from `start` towards `end`: every
    /// cell of `grid` scores [INFINITY], except the start which gets
    /// `g = 0` and `f = h`.
    pub(crate) fn prepare(&mut self, grid: &Grid, start: Point, end: Point) {
        self.g.clear();
        self.h.clear();
        self.f.clear();
        self.came_from.clear();
        for p in grid.points() {
            self.g.insert(p, INFINITY);
            self.h.insert(p, INFINITY);
            self.f.insert(p, INFINITY);
        }
        let h_start = heuristic(start, end);
        self.g.insert(start, 0);
        self.h.insert(start, h_start);
        self.f.insert(start, h_start);
    }

    /// Records an improved route to `to` through `from` with path cost
    /// `tentative_g`.
    pub(crate) fn relax(&mut self, from: Point, to: Point, tentative_g: i32, end: Point) {
        let h = heuristic(to, end);
        self.came_from.insert(to, from);
        self.g.insert(to, tentative_g);
        self.h.insert(to, h);
        self.f.insert(to, tentative_g + h);
    }

    /// Cost of the best known path from the start to `p`.
    pub fn g(&self, p: Point) -> i32 {
        self.g.get(&p).copied().unwrap_or(INFINITY)
    }

    /// Heuristic estimate from `p` to the end, once `p` has been scored.
    pub fn h(&self, p: Point) -> i32 {
        self.h.get(&p).copied().unwrap_or(INFINITY)
    }

    /// Priority `g + h` of `p`.
    pub fn f(&self, p: Point) -> i32 {
        self.f.get(&p).copied().unwrap_or(INFINITY)
    }

    /// Whether the run has assigned `p` a finite priority. Renderers use
    /// this to skip drawing scores on untouched cells.
    pub fn scored(&self, p: Point) -> bool {
        self.f(p) != INFINITY
    }

    /// Predecessor of `p` on the best known path, if `p` has been relaxed.
    pub fn predecessor(&self, p: Point) -> Option<Point> {
        self.came_from.get(&p).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_is_manhattan() {
        let a = Point::new(0, 0);
        let b = Point::new(4, 4);
        assert_eq!(heuristic(a, b), 8);
        assert_eq!(heuristic(Point::new(1, 7), Point::new(3, 2)), 7);
    }

    #[test]
    fn heuristic_zero_on_itself_and_symmetric() {
        for p in [Point::new(0, 0), Point::new(5, 3), Point::new(2, 9)] {
            assert_eq!(heuristic(p, p), 0);
        }
        let a = Point::new(1, 2);
        let b = Point::new(6, 0);
        assert_eq!(heuristic(a, b), heuristic(b, a));
    }

    #[test]
    fn prepare_seeds_start_and_wipes_previous_run() {
        let grid = Grid::new(4, 4).unwrap();
        let start = Point::new(0, 0);
        let end = Point::new(3, 3);
        let mut scores = ScoreStore::new();
        scores.prepare(&grid, start, end);

        assert_eq!(scores.g(start), 0);
        assert_eq!(scores.h(start), 6);
        assert_eq!(scores.f(start), 6);
        assert_eq!(scores.g(Point::new(2, 2)), INFINITY);
        assert!(scores.scored(start));
        assert!(!scores.scored(Point::new(1, 0)));

        scores.relax(start, Point::new(1, 0), 1, end);
        assert_eq!(scores.predecessor(Point::new(1, 0)), Some(start));

        // A second run starts from a clean slate.
        scores.prepare(&grid, end, start);
        assert_eq!(scores.g(end), 0);
        assert_eq!(scores.g(start), INFINITY);
        assert_eq!(scores.predecessor(Point::new(1, 0)), None);
    }

    #[test]
    fn unknown_points_score_infinity() {
        let scores = ScoreStore::new();
        assert_eq!(scores.g(Point::new(1, 1)), INFINITY);
        assert_eq!(scores.f(Point::new(1, 1)), INFINITY);
        assert_eq!(scores.predecessor(Point::new(1, 1)), None);
    }
}
