use fxhash::FxHashSet;
use grid_util::point::Point;
use log::{debug, info};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::cell::Role;
use crate::error::GridError;
use crate::grid::Grid;
use crate::progress::{ProgressSink, SearchControl};
use crate::scores::ScoreStore;

/// Result of a completed [search] run. [NotFound](SearchOutcome::NotFound)
/// means the open set was exhausted, so no path exists through the current
/// obstacles; [Cancelled](SearchOutcome::Cancelled) means the sink aborted
/// the run and the grid marks and scores are incomplete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found {
        /// Total path cost, `g(end)`. Every edge costs 1, so this is the
        /// number of steps from start to end.
        cost: i32,
        /// The shortest path, start and end inclusive:
        /// `path.len() == cost + 1`.
        path: Vec<Point>,
    },
    NotFound,
    Cancelled,
}

/// Open set entry. [BinaryHeap] is a max-heap without membership testing or
/// decrease-key, so ordering is inverted here, [search] mirrors queue
/// contents in a side set, and an improved cell is pushed again rather than
/// re-keyed: `cost` is the g-value at push time, and a popped entry whose
/// `cost` exceeds the current g is a superseded duplicate to skip.
struct OpenEntry {
    estimated_cost: i32,
    cost: i32,
    count: u64,
    pos: Point,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.count.eq(&other.count)
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then FIFO per insertion count,
        // so cells with equal f expand in discovery order and reruns on an
        // identical grid reproduce the same expansion sequence.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.count.cmp(&self.count),
            s => s,
        }
    }
}

/// Runs A* over `grid` from `start` to `end`.
///
/// Preconditions: `start` and `end` are in bounds and distinct, otherwise
/// this fails with [GridError] before touching the grid. Neighborhoods are
/// computed per expansion by [Grid::neighbors_of], so the obstacle layout at
/// call time is the one searched; no caller-side recompute step exists.
///
/// The engine marks discovered cells [Role::Frontier], expanded cells
/// [Role::Visited] and, on success, path cells [Role::Path], then restores
/// the [Role::End]/[Role::Start] marks. It never clears roles from an
/// earlier run; callers reset the grid between runs with
/// [Grid::clear_search_roles]. `scores` is fully overwritten on entry and
/// holds this run's g/h/f values afterwards.
///
/// `sink` observes the run once after every expansion step and once per
/// cell marked during reconstruction; returning [SearchControl::Cancel]
/// from any observation aborts with [SearchOutcome::Cancelled].
pub fn search<S: ProgressSink>(
    grid: &mut Grid,
    scores: &mut ScoreStore,
    start: Point,
    end: Point,
    sink: &mut S,
) -> Result<SearchOutcome, GridError> {
    for p in [start, end] {
        if !grid.in_bounds(p) {
            return Err(GridError::OutOfBounds {
                x: p.x,
                y: p.y,
                rows: grid.rows(),
            });
        }
    }
    if start == end {
        return Err(GridError::StartIsEnd);
    }
    info!(
        "searching {0}x{0} grid from {1} to {2}",
        grid.rows(),
        start,
        end
    );
    scores.prepare(grid, start, end);

    let mut count: u64 = 0;
    let mut open = BinaryHeap::new();
    let mut in_open: FxHashSet<Point> = FxHashSet::default();
    open.push(OpenEntry {
        estimated_cost: scores.f(start),
        cost: 0,
        count,
        pos: start,
    });
    in_open.insert(start);

    let mut expanded = 0usize;
    let mut visited = 0usize;
    while let Some(OpenEntry {
        cost,
        pos: current,
        ..
    }) = open.pop()
    {
        // A cell relaxed again while queued gets a fresh entry instead of a
        // re-keyed one; whatever popped with an outdated g is skipped.
        if cost > scores.g(current) {
            continue;
        }
        in_open.remove(&current);
        expanded += 1;

        if current == end {
            let path = match trace_path(grid, scores, start, end, sink)? {
                Some(path) => path,
                None => {
                    info!("search cancelled during path reconstruction");
                    return Ok(SearchOutcome::Cancelled);
                }
            };
            grid.set_role(end, Role::End)?;
            grid.set_role(start, Role::Start)?;
            let total = scores.g(end);
            info!("found path of cost {total} after visiting {visited} cells");
            return Ok(SearchOutcome::Found { cost: total, path });
        }

        for neighbor in grid.neighbors_of(current) {
            let tentative = scores.g(current) + 1;
            if tentative < scores.g(neighbor) {
                scores.relax(current, neighbor, tentative, end);
                count += 1;
                open.push(OpenEntry {
                    estimated_cost: scores.f(neighbor),
                    cost: tentative,
                    count,
                    pos: neighbor,
                });
                if in_open.insert(neighbor) {
                    grid.set_role(neighbor, Role::Frontier)?;
                }
            }
        }

        debug!("expanded {} (f = {})", current, scores.f(current));
        if sink.observe(grid, scores) == SearchControl::Cancel {
            info!("search cancelled after {expanded} expansions");
            return Ok(SearchOutcome::Cancelled);
        }
        if current != start {
            grid.set_role(current, Role::Visited)?;
            visited += 1;
        }
    }
    info!("open set exhausted after visiting {visited} cells, no path exists");
    Ok(SearchOutcome::NotFound)
}

/// Walks the came-from chain lazily from `end` back to, but excluding,
/// `start`, marking each walked cell [Role::Path] and observing the sink
/// once per mark. The chain is traversed exactly once. Returns the full
/// start-to-end path, or [None] when the sink cancels mid-walk.
fn trace_path<S: ProgressSink>(
    grid: &mut Grid,
    scores: &ScoreStore,
    start: Point,
    end: Point,
    sink: &mut S,
) -> Result<Option<Vec<Point>>, GridError> {
    let mut path: Vec<Point> = Vec::new();
    let walk = itertools::unfold(end, |cur| {
        scores.predecessor(*cur).map(|prev| {
            let here = *cur;
            *cur = prev;
            here
        })
    });
    for cell in walk {
        grid.set_role(cell, Role::Path)?;
        path.push(cell);
        if sink.observe(grid, scores) == SearchControl::Cancel {
            return Ok(None);
        }
    }
    path.push(start);
    path.reverse();
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoProgress;

    #[test]
    fn coincident_endpoints_rejected() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut scores = ScoreStore::new();
        let p = Point::new(1, 1);
        let err = search(&mut grid, &mut scores, p, p, &mut NoProgress).unwrap_err();
        assert_eq!(err, GridError::StartIsEnd);
    }

    #[test]
    fn out_of_bounds_endpoints_rejected() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut scores = ScoreStore::new();
        let inside = Point::new(0, 0);
        let outside = Point::new(0, 3);
        for (a, b) in [(outside, inside), (inside, outside)] {
            let err = search(&mut grid, &mut scores, a, b, &mut NoProgress).unwrap_err();
            assert_eq!(
                err,
                GridError::OutOfBounds {
                    x: outside.x,
                    y: outside.y,
                    rows: 3
                }
            );
        }
        // Precondition failures leave the grid untouched.
        assert_eq!(grid.role_count(Role::Empty), 9);
    }

    #[test]
    fn adjacent_cells_path_directly() {
        let mut grid = Grid::new(2, 2).unwrap();
        let mut scores = ScoreStore::new();
        let start = Point::new(0, 0);
        let end = Point::new(1, 0);
        let outcome = search(&mut grid, &mut scores, start, end, &mut NoProgress).unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Found {
                cost: 1,
                path: vec![start, end],
            }
        );
        assert_eq!(grid.role(start), Some(Role::Start));
        assert_eq!(grid.role(end), Some(Role::End));
    }

    #[test]
    fn open_entries_order_by_priority_then_insertion() {
        let mut heap = BinaryHeap::new();
        for (estimated_cost, count) in [(5, 1), (3, 2), (3, 3), (7, 4)] {
            heap.push(OpenEntry {
                estimated_cost,
                cost: 0,
                count,
                pos: Point::new(0, 0),
            });
        }
        let order: Vec<(i32, u64)> = std::iter::from_fn(|| heap.pop())
            .map(|e| (e.estimated_cost, e.count))
            .collect();
        assert_eq!(order, vec![(3, 2), (3, 3), (5, 1), (7, 4)]);
    }
}
