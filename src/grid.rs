use crate::cell::{Cell, Role};
use crate::error::GridError;
use core::fmt;
use grid_util::point::Point;
use log::debug;

/// [Grid] owns an N×N block of [Cell]s in row-major order. Roles are mutated
/// through [set_role](Grid::set_role), which keeps at most one [Role::Start]
/// and one [Role::End] on the grid at any time. Adjacency is 4-directional;
/// neighborhoods are computed on demand so they always reflect the current
/// obstacle layout.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cell_size: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a `rows`×`rows` grid of empty cells. `size` is the pixel edge
    /// of the whole board; each cell gets an edge of `size / rows` (display
    /// metadata only, the search never reads it).
    pub fn new(rows: usize, size: u32) -> Result<Grid, GridError> {
        if rows == 0 {
            return Err(GridError::ZeroRows);
        }
        let cell_size = size / rows as u32;
        let mut cells = Vec::with_capacity(rows * rows);
        for row in 0..rows {
            for col in 0..rows {
                cells.push(Cell::new(row, col, cell_size));
            }
        }
        Ok(Grid {
            rows,
            cell_size,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.rows && (p.y as usize) < self.rows
    }

    fn index(&self, p: Point) -> usize {
        p.y as usize * self.rows + p.x as usize
    }

    pub fn cell(&self, p: Point) -> Option<&Cell> {
        if self.in_bounds(p) {
            Some(&self.cells[self.index(p)])
        } else {
            None
        }
    }

    pub fn role(&self, p: Point) -> Option<Role> {
        self.cell(p).map(|c| c.role())
    }

    /// Assigns `role` to the cell at `p`. Assigning [Role::Start] or
    /// [Role::End] demotes the previous holder (if any) to [Role::Empty],
    /// so the uniqueness invariant holds unconditionally.
    pub fn set_role(&mut self, p: Point, role: Role) -> Result<(), GridError> {
        if !self.in_bounds(p) {
            return Err(GridError::OutOfBounds {
                x: p.x,
                y: p.y,
                rows: self.rows,
            });
        }
        if role == Role::Start || role == Role::End {
            if let Some(previous) = self.find_role(role) {
                if previous != p {
                    let ix = self.index(previous);
                    self.cells[ix].role = Role::Empty;
                }
            }
        }
        let ix = self.index(p);
        self.cells[ix].role = role;
        Ok(())
    }

    fn find_role(&self, role: Role) -> Option<Point> {
        self.cells.iter().find(|c| c.role() == role).map(|c| c.pos())
    }

    /// The unique cell marked [Role::Start], if one is set.
    pub fn start(&self) -> Option<Point> {
        self.find_role(Role::Start)
    }

    /// The unique cell marked [Role::End], if one is set.
    pub fn end(&self) -> Option<Point> {
        self.find_role(Role::End)
    }

    /// Up to four neighbors of `p` in the fixed order down, up, right, left
    /// (row+1, row-1, col+1, col-1), skipping out-of-bounds and
    /// [Role::Obstacle] cells. The order is part of the search contract: it
    /// decides which of several equally good cells is discovered first.
    ///
    /// Computed fresh on every call, never cached, so an obstacle edit is
    /// visible to the very next call.
    pub fn neighbors_of(&self, p: Point) -> Vec<Point> {
        let candidates = [
            Point::new(p.x, p.y + 1),
            Point::new(p.x, p.y - 1),
            Point::new(p.x + 1, p.y),
            Point::new(p.x - 1, p.y),
        ];
        candidates
            .into_iter()
            .filter(|&n| self.in_bounds(n) && !self.cells[self.index(n)].is_obstacle())
            .collect()
    }

    /// Row-major iterator over every position on the grid.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let n = self.rows;
        (0..n).flat_map(move |row| (0..n).map(move |col| Point::new(col as i32, row as i32)))
    }

    /// Number of cells currently holding `role`.
    pub fn role_count(&self, role: Role) -> usize {
        self.cells.iter().filter(|c| c.role() == role).count()
    }

    /// Clears the marks left behind by a search ([Role::Frontier],
    /// [Role::Visited], [Role::Path] become [Role::Empty]) while preserving
    /// obstacles, start and end. Callers must run this between searches on
    /// the same grid; the engine itself never resets roles.
    pub fn clear_search_roles(&mut self) {
        debug!("clearing search roles");
        for cell in &mut self.cells {
            if matches!(cell.role, Role::Frontier | Role::Visited | Role::Path) {
                cell.role = Role::Empty;
            }
        }
    }

    /// Resets every cell to [Role::Empty], obstacles and endpoints included.
    pub fn clear(&mut self) {
        debug!("clearing grid");
        for cell in &mut self.cells {
            cell.role = Role::Empty;
        }
    }
}

fn glyph(role: Role) -> char {
    match role {
        Role::Empty => '.',
        Role::Start => 'S',
        Role::End => 'E',
        Role::Obstacle => '#',
        Role::Frontier => 'o',
        Role::Visited => 'x',
        Role::Path => '*',
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.rows {
                let cell = &self.cells[row * self.rows + col];
                write!(f, "{}", glyph(cell.role()))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
