use grid_util::point::Point;
use std::hash::{Hash, Hasher};

/// The mutable state of a [Cell]. [Role::Frontier] and [Role::Visited]
/// correspond to open and closed set membership during a search;
/// [Role::Path] marks cells on a reconstructed path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Empty,
    Start,
    End,
    Obstacle,
    Frontier,
    Visited,
    Path,
}

/// A single grid position. Identity is the position alone: two cells at the
/// same position compare equal and hash identically no matter their roles,
/// so a cell stays a valid map or set key while a search mutates its role.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pos: Point,
    size: u32,
    pub(crate) role: Role,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize, size: u32) -> Cell {
        Cell {
            pos: Point::new(col as i32, row as i32),
            size,
            role: Role::Empty,
        }
    }

    /// Position of the cell, with `x` the column and `y` the row.
    pub fn pos(&self) -> Point {
        self.pos
    }
    pub fn row(&self) -> usize {
        self.pos.y as usize
    }
    pub fn col(&self) -> usize {
        self.pos.x as usize
    }
    pub fn role(&self) -> Role {
        self.role
    }
    /// Pixel edge length, display metadata only.
    pub fn size(&self) -> u32 {
        self.size
    }
    /// Top-left pixel corner for a renderer: (col * size, row * size).
    pub fn origin(&self) -> (u32, u32) {
        (self.col() as u32 * self.size, self.row() as u32 * self.size)
    }

    pub fn is_obstacle(&self) -> bool {
        self.role == Role::Obstacle
    }
    pub fn is_start(&self) -> bool {
        self.role == Role::Start
    }
    pub fn is_end(&self) -> bool {
        self.role == Role::End
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;

    #[test]
    fn identity_ignores_role() {
        let mut a = Cell::new(3, 4, 10);
        let b = Cell::new(3, 4, 10);
        a.role = Role::Obstacle;
        assert_eq!(a, b);

        let mut set = FxHashSet::default();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn position_accessors() {
        let cell = Cell::new(2, 7, 32);
        assert_eq!(cell.row(), 2);
        assert_eq!(cell.col(), 7);
        assert_eq!(cell.pos(), Point::new(7, 2));
        assert_eq!(cell.origin(), (7 * 32, 2 * 32));
        assert_eq!(cell.role(), Role::Empty);
    }
}
