use bitvec::prelude::*;
use itertools::iproduct;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {Up, Right, Down, Left}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    pub fn turn_right(self) -> Self {
        match self {
            Heading::Up => Heading::Right, Heading::Right => Heading::Down,
            Heading::Down => Heading::Left, Heading::Left => Heading::Up,
        }
    }

    /// Unit step as `(drow, dcol)`.
    pub fn step(self) -> (isize, isize) {
        match self {
            Heading::Up => (-1, 0), Heading::Right => (0, 1),
            Heading::Down => (1, 0), Heading::Left => (0, -1),
        }
    }

    fn index(self) -> usize {self as usize}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {pub row: usize, pub col: usize}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {Position {row, col}}
}

/// Row-major rectangle of cells, one bit per cell, set when the cell is blocked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    blocked: BitVec,
}

impl Grid {
    /// A grid with every cell passable.
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {rows, cols, blocked: bitvec![0; rows * cols]}
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, blocked: BitVec) -> Self {
        assert_eq!(blocked.len(), rows * cols, "cell count does not match {}x{}", rows, cols);
        Grid {rows, cols, blocked}
    }

    pub fn rows(&self) -> usize {self.rows}
    pub fn cols(&self) -> usize {self.cols}

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> usize {
        assert!(self.contains(pos), "{:?} is outside the {}x{} grid", pos, self.rows, self.cols);
        pos.row * self.cols + pos.col
    }

    pub fn is_blocked(&self, pos: Position) -> bool {self.blocked[self.index(pos)]}

    pub fn set_blocked(&mut self, pos: Position, blocked: bool) {
        let ix = self.index(pos);
        self.blocked.set(ix, blocked);
    }

    pub fn blocked_count(&self) -> usize {self.blocked.count_ones()}

    /// The cell one step ahead, or `None` once that step would leave the grid.
    pub fn forward(&self, pos: Position, heading: Heading) -> Option<Position> {
        let (drow, dcol) = heading.step();
        let next = Position::new(pos.row.checked_add_signed(drow)?, pos.col.checked_add_signed(dcol)?);
        self.contains(next).then_some(next)
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        iproduct!(0 .. self.rows, 0 .. self.cols).map(|(row, col)| Position::new(row, col))
    }

    /// Number of distinct `(position, heading)` states on this grid.
    pub(crate) fn state_count(&self) -> usize {self.rows * self.cols * Heading::ALL.len()}

    pub(crate) fn state_index(&self, pos: Position, heading: Heading) -> usize {
        self.index(pos) * Heading::ALL.len() + heading.index()
    }
}
