use std::fmt;
use std::str::FromStr;

use bitvec::prelude::*;
use thiserror::Error;

use crate::grid::{Grid, Heading, Position};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("the lab map is empty")]
    Empty,
    #[error("row {row} is {found} cells wide, expected {expected}")]
    Jagged {row: usize, expected: usize, found: usize},
    #[error("unexpected cell {cell:?} at row {row}, column {col}")]
    UnexpectedCell {row: usize, col: usize, cell: char},
    #[error("no guard on the lab map")]
    MissingGuard,
    #[error("second guard at {second:?}, the first one is at {first:?}")]
    MultipleGuards {first: Position, second: Position},
}

/// A parsed lab: open and blocked cells plus where the guard starts and which way it faces.
/// The guard's own cell is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lab {
    pub grid: Grid,
    pub start: Position,
    pub heading: Heading,
}

fn guard_heading(cell: char) -> Option<Heading> {
    match cell {
        '^' => Some(Heading::Up), '>' => Some(Heading::Right),
        'v' => Some(Heading::Down), '<' => Some(Heading::Left),
        _ => None
    }
}

fn guard_symbol(heading: Heading) -> char {
    match heading {
        Heading::Up => '^', Heading::Right => '>',
        Heading::Down => 'v', Heading::Left => '<',
    }
}

impl Lab {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let lines = input.trim().lines().collect::<Vec<_>>();
        let Some(first) = lines.first() else {return Err(ParseError::Empty)};
        let cols = first.chars().count();

        let mut blocked: BitVec = BitVec::with_capacity(lines.len() * cols);
        let mut guard: Option<(Position, Heading)> = None;
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {return Err(ParseError::Jagged {row, expected: cols, found})}

            for (col, cell) in line.chars().enumerate() {
                match cell {
                    '.' => blocked.push(false),
                    '#' => blocked.push(true),
                    _ => {
                        let Some(heading) = guard_heading(cell) else {
                            return Err(ParseError::UnexpectedCell {row, col, cell})
                        };
                        let pos = Position::new(row, col);
                        if let Some((first, _)) = guard {
                            return Err(ParseError::MultipleGuards {first, second: pos});
                        }
                        guard = Some((pos, heading));
                        blocked.push(false);
                    }
                }
            }
        }

        let Some((start, heading)) = guard else {return Err(ParseError::MissingGuard)};
        Ok(Lab {grid: Grid::from_cells(lines.len(), cols, blocked), start, heading})
    }
}

impl FromStr for Lab {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {Lab::parse(s)}
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0 .. self.grid.rows() {
            for col in 0 .. self.grid.cols() {
                let pos = Position::new(row, col);
                let cell = if pos == self.start {guard_symbol(self.heading)}
                           else if self.grid.is_blocked(pos) {'#'} else {'.'};
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
