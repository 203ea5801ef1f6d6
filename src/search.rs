use std::ops::Deref;

use itertools::Itertools;
use rayon::prelude::*;

use crate::grid::{Grid, Heading, Position};
use crate::patrol::{run_to_exit, run_with_loop_detection, Outcome};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Spread trials over the rayon pool, one private grid copy per worker.
    pub parallel: bool,
    /// Only try cells the unobstructed guard walks over.
    pub route_only: bool,
}

/// A temporary obstruction, taken out again when dropped.
struct Obstruction<'a> {
    grid: &'a mut Grid,
    pos: Position,
}

impl<'a> Obstruction<'a> {
    fn place(grid: &'a mut Grid, pos: Position) -> Self {
        debug_assert!(!grid.is_blocked(pos));
        grid.set_blocked(pos, true);
        Obstruction {grid, pos}
    }
}

impl Deref for Obstruction<'_> {
    type Target = Grid;
    fn deref(&self) -> &Grid {&*self.grid}
}

impl Drop for Obstruction<'_> {
    fn drop(&mut self) {self.grid.set_blocked(self.pos, false)}
}

fn induces_loop(grid: &mut Grid, cell: Position, start: Position, heading: Heading) -> bool {
    let trial = Obstruction::place(grid, cell);
    let looped = run_with_loop_detection(&trial, start, heading) == Outcome::Looped;
    if looped {log::trace!("obstruction at {:?} traps the guard", cell)}
    looped
}

/// Open cells other than the start that an obstruction could go on.
///
/// With `route_only`, only cells on the guard's unobstructed route are kept: anything off
/// the route is never reached, so blocking it changes nothing. That shortcut only holds
/// when the unobstructed guard gets out, so a looping start falls back to every cell.
pub fn candidates(grid: &Grid, start: Position, heading: Heading, route_only: bool) -> Vec<Position> {
    if route_only {
        let route = run_to_exit(grid, start, heading);
        if route.outcome == Outcome::Exited {
            return route.visited.into_iter().filter(|&pos| pos != start).sorted().collect();
        }
    }
    grid.positions().filter(|&pos| pos != start && !grid.is_blocked(pos)).collect()
}

/// Counts the single obstructions that leave the guard walking in circles, trying every
/// open cell except the start. The grid is back to its original state on return.
pub fn count_loop_inducing_obstructions(grid: &mut Grid, start: Position, heading: Heading) -> usize {
    search(grid, start, heading, SearchOptions::default())
}

pub fn search(grid: &mut Grid, start: Position, heading: Heading, options: SearchOptions) -> usize {
    let cells = candidates(grid, start, heading, options.route_only);
    log::debug!("trying {} obstruction candidates on a {}x{} grid ({:?})",
                cells.len(), grid.rows(), grid.cols(), options);

    if options.parallel {
        let base: &Grid = grid;
        cells.par_iter()
             .map_init(|| base.clone(), |trial, &cell| induces_loop(trial, cell, start, heading))
             .filter(|&looped| looped)
             .count()
    } else {
        cells.into_iter().filter(|&cell| induces_loop(grid, cell, start, heading)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn obstruction_is_removed_on_drop() {
        let mut grid = Grid::new(2, 2);
        {
            let trial = Obstruction::place(&mut grid, Position::new(0, 1));
            assert!(trial.is_blocked(Position::new(0, 1)));
        }
        assert_eq!(grid, Grid::new(2, 2));
    }

    #[test]
    fn obstruction_is_removed_on_unwind() {
        let mut grid = Grid::new(2, 2);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _trial = Obstruction::place(&mut grid, Position::new(1, 0));
            panic!("trial blew up");
        }));
        assert!(result.is_err());
        assert_eq!(grid, Grid::new(2, 2));
    }

    #[test]
    fn candidates_skip_start_and_walls() {
        let mut grid = Grid::new(2, 2);
        grid.set_blocked(Position::new(0, 0), true);
        let cells = candidates(&grid, Position::new(1, 1), Heading::Up, false);
        assert_eq!(cells, vec![Position::new(0, 1), Position::new(1, 0)]);
    }

    #[test]
    fn route_candidates_follow_the_walk() {
        let grid = Grid::new(3, 3);
        let cells = candidates(&grid, Position::new(2, 1), Heading::Up, true);
        assert_eq!(cells, vec![Position::new(0, 1), Position::new(1, 1)]);
    }

    #[test]
    fn empty_grid_has_no_traps() {
        let mut grid = Grid::new(4, 4);
        assert_eq!(count_loop_inducing_obstructions(&mut grid, Position::new(3, 0), Heading::Up), 0);
        assert_eq!(grid, Grid::new(4, 4));
    }
}
