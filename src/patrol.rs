use bitvec::prelude::*;
use rustc_hash::FxHashSet;

use crate::grid::{Grid, Heading, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {Exited, Looped}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {Turned, Moved, Exited}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Guard {pub pos: Position, pub heading: Heading}

impl Guard {
    pub fn new(pos: Position, heading: Heading) -> Self {Guard {pos, heading}}

    /// Turns right if the cell ahead is blocked, otherwise steps into it.
    /// Leaves the guard untouched when the step would leave the grid.
    pub fn advance(&mut self, grid: &Grid) -> Step {
        let Some(next) = grid.forward(self.pos, self.heading) else {return Step::Exited};
        if grid.is_blocked(next) {
            self.heading = self.heading.turn_right();
            Step::Turned
        } else {
            self.pos = next;
            Step::Moved
        }
    }
}

/// Every `(position, heading)` seen during one walk.
struct StateSet(BitVec);

impl StateSet {
    fn seeded(grid: &Grid, guard: Guard) -> Self {
        let mut states = StateSet(bitvec![0; grid.state_count()]);
        states.insert(grid, guard);
        states
    }

    /// False if the state was already there.
    fn insert(&mut self, grid: &Grid, guard: Guard) -> bool {
        !self.0.replace(grid.state_index(guard.pos, guard.heading), true)
    }
}

#[derive(Clone, Debug)]
pub struct Route {
    pub visited: FxHashSet<Position>,
    pub outcome: Outcome,
}

/// Walks the guard until it leaves the grid, collecting every position it stands on.
///
/// States are tracked as well, so a guard that can never get out ends the walk with
/// `Outcome::Looped` instead of spinning forever.
pub fn run_to_exit(grid: &Grid, start: Position, heading: Heading) -> Route {
    let mut guard = Guard::new(start, heading);
    let mut visited = FxHashSet::default();
    visited.insert(start);
    let mut states = StateSet::seeded(grid, guard);

    loop {
        match guard.advance(grid) {
            Step::Exited => return Route {visited, outcome: Outcome::Exited},
            Step::Moved => {visited.insert(guard.pos);},
            Step::Turned => (),
        }
        if !states.insert(grid, guard) {
            log::warn!("guard starting at {:?} facing {:?} never leaves the grid", start, heading);
            return Route {visited, outcome: Outcome::Looped};
        }
    }
}

pub fn run_with_loop_detection(grid: &Grid, start: Position, heading: Heading) -> Outcome {
    detect_loop(grid, start, heading).0
}

/// Outcome plus the number of transitions (turns and moves) taken to reach it.
fn detect_loop(grid: &Grid, start: Position, heading: Heading) -> (Outcome, usize) {
    let mut guard = Guard::new(start, heading);
    let mut states = StateSet::seeded(grid, guard);
    let mut transitions = 0;

    loop {
        if guard.advance(grid) == Step::Exited {return (Outcome::Exited, transitions)}
        transitions += 1;
        if !states.insert(grid, guard) {return (Outcome::Looped, transitions)}
    }
}
