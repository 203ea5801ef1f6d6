use std::collections::BTreeMap;

use anyhow::Result;

use crate::day6;
use crate::search::SearchOptions;

/// Solves one part of a day's puzzle from its raw input.
pub type Solver = fn(u8, &str, &SearchOptions) -> Result<String>;

#[derive(Clone, Copy)]
pub struct Puzzle {
    pub day: u8,
    pub title: &'static str,
    solver: Solver,
}

impl Puzzle {
    pub fn run(&self, part: u8, input: &str, options: &SearchOptions) -> Result<String> {
        (self.solver)(part, input, options)
    }
}

/// Days the hub knows how to run, keyed by day number.
#[derive(Clone, Default)]
pub struct Registry {
    puzzles: BTreeMap<u8, Puzzle>,
}

impl Registry {
    pub fn new() -> Self {Self::default()}

    /// Every day with a solution in this crate.
    pub fn standard() -> Self {
        let mut registry = Registry::new();
        registry.register(6, "Guard Gallivant", day6::solve);
        registry
    }

    /// Adds a day, handing back whatever was registered under that number before.
    pub fn register(&mut self, day: u8, title: &'static str, solver: Solver) -> Option<Puzzle> {
        self.puzzles.insert(day, Puzzle {day, title, solver})
    }

    pub fn get(&self, day: u8) -> Option<&Puzzle> {self.puzzles.get(&day)}

    /// Registered puzzles in day order.
    pub fn days(&self) -> impl Iterator<Item = &Puzzle> {self.puzzles.values()}

    pub fn len(&self) -> usize {self.puzzles.len()}
    pub fn is_empty(&self) -> bool {self.puzzles.is_empty()}
}
