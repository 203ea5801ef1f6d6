pub mod day6;
pub mod grid;
pub mod parse;
pub mod patrol;
pub mod registry;
pub mod search;

pub use grid::{Grid, Heading, Position};
pub use parse::{Lab, ParseError};
pub use patrol::{run_to_exit, run_with_loop_detection, Outcome, Route};
pub use registry::Registry;
pub use search::{count_loop_inducing_obstructions, search, SearchOptions};
