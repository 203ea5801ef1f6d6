use advent_hub::Lab;

/// The worked example from the puzzle text: 41 cells covered, 6 trapping obstructions.
#[allow(dead_code)]
pub const EXAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

/// Four obstacles arranged so the guard circles back to where it started.
#[allow(dead_code)]
pub const CIRCUIT: &str = "\
.#..
.^.#
#...
..#.
";

#[allow(dead_code)]
pub fn lab(text: &str) -> Lab {
    Lab::parse(text).unwrap_or_else(|err| panic!("bad fixture: {}", err))
}
