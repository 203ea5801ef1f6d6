//! Day 6: a guard patrols a lab, turning right at every obstacle. Part 1 counts the cells
//! it covers before walking off the map, part 2 counts where one extra obstacle would
//! keep it patrolling forever.

use anyhow::{bail, ensure, Result};

use crate::parse::Lab;
use crate::patrol::{run_to_exit, Outcome};
use crate::search::{search, SearchOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Answers {pub visited: usize, pub obstructions: usize}

pub fn visited_count(lab: &Lab) -> Result<usize> {
    let route = run_to_exit(&lab.grid, lab.start, lab.heading);
    ensure!(route.outcome == Outcome::Exited,
            "the guard never leaves the lab (stuck after covering {} cells)", route.visited.len());
    Ok(route.visited.len())
}

pub fn obstruction_count(lab: &mut Lab, options: SearchOptions) -> usize {
    search(&mut lab.grid, lab.start, lab.heading, options)
}

pub fn answers(lab: &mut Lab, options: SearchOptions) -> Result<Answers> {
    Ok(Answers {visited: visited_count(lab)?, obstructions: obstruction_count(lab, options)})
}

pub fn solve(part: u8, input: &str, options: &SearchOptions) -> Result<String> {
    let mut lab = Lab::parse(input)?;
    log::debug!("lab is {}x{} with {} obstacles, guard at {:?} facing {:?}",
                lab.grid.rows(), lab.grid.cols(), lab.grid.blocked_count(), lab.start, lab.heading);
    log::trace!("lab map:\n{}", lab);

    let answer = match part {
        1 => visited_count(&lab)?,
        2 => obstruction_count(&mut lab, *options),
        _ => bail!("day 6 has no part {}", part),
    };
    log::info!("day 6 part {}: {}", part, answer);
    Ok(answer.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
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

    #[test]
    fn example_answers() {
        let mut lab = Lab::parse(EXAMPLE).unwrap();
        let answers = answers(&mut lab, SearchOptions::default()).unwrap();
        assert_eq!(answers, Answers {visited: 41, obstructions: 6});
        assert_eq!(lab, Lab::parse(EXAMPLE).unwrap());
    }

    #[test]
    fn solve_reports_each_part() {
        let options = SearchOptions {parallel: false, route_only: true};
        assert_eq!(solve(1, EXAMPLE, &options).unwrap(), "41");
        assert_eq!(solve(2, EXAMPLE, &options).unwrap(), "6");
        assert!(solve(3, EXAMPLE, &options).is_err());
    }

    #[test]
    fn solve_rejects_bad_input() {
        assert!(solve(1, "...\n.#.\n", &SearchOptions::default()).is_err());
    }

    #[test]
    fn trapped_guard_is_an_error_for_part_one() {
        let err = solve(1, ".#.\n#^#\n.#.\n", &SearchOptions::default()).unwrap_err();
        assert!(err.to_string().contains("never leaves"));
    }
}
