use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use advent_hub::{Registry, SearchOptions};
use anyhow::{bail, Context, Result};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about = "Advent puzzle hub")]
struct Args {
    /// Day to run; leave out to pick one interactively
    day: Option<u8>,
    /// Part to run; both parts when left out
    #[arg(value_parser = clap::value_parser!(u8).range(1 ..= 2))]
    part: Option<u8>,
    /// Read the numbered example `day{DAY}test{N}.in` instead of the real input
    #[arg(short, long)]
    test: Option<u32>,
    /// Input file, overrides the `day*.in` naming
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Where the `day*.in` files live
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
    /// Run obstruction trials on a single thread
    #[arg(long)]
    sequential: bool,
    /// Try an obstruction on every open cell, not just the guard's route
    #[arg(long)]
    all_cells: bool,
    /// More logging; repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn search_options(&self) -> SearchOptions {
        SearchOptions {parallel: !self.sequential, route_only: !self.all_cells}
    }

    fn input_path(&self, day: u8) -> PathBuf {
        self.input.clone().unwrap_or_else(|| input_path(&self.data_dir, day, self.test))
    }
}

fn input_path(data_dir: &Path, day: u8, test: Option<u32>) -> PathBuf {
    data_dir.join(match test {
        Some(test) => format!("day{}test{}.in", day, test),
        None => format!("day{}.in", day),
    })
}

fn parts(part: Option<u8>) -> Vec<u8> {
    match part {Some(part) => vec![part], None => vec![1, 2]}
}

fn log_filter(verbose: u8) -> &'static str {
    match verbose {0 => "warn", 1 => "info", 2 => "debug", _ => "trace"}
}

fn run_day(registry: &Registry, args: &Args, day: u8) -> Result<()> {
    let Some(puzzle) = registry.get(day) else {bail!("no solution registered for day {}", day)};
    let path = args.input_path(day);
    let input = std::fs::read_to_string(&path)
        .with_context(|| format!("cannot read input {}", path.display()))?;
    log::info!("running day {} ({}) on {}", day, puzzle.title, path.display());

    let options = args.search_options();
    let time = Instant::now();
    for part in parts(args.part) {
        let answer = puzzle.run(part, &input, &options)
            .with_context(|| format!("day {} part {} failed", day, part))?;
        println!("Day {} - Part {}: {}", day, part, answer);
    }
    println!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}

fn interactive(registry: &Registry, args: &Args) -> Result<()> {
    if registry.is_empty() {
        println!("No day solutions found.");
        return Ok(());
    }
    println!("Available days:");
    for puzzle in registry.days() {println!("Day {} - {}", puzzle.day, puzzle.title)}

    let mut lines = io::stdin().lock().lines();
    loop {
        print!("Day number to run, anything else to exit: ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {break};
        let Ok(day) = line.trim().parse::<u8>() else {break};
        if registry.get(day).is_none() {
            println!("No solution for day {}.", day);
            break;
        }
        if let Err(err) = run_day(registry, args, day) {log::error!("{:#}", err)}
    }
    println!("Goodbye!");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(args.verbose)))
        .init();

    let registry = Registry::standard();
    match args.day {
        Some(day) => run_day(&registry, &args, day),
        None => interactive(&registry, &args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn input_follows_day_naming() {
        assert_eq!(input_path(Path::new("data"), 6, None), Path::new("data/day6.in"));
        assert_eq!(input_path(Path::new("data"), 6, Some(2)), Path::new("data/day6test2.in"));
    }

    #[test]
    fn explicit_input_wins() {
        let args = Args::parse_from(["advent-hub", "6", "--test", "1", "--input", "lab.txt"]);
        assert_eq!(args.input_path(6), Path::new("lab.txt"));
        let args = Args::parse_from(["advent-hub", "6", "2", "--data-dir", "inputs", "-t", "3"]);
        assert_eq!(args.input_path(6), Path::new("inputs/day6test3.in"));
        assert_eq!(args.part, Some(2));
    }

    #[test]
    fn part_must_be_one_or_two() {
        assert!(Args::try_parse_from(["advent-hub", "6", "3"]).is_err());
        assert_eq!(parts(None), vec![1, 2]);
        assert_eq!(parts(Some(1)), vec![1]);
    }

    #[test]
    fn search_defaults_to_parallel_route_pruning() {
        let args = Args::parse_from(["advent-hub", "6"]);
        assert_eq!(args.search_options(), SearchOptions {parallel: true, route_only: true});
        let args = Args::parse_from(["advent-hub", "6", "--sequential", "--all-cells", "-vv"]);
        assert_eq!(args.search_options(), SearchOptions::default());
        assert_eq!(log_filter(args.verbose), "debug");
    }

    #[test]
    fn runs_the_bundled_example() {
        let data_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs");
        let args = Args::parse_from(["advent-hub", "6", "--data-dir", data_dir, "--test", "1"]);
        run_day(&Registry::standard(), &args, 6).unwrap();
        let args = Args::parse_from(["advent-hub", "6", "--data-dir", data_dir, "--test", "9"]);
        assert!(run_day(&Registry::standard(), &args, 6).is_err());
        assert!(run_day(&Registry::standard(), &args, 7).is_err());
    }
}
