use aoc_puzzles::puzzles::day01::NotQuiteLisp;
use aoc_puzzles::{driver, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    driver::run(&NotQuiteLisp, std::env::args_os())
}
