use aoc_puzzles::puzzles::template::Template;
use aoc_puzzles::{driver, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    driver::run(&Template, std::env::args_os())
}
