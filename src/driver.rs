// src/driver.rs
use crate::args::Args;
use crate::config::RunConfig;
use crate::presentation::Report;
use crate::puzzles::Puzzle;
use anyhow::Result;
use aoc_shared_kernel::{PresentationError, PuzzleError};
use clap::Parser;
use std::ffi::OsString;
use std::process::ExitCode;
use std::time::Instant;

/// Entry point shared by every puzzle binary.
///
/// Anything other than exactly one argument prints the usage message and fails
/// before touching the filesystem. That argument is always taken as a path,
/// even when it looks like a flag. Errors go to stdout; exit status is 1.
pub fn run<P, I, T>(puzzle: &P, argv: I) -> ExitCode
where
    P: Puzzle,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let [bin, input] = argv.as_slice() else {
        log::debug!("expected one argument, got {}", argv.len().saturating_sub(1));
        println!("{}", PresentationError::Usage);
        return ExitCode::FAILURE;
    };

    // `--` stops clap from reading the argument as a separator or flag.
    let args = match Args::try_parse_from([bin.clone(), OsString::from("--"), input.clone()]) {
        Ok(args) => args,
        Err(err) => {
            log::debug!("rejected arguments: {err}");
            println!("{}", PresentationError::Usage);
            return ExitCode::FAILURE;
        }
    };

    let config = RunConfig::from(args);
    match execute(puzzle, &config) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Load the input, solve both parts, and time the whole run.
///
/// # Errors
///
/// Fails when the input file cannot be read; the puzzle is not invoked then.
pub fn execute<P: Puzzle>(puzzle: &P, config: &RunConfig) -> Result<Report<P::Part1, P::Part2>> {
    let started = Instant::now();
    let raw = aoc_infra::load_input(&config.input).map_err(PuzzleError::from)?;
    let answers = puzzle.solve(&raw);
    let elapsed = started.elapsed();
    log::debug!("solved {} in {elapsed:?}", config.input.display());
    Ok(Report::new(answers, elapsed))
}
