// src/args.rs
use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    about = "Solve an Advent of Code puzzle from an input file",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Puzzle input file
    #[arg(value_hint = ValueHint::FilePath, allow_hyphen_values = true)]
    pub input: PathBuf,
}
