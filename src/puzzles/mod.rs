// src/puzzles/mod.rs
use aoc_shared_kernel::Answers;
use std::fmt::Display;

pub mod day01;
pub mod template;

/// A two-part puzzle solved over one parsed input.
pub trait Puzzle {
    type Input;
    type Part1: Display;
    type Part2: Display;

    fn parse(&self, raw: &[u8]) -> Self::Input;

    fn part1(&self, input: &Self::Input) -> Self::Part1;

    fn part2(&self, input: &Self::Input) -> Self::Part2;

    /// Parse once and evaluate both parts over the same input.
    fn solve(&self, raw: &[u8]) -> Answers<Self::Part1, Self::Part2> {
        let input = self.parse(raw);
        Answers::new(self.part1(&input), self.part2(&input))
    }
}
