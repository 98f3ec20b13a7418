// src/puzzles/day01.rs
//! Day 1: follow `(`/`)` instructions up and down the floors of a building.

use super::Puzzle;

/// Byte that moves one floor up. Any other byte moves one floor down.
pub const UP: u8 = b'(';

/// Floor whose first visit Part 2 reports.
pub const BASEMENT: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub const fn delta(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

impl From<u8> for Direction {
    fn from(byte: u8) -> Self {
        match byte {
            UP => Self::Up,
            _ => Self::Down,
        }
    }
}

/// Map each byte to its signed step, preserving order.
pub fn translate(text: &[u8]) -> Vec<i64> {
    text.iter().map(|&byte| Direction::from(byte).delta()).collect()
}

/// Final floor after every step.
pub fn final_floor(steps: &[i64]) -> i64 {
    steps.iter().sum()
}

/// 1-based position of the step that first lands on [`BASEMENT`].
///
/// Returns `0` and logs a warning when the basement is never entered.
pub fn first_basement_step(steps: &[i64]) -> usize {
    let found = steps
        .iter()
        .scan(0i64, |floor, step| {
            *floor += step;
            Some(*floor)
        })
        .position(|floor| floor == BASEMENT);

    match found {
        Some(index) => index + 1,
        None => {
            log::warn!("floor {BASEMENT} never reached in {} steps", steps.len());
            0
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NotQuiteLisp;

impl Puzzle for NotQuiteLisp {
    type Input = Vec<i64>;
    type Part1 = i64;
    type Part2 = usize;

    fn parse(&self, raw: &[u8]) -> Vec<i64> {
        translate(raw)
    }

    fn part1(&self, input: &Vec<i64>) -> i64 {
        final_floor(input)
    }

    fn part2(&self, input: &Vec<i64>) -> usize {
        first_basement_step(input)
    }
}
