// src/presentation.rs
use aoc_shared_kernel::Answers;
use std::fmt::{self, Display};
use std::time::Duration;

/// Final output of a run: both answers and the elapsed wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<P1, P2> {
    pub answers: Answers<P1, P2>,
    pub elapsed: Duration,
}

impl<P1, P2> Report<P1, P2> {
    pub const fn new(answers: Answers<P1, P2>, elapsed: Duration) -> Self {
        Self { answers, elapsed }
    }
}

// Both answer lines carry the "P1" label; scripts reading this output rely on it.
impl<P1: Display, P2: Display> Display for Report<P1, P2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "P1: {}", self.answers.part1())?;
        writeln!(f, "P1: {}", self.answers.part2())?;
        writeln!(f)?;
        write!(f, "Time: {:.7}", self.elapsed.as_secs_f64())
    }
}
