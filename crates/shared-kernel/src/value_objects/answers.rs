// crates/shared-kernel/src/value_objects/answers.rs

/// The pair of results produced by one puzzle run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Answers<P1, P2> {
    part1: P1,
    part2: P2,
}

impl<P1, P2> Answers<P1, P2> {
    #[inline]
    pub const fn new(part1: P1, part2: P2) -> Self {
        Self { part1, part2 }
    }

    #[inline]
    pub const fn part1(&self) -> &P1 {
        &self.part1
    }

    #[inline]
    pub const fn part2(&self) -> &P2 {
        &self.part2
    }

    pub fn into_parts(self) -> (P1, P2) {
        (self.part1, self.part2)
    }
}

impl<P1, P2> From<(P1, P2)> for Answers<P1, P2> {
    fn from((part1, part2): (P1, P2)) -> Self {
        Self::new(part1, part2)
    }
}
