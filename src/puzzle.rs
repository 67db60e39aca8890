#![warn(clippy::all, clippy::pedantic)]

use std::fmt;

use log::trace;

use crate::game::{
    DOUBLE_DIGIT_RANGE, LEVEL_THREE_QUESTIONS, LEVEL_THREE_RANGE, LEVEL_TWO_QUESTIONS,
    LEVEL_TWO_SINGLE_DIGITS, MAX_RESAMPLE_ATTEMPTS, SINGLE_DIGIT_RANGE,
};

/// The order the player has to put the numbers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        }
    }

    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Direction::Ascending => "Smallest to Largest",
            Direction::Descending => "Largest to Smallest",
        }
    }

    pub fn sort(self, values: &mut [u32]) {
        match self {
            Direction::Ascending => values.sort_unstable(),
            Direction::Descending => values.sort_unstable_by(|a, b| b.cmp(a)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Difficulty tier. Only ever derived from the number of answered questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Level {
    #[default]
    One,
    Two,
    Three,
}

impl Level {
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }

    #[must_use]
    pub fn from_questions(questions_answered: u32) -> Self {
        if questions_answered >= LEVEL_THREE_QUESTIONS {
            Level::Three
        } else if questions_answered >= LEVEL_TWO_QUESTIONS {
            Level::Two
        } else {
            Level::One
        }
    }

    /// Inclusive bounds on how many numbers a puzzle at this level holds.
    #[must_use]
    pub fn count_range(self) -> (usize, usize) {
        match self {
            Level::One => (3, 5),
            Level::Two | Level::Three => (4, 5),
        }
    }

    /// Inclusive value range for the slot at `index`.
    #[must_use]
    pub fn value_range(self, index: usize) -> (u32, u32) {
        match self {
            Level::One => SINGLE_DIGIT_RANGE,
            Level::Two if index < LEVEL_TWO_SINGLE_DIGITS => SINGLE_DIGIT_RANGE,
            Level::Two => DOUBLE_DIGIT_RANGE,
            Level::Three => LEVEL_THREE_RANGE,
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            3 => Ok(Level::Three),
            other => Err(other),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One ordering challenge. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    numbers: Vec<u32>,
    direction: Direction,
    level: Level,
}

impl Puzzle {
    /// Builds a puzzle from an explicit presentation order.
    ///
    /// Returns `None` if `numbers` is empty or holds duplicates, since the
    /// answer would then be ambiguous.
    #[must_use]
    pub fn new(numbers: Vec<u32>, direction: Direction, level: Level) -> Option<Self> {
        if numbers.is_empty() || has_duplicates(&numbers) {
            return None;
        }
        Some(Self {
            numbers,
            direction,
            level,
        })
    }

    #[must_use]
    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// The numbers sorted in the puzzle's direction.
    #[must_use]
    pub fn answer(&self) -> Vec<u32> {
        let mut sorted = self.numbers.clone();
        self.direction.sort(&mut sorted);
        sorted
    }

    /// Whether `order` holds exactly the puzzle's numbers, in any order.
    #[must_use]
    pub fn is_permutation(&self, order: &[u32]) -> bool {
        if order.len() != self.numbers.len() {
            return false;
        }
        let mut expected = self.numbers.clone();
        let mut given = order.to_vec();
        expected.sort_unstable();
        given.sort_unstable();
        expected == given
    }

    /// Element-wise comparison against the reference answer.
    #[must_use]
    pub fn is_solved_by(&self, order: &[u32]) -> bool {
        self.answer() == order
    }
}

fn has_duplicates(values: &[u32]) -> bool {
    values
        .iter()
        .enumerate()
        .any(|(i, value)| values[..i].contains(value))
}

/// Produces puzzles for a given level.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    rng: fastrand::Rng,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn generate(&mut self, level: Level) -> Puzzle {
        let (min_count, max_count) = level.count_range();
        let count = self.rng.usize(min_count..=max_count);

        let mut numbers = Vec::with_capacity(count);
        for index in 0..count {
            let value = self.distinct_value(&numbers, level.value_range(index));
            numbers.push(value);
        }

        self.shuffle(&mut numbers);

        let direction = match level {
            Level::Three if self.rng.bool() => Direction::Descending,
            _ => Direction::Ascending,
        };

        trace!("Generated level {level} puzzle {numbers:?} ({direction})");

        Puzzle {
            numbers,
            direction,
            level,
        }
    }

    // Rejection sampling; the scan only matters if a range ever gets close to the count.
    fn distinct_value(&mut self, taken: &[u32], (low, high): (u32, u32)) -> u32 {
        for _ in 0..MAX_RESAMPLE_ATTEMPTS {
            let candidate = self.rng.u32(low..=high);
            if !taken.contains(&candidate) {
                return candidate;
            }
        }
        (low..=high)
            .find(|candidate| !taken.contains(candidate))
            .unwrap_or(high)
    }

    // Fisher-Yates, scanning from the end
    fn shuffle(&mut self, values: &mut [u32]) {
        for i in (1..values.len()).rev() {
            let j = self.rng.usize(0..=i);
            values.swap(i, j);
        }
    }
}
