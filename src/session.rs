#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::Resource;
use log::{debug, error, info, warn};
use thiserror::Error;

use crate::game::{GAME_ID, MAX_WRONG_ANSWERS};
use crate::progress::{MemoryProgress, ProgressTracker};
use crate::puzzle::{Level, Puzzle, PuzzleGenerator};

/// Running state across the puzzles of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub level: Level,
    pub score: u32,
    pub wrong_count: u32,
    pub questions_answered: u32,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one answered question and returns the resulting session.
    ///
    /// Counters and level change together; the level is recomputed from the
    /// new question count.
    #[must_use]
    pub fn advance(self, correct: bool) -> Self {
        let questions_answered = self.questions_answered + 1;
        let (score, wrong_count) = if correct {
            (self.score + 1, self.wrong_count)
        } else {
            (self.score, self.wrong_count + 1)
        };

        Self {
            level: Level::from_questions(questions_answered),
            score,
            wrong_count,
            questions_answered,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.wrong_count >= MAX_WRONG_ANSWERS
    }

    #[must_use]
    pub fn strikes_left(&self) -> u32 {
        MAX_WRONG_ANSWERS.saturating_sub(self.wrong_count)
    }
}

/// Outcome of a submitted ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    pub game_over: bool,
    pub session: Session,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("no puzzle is active")]
    NoPuzzle,
    #[error("the session is already over")]
    SessionOver,
    #[error("submitted order {given:?} is not a permutation of {expected:?}")]
    NotAPermutation { expected: Vec<u32>, given: Vec<u32> },
}

/// Validates answers against the active puzzle and drives level and
/// game-over transitions.
#[derive(Resource)]
pub struct SessionController {
    session: Session,
    puzzle: Option<Puzzle>,
    generator: PuzzleGenerator,
    tracker: Box<dyn ProgressTracker>,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(PuzzleGenerator::new(), Box::new(MemoryProgress::new()))
    }
}

impl SessionController {
    #[must_use]
    pub fn new(generator: PuzzleGenerator, tracker: Box<dyn ProgressTracker>) -> Self {
        Self {
            session: Session::new(),
            puzzle: None,
            generator,
            tracker,
        }
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.session
    }

    #[must_use]
    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    /// Generates a puzzle at the current level and makes it active.
    pub fn next_puzzle(&mut self) -> &Puzzle {
        let puzzle = self.generator.generate(self.session.level);
        debug!(
            "Next puzzle at level {}: {:?}",
            self.session.level,
            puzzle.numbers()
        );
        self.puzzle.insert(puzzle)
    }

    /// Replaces the active puzzle with one built elsewhere.
    pub fn set_puzzle(&mut self, puzzle: Puzzle) {
        self.puzzle = Some(puzzle);
    }

    pub fn submit(&mut self, user_order: &[u32]) -> Result<Verdict, SubmitError> {
        if self.session.is_over() {
            return Err(SubmitError::SessionOver);
        }
        let puzzle = self.puzzle.as_ref().ok_or(SubmitError::NoPuzzle)?;

        if !puzzle.is_permutation(user_order) {
            warn!("Rejected submission {user_order:?} for {:?}", puzzle.numbers());
            return Err(SubmitError::NotAPermutation {
                expected: puzzle.numbers().to_vec(),
                given: user_order.to_vec(),
            });
        }

        let correct = puzzle.is_solved_by(user_order);
        let previous_level = self.session.level;
        self.session = self.session.advance(correct);
        let game_over = self.session.is_over();

        debug!(
            "Answer {} ({} correct, {} wrong, {} answered)",
            if correct { "correct" } else { "wrong" },
            self.session.score,
            self.session.wrong_count,
            self.session.questions_answered
        );
        if self.session.level != previous_level {
            info!("Reached level {}", self.session.level);
        }

        if game_over {
            info!("Game over with score {}", self.session.score);
            if let Err(e) = self.tracker.record_score(GAME_ID, self.session.score) {
                error!("Failed to record score: {e}");
            }
        }

        Ok(Verdict {
            correct,
            game_over,
            session: self.session,
        })
    }

    /// Starts over with zeroed counters. Does not generate a puzzle.
    pub fn reset(&mut self) -> Session {
        self.session = Session::new();
        self.puzzle = None;
        self.session
    }
}
