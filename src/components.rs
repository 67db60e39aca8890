#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting pixel offsets to tile indices since rows hold at most a handful of tiles
    clippy::cast_possible_truncation,
    // Allow sign loss when going from signed to unsigned types since indices are clamped to be non-negative first
    clippy::cast_sign_loss,
    // Allow precision loss when casting between numeric types since terminal offsets are tiny
    clippy::cast_precision_loss,
    // Allow potential wrapping when casting between types of same size as row lengths are small
    clippy::cast_possible_wrap
)]

use bevy_ecs::prelude::*;

use crate::config::Config;
use crate::puzzle::Puzzle;

/// The player's working order of the current puzzle's tiles.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Arrangement {
    pub order: Vec<u32>,
    pub cursor: usize,
    pub held: Option<usize>,
}

impl Arrangement {
    #[must_use]
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        Self {
            order: puzzle.numbers().to_vec(),
            cursor: 0,
            held: None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Moves the cursor, carrying the held tile along with it.
    pub fn step(&mut self, delta: i32) {
        if self.order.is_empty() {
            return;
        }
        let target = clamp_index(self.cursor as i32 + delta, self.order.len());
        if let Some(held) = self.held {
            self.move_tile(held, target);
            self.held = Some(target);
        }
        self.cursor = target;
    }

    /// Picks up the tile under the cursor, or drops the held one.
    pub fn toggle_hold(&mut self) {
        if self.order.is_empty() {
            return;
        }
        self.held = match self.held {
            Some(_) => None,
            None => Some(self.cursor),
        };
    }

    /// Removes the tile at `from` and reinserts it at `to`.
    ///
    /// Out-of-range targets are clamped; an out-of-range source is ignored.
    pub fn move_tile(&mut self, from: usize, to: usize) {
        if from >= self.order.len() {
            return;
        }
        let to = to.min(self.order.len() - 1);
        if from == to {
            return;
        }
        let value = self.order.remove(from);
        self.order.insert(to, value);
    }

    /// Completes a drag of the tile at `index` by `dx` terminal columns.
    /// Returns the index the tile ended up at.
    pub fn drop_dragged(&mut self, index: usize, dx: i32, item_width: u16) -> usize {
        let target = drag_target(index, dx, item_width, self.order.len());
        self.move_tile(index, target);
        self.cursor = target;
        self.held = None;
        target
    }
}

/// Index a tile lands on after being dragged `dx` columns from `index`.
///
/// Whole tile widths are counted with half-widths rounding towards the
/// right, and the result is clamped to the row.
#[must_use]
pub fn drag_target(index: usize, dx: i32, item_width: u16, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let steps = if item_width == 0 {
        0
    } else {
        (dx as f32 / f32::from(item_width) + 0.5).floor() as i32
    };
    clamp_index(index as i32 + steps, len)
}

fn clamp_index(index: i32, len: usize) -> usize {
    index.clamp(0, len.saturating_sub(1) as i32) as usize
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundPhase {
    /// "Get Ready!" before the first puzzle; `remaining` whole seconds are shown.
    Countdown { remaining: u32, timer: f32 },
    /// A puzzle is on screen and accepts reordering and submission.
    Showing,
    /// Feedback for the last answer stays up until `remaining` seconds pass.
    AwaitingDelay { remaining: f32 },
    /// The delay is over; the transition system picks the next puzzle or game over.
    Transitioning,
    GameOver,
}

impl RoundPhase {
    #[must_use]
    pub fn countdown(seconds: u32) -> Self {
        RoundPhase::Countdown {
            remaining: seconds,
            timer: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub game_over: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameOverChoice {
    #[default]
    TryAgain,
    Home,
}

impl GameOverChoice {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            GameOverChoice::TryAgain => GameOverChoice::Home,
            GameOverChoice::Home => GameOverChoice::TryAgain,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct Round {
    pub phase: RoundPhase,
    pub feedback: Option<Feedback>,
    pub game_over_choice: GameOverChoice,
    pub countdown_seconds: u32,
    pub result_delay: f32,
}

impl Default for Round {
    fn default() -> Self {
        let gameplay = Config::current().gameplay;
        Self::new(
            gameplay.countdown_seconds,
            gameplay.result_delay().as_secs_f32(),
        )
    }
}

impl Round {
    #[must_use]
    pub fn new(countdown_seconds: u32, result_delay: f32) -> Self {
        Self {
            phase: RoundPhase::countdown(countdown_seconds),
            feedback: None,
            game_over_choice: GameOverChoice::default(),
            countdown_seconds,
            result_delay,
        }
    }

    /// Back to the countdown, keeping the timing settings.
    pub fn restart(&mut self) {
        *self = Self::new(self.countdown_seconds, self.result_delay);
    }

    #[must_use]
    pub fn accepts_moves(&self) -> bool {
        self.phase == RoundPhase::Showing
    }
}

// Where the tile row was last drawn, so mouse positions can be mapped to tiles
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileLayout {
    pub origin_x: u16,
    pub y: u16,
    pub height: u16,
    pub tile_width: u16,
    pub item_width: u16,
    pub count: usize,
}

impl TileLayout {
    #[must_use]
    pub fn tile_at(&self, column: u16, row: u16) -> Option<usize> {
        if self.item_width == 0 || row < self.y || row >= self.y + self.height {
            return None;
        }
        let offset = column.checked_sub(self.origin_x)?;
        let index = usize::from(offset / self.item_width);
        let within = offset % self.item_width;
        let margin = self.item_width.saturating_sub(self.tile_width) / 2;
        (index < self.count && within >= margin && within < margin + self.tile_width)
            .then_some(index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drag {
    pub index: usize,
    pub start_column: u16,
}

// Input state for keyboard and mouse controls
#[derive(Resource, Debug, Clone, Default)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    pub grab: bool,
    pub submit: bool,
    pub drag: Option<Drag>,
    pub drop_column: Option<u16>,
}
