#![warn(clippy::all, clippy::pedantic)]

// Identifier reported to the progress tracker
pub const GAME_ID: &str = "ordering";

// Session rules
pub const MAX_WRONG_ANSWERS: u32 = 3; // Three strikes ends the session
pub const LEVEL_TWO_QUESTIONS: u32 = 5; // Questions answered before level 2
pub const LEVEL_THREE_QUESTIONS: u32 = 10; // Questions answered before level 3

// Puzzle generation
pub const SINGLE_DIGIT_RANGE: (u32, u32) = (1, 9);
pub const DOUBLE_DIGIT_RANGE: (u32, u32) = (10, 99);
pub const LEVEL_THREE_RANGE: (u32, u32) = (1, 50);
pub const LEVEL_TWO_SINGLE_DIGITS: usize = 2; // Leading single-digit values at level 2
pub const MAX_RESAMPLE_ATTEMPTS: usize = 64; // Per slot, before falling back to a scan

// Timing
pub const DEFAULT_COUNTDOWN_SECONDS: u32 = 3;
pub const DEFAULT_RESULT_DELAY_MS: u64 = 1500; // Feedback stays on screen this long

// Tile geometry (terminal cells)
pub const DEFAULT_TILE_WIDTH: u16 = 6;
pub const DEFAULT_TILE_MARGIN: u16 = 1;
pub const MAX_TILE_WIDTH: u16 = 16; // Five tiles still fit the minimum screen width
pub const MAX_TILE_MARGIN: u16 = 4;
