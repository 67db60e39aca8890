pub mod loader;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use crate::game::{
    DEFAULT_COUNTDOWN_SECONDS, DEFAULT_RESULT_DELAY_MS, DEFAULT_TILE_MARGIN, DEFAULT_TILE_WIDTH,
};

// Global configuration instance with thread-safe access
pub static CONFIG: once_cell::sync::Lazy<RwLock<Config>> =
    once_cell::sync::Lazy::new(|| RwLock::new(Config::default()));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gameplay: GameplayConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Snapshot of the active configuration.
    #[must_use]
    pub fn current() -> Self {
        CONFIG
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the active configuration.
    pub fn install(config: Config) {
        *CONFIG.write().unwrap_or_else(PoisonError::into_inner) = config;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub countdown_seconds: u32,
    pub result_delay_ms: u64,
    pub show_hints: bool,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            countdown_seconds: DEFAULT_COUNTDOWN_SECONDS,
            result_delay_ms: DEFAULT_RESULT_DELAY_MS,
            show_hints: true,
        }
    }
}

impl GameplayConfig {
    #[must_use]
    pub fn result_delay(&self) -> Duration {
        Duration::from_millis(self.result_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub tile_width: u16,
    pub tile_margin: u16,
    pub accent_color: TileColor,
    pub correct_color: TileColor,
    pub wrong_color: TileColor,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_WIDTH,
            tile_margin: DEFAULT_TILE_MARGIN,
            accent_color: TileColor::Custom(240, 98, 146),
            correct_color: TileColor::Custom(127, 214, 127),
            wrong_color: TileColor::Custom(255, 127, 127),
        }
    }
}

impl DisplayConfig {
    /// Horizontal distance between the left edges of neighbouring tiles.
    #[must_use]
    pub fn item_width(&self) -> u16 {
        self.tile_width
            .saturating_add(self.tile_margin.saturating_mul(2))
    }
}

// Supported colors for serialization/deserialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    LightRed,
    LightGreen,
    LightMagenta,
    Custom(u8, u8, u8),
}

impl From<TileColor> for Color {
    fn from(color: TileColor) -> Self {
        match color {
            TileColor::Red => Color::Red,
            TileColor::Green => Color::Green,
            TileColor::Yellow => Color::Yellow,
            TileColor::Blue => Color::Blue,
            TileColor::Magenta => Color::Magenta,
            TileColor::Cyan => Color::Cyan,
            TileColor::White => Color::White,
            TileColor::Gray => Color::Gray,
            TileColor::LightRed => Color::LightRed,
            TileColor::LightGreen => Color::LightGreen,
            TileColor::LightMagenta => Color::LightMagenta,
            TileColor::Custom(r, g, b) => Color::Rgb(r, g, b),
        }
    }
}
