#![warn(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use log::{debug, error, info};

use crate::Time;
use crate::components::{Arrangement, Drag, GameOverChoice, Input, Round, RoundPhase, TileLayout};
use crate::config::{Config, loader};
use crate::menu_types::{Menu, MenuOption, MenuState, OptionsOption};
use crate::progress::{MemoryProgress, ProgressTracker};
use crate::puzzle::PuzzleGenerator;
use crate::session::SessionController;
use crate::systems;

pub type AppResult<T> = anyhow::Result<T>;

pub struct App {
    pub world: World,
    pub should_quit: bool,
    pub menu: Menu,
    /// Where option changes are saved.
    pub config_path: PathBuf,
}

impl App {
    /// App whose final scores are only kept in memory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tracker(Box::new(MemoryProgress::new()))
    }

    #[must_use]
    pub fn with_tracker(tracker: Box<dyn ProgressTracker>) -> Self {
        Self::with_controller(SessionController::new(PuzzleGenerator::new(), tracker))
    }

    #[must_use]
    pub fn with_controller(controller: SessionController) -> Self {
        let mut world = World::new();
        world.insert_resource(Time::new());
        world.insert_resource(Input::default());
        world.insert_resource(Arrangement::default());
        world.insert_resource(Round::default());
        world.insert_resource(TileLayout::default());
        world.insert_resource(controller);

        Self {
            world,
            should_quit: false,
            menu: Menu::new(),
            config_path: loader::get_config_file_path(),
        }
    }

    /// Leaves the menu and starts a session with its countdown.
    pub fn start_game(&mut self) {
        self.menu.state = MenuState::Game;
        systems::start_session(&mut self.world);
    }

    pub fn go_home(&mut self) {
        info!("Returning to main menu");
        self.menu = Menu::new();
        self.world.resource_mut::<SessionController>().reset();
        self.world.resource_mut::<Arrangement>().clear();
        self.world.insert_resource(Input::default());
    }

    pub fn on_tick(&mut self) {
        let delta_seconds = {
            let mut time = self.world.resource_mut::<Time>();
            time.update();
            time.delta_seconds()
        };

        if self.menu.state == MenuState::Game {
            systems::input_system(&mut self.world);
            systems::game_tick_system(&mut self.world, delta_seconds);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        debug!("Key event: {key:?}");

        // Allow quitting with 'q' regardless of state
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        match self.menu.state {
            MenuState::MainMenu | MenuState::Options => self.handle_menu_key(key.code),
            MenuState::Game => self.handle_game_key(key.code),
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('w') => self.menu.prev_option(),
            KeyCode::Down | KeyCode::Char('s') => self.menu.next_option(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.menu.state {
                MenuState::MainMenu => match self.menu.selected_option {
                    MenuOption::NewGame => self.start_game(),
                    MenuOption::Options => self.menu.state = MenuState::Options,
                    MenuOption::Quit => self.should_quit = true,
                },
                MenuState::Options => match self.menu.options_selected {
                    OptionsOption::HintsToggle => self.toggle_hints(),
                    OptionsOption::Back => self.menu.state = MenuState::MainMenu,
                },
                MenuState::Game => {}
            },
            KeyCode::Esc if self.menu.state == MenuState::Options => {
                self.menu.state = MenuState::MainMenu;
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        if code == KeyCode::Esc {
            self.go_home();
            return;
        }

        let phase = self.world.resource::<Round>().phase;
        if phase == RoundPhase::GameOver {
            match code {
                KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                    let mut round = self.world.resource_mut::<Round>();
                    round.game_over_choice = round.game_over_choice.toggled();
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let choice = self.world.resource::<Round>().game_over_choice;
                    match choice {
                        GameOverChoice::TryAgain => systems::start_session(&mut self.world),
                        GameOverChoice::Home => self.go_home(),
                    }
                }
                _ => {}
            }
            return;
        }

        let mut input = self.world.resource_mut::<Input>();
        match code {
            KeyCode::Left | KeyCode::Char('a') => input.left = true,
            KeyCode::Right | KeyCode::Char('d') => input.right = true,
            KeyCode::Char(' ') => input.grab = true,
            KeyCode::Enter => input.submit = true,
            _ => {}
        }
    }

    fn toggle_hints(&self) {
        let mut config = Config::current();
        config.gameplay.show_hints = !config.gameplay.show_hints;
        info!("Hints turned {}", if config.gameplay.show_hints { "on" } else { "off" });
        Config::install(config.clone());
        if let Err(e) = loader::save_config_to_path(&config, &self.config_path) {
            error!("Failed to save configuration: {e}");
        }
    }

    /// Press on a tile starts a drag, releasing it drops the tile.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.menu.state != MenuState::Game {
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let layout = *self.world.resource::<TileLayout>();
                if let Some(index) = layout.tile_at(mouse.column, mouse.row) {
                    let mut input = self.world.resource_mut::<Input>();
                    input.drag = Some(Drag {
                        index,
                        start_column: mouse.column,
                    });
                    input.drop_column = None;
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let mut input = self.world.resource_mut::<Input>();
                if input.drag.is_some() {
                    input.drop_column = Some(mouse.column);
                }
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
