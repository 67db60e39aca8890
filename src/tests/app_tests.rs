#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crossterm::event::{
        KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    };

    use std::fs;

    use tempfile::tempdir;

    use crate::app::App;
    use crate::config::Config;
    use crate::components::{Arrangement, GameOverChoice, Round, RoundPhase, TileLayout};
    use crate::menu_types::{MenuOption, MenuState};
    use crate::progress::MemoryProgress;
    use crate::session::SessionController;
    use crate::systems;
    use crate::tests::test_utils::{RESULT_DELAY, arrange, lock_global_config};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn started_app() -> App {
        let mut app = App::new();
        press(&mut app, KeyCode::Enter);
        systems::countdown_system(&mut app.world, 3.0);
        assert_eq!(app.world.resource::<Round>().phase, RoundPhase::Showing);
        app
    }

    fn answer_with_keys(app: &mut App, correct: bool) {
        arrange(&mut app.world, correct);
        press(app, KeyCode::Enter);
        app.on_tick();
        systems::game_tick_system(&mut app.world, RESULT_DELAY);
    }

    #[test]
    fn test_app_creation() {
        let app = App::new();

        assert!(!app.should_quit);
        assert_eq!(app.menu.state, MenuState::MainMenu);
        assert!(app.world.contains_resource::<SessionController>());
        assert!(app.world.contains_resource::<Round>());
        assert!(app.world.contains_resource::<crate::Time>());
        assert!(
            app.world
                .resource::<SessionController>()
                .puzzle()
                .is_none()
        );
    }

    #[test]
    fn test_new_game_starts_countdown() {
        let mut app = App::new();
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.menu.state, MenuState::Game);
        assert!(matches!(
            app.world.resource::<Round>().phase,
            RoundPhase::Countdown { .. }
        ));
    }

    #[test]
    fn test_menu_navigation_and_quit() {
        let mut app = App::new();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.menu.selected_option, MenuOption::Options);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.menu.selected_option, MenuOption::Quit);
        press(&mut app, KeyCode::Enter);
        assert!(app.should_quit);
    }

    #[test]
    fn test_options_menu_and_back() {
        let mut app = App::new();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.menu.state, MenuState::Options);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.menu.state, MenuState::MainMenu);
    }

    #[test]
    fn test_q_quits_anywhere() {
        let mut app = started_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = App::new();
        app.handle_key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(app.menu.state, MenuState::MainMenu);
    }

    #[test]
    fn test_enter_submits_answer() {
        let mut app = started_app();
        arrange(&mut app.world, true);
        press(&mut app, KeyCode::Enter);
        app.on_tick();

        let session = app.world.resource::<SessionController>().session();
        assert_eq!(session.score, 1);
        assert!(matches!(
            app.world.resource::<Round>().phase,
            RoundPhase::AwaitingDelay { .. }
        ));
    }

    #[test]
    fn test_keyboard_reordering() {
        let mut app = started_app();
        app.world.resource_mut::<Arrangement>().order = vec![3, 1, 2];

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Right);
        app.on_tick();

        assert_eq!(app.world.resource::<Arrangement>().order, vec![1, 3, 2]);
    }

    #[test]
    fn test_mouse_drag() {
        let mut app = started_app();
        app.world.resource_mut::<Arrangement>().order = vec![4, 9, 2, 6];
        app.world.insert_resource(TileLayout {
            origin_x: 20,
            y: 5,
            height: 3,
            tile_width: 6,
            item_width: 8,
            count: 4,
        });

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 45, 6);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 22, 6);
        app.on_tick();

        assert_eq!(app.world.resource::<Arrangement>().order, vec![6, 4, 9, 2]);
    }

    #[test]
    fn test_mouse_outside_tiles_does_nothing() {
        let mut app = started_app();
        app.world.resource_mut::<Arrangement>().order = vec![4, 9, 2];

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 0, 0);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 40, 0);
        app.on_tick();

        assert_eq!(app.world.resource::<Arrangement>().order, vec![4, 9, 2]);
    }

    #[test]
    fn test_escape_returns_home() {
        let mut app = started_app();
        answer_with_keys(&mut app, true);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.menu.state, MenuState::MainMenu);
        assert_eq!(
            app.world
                .resource::<SessionController>()
                .session()
                .questions_answered,
            0
        );
    }

    #[test]
    fn test_game_over_try_again() {
        let tracker = MemoryProgress::new();
        let mut app = App::with_tracker(Box::new(tracker.clone()));
        press(&mut app, KeyCode::Enter);
        systems::countdown_system(&mut app.world, 3.0);

        for _ in 0..3 {
            answer_with_keys(&mut app, false);
        }
        assert_eq!(app.world.resource::<Round>().phase, RoundPhase::GameOver);
        assert_eq!(tracker.records(), vec![("ordering".to_string(), 0)]);

        press(&mut app, KeyCode::Enter);
        assert!(matches!(
            app.world.resource::<Round>().phase,
            RoundPhase::Countdown { .. }
        ));
        assert_eq!(
            app.world.resource::<SessionController>().session().wrong_count,
            0
        );

        systems::countdown_system(&mut app.world, 3.0);
        assert_eq!(app.world.resource::<Round>().phase, RoundPhase::Showing);
    }

    #[test]
    fn test_game_over_home() {
        let mut app = started_app();
        for _ in 0..3 {
            answer_with_keys(&mut app, false);
        }

        press(&mut app, KeyCode::Right);
        assert_eq!(
            app.world.resource::<Round>().game_over_choice,
            GameOverChoice::Home
        );
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.menu.state, MenuState::MainMenu);
    }

    #[test]
    fn test_hints_toggle_saves_config() {
        let _config = lock_global_config();
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let mut app = App::new();
        app.config_path = temp_dir.path().join("config.toml");
        let before = Config::current().gameplay.show_hints;

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.menu.state, MenuState::Options);
        press(&mut app, KeyCode::Enter);

        assert_eq!(Config::current().gameplay.show_hints, !before);
        let saved: Config = toml::from_str(
            &fs::read_to_string(&app.config_path).expect("Config file should have been written"),
        )
        .unwrap();
        assert_eq!(saved.gameplay.show_hints, !before);

        press(&mut app, KeyCode::Enter);
        assert_eq!(Config::current().gameplay.show_hints, before);
    }

    #[test]
    fn test_keyboard_move_cancels_pending_drag() {
        let mut app = started_app();
        app.world.resource_mut::<Arrangement>().order = vec![4, 9, 2, 6];
        app.world.insert_resource(TileLayout {
            origin_x: 20,
            y: 5,
            height: 3,
            tile_width: 6,
            item_width: 8,
            count: 4,
        });

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 45, 6);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Right);
        app.on_tick();
        assert_eq!(app.world.resource::<Arrangement>().order, vec![9, 4, 2, 6]);

        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 22, 6);
        app.on_tick();
        assert_eq!(app.world.resource::<Arrangement>().order, vec![9, 4, 2, 6]);
    }
}
