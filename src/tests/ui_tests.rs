#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, layout::Rect};

    use crate::app::App;
    use crate::config::DisplayConfig;
    use crate::components::{Arrangement, Feedback, Round, RoundPhase, TileLayout};
    use crate::puzzle::{Direction, Level, Puzzle};
    use crate::session::SessionController;
    use crate::tests::test_utils::lock_global_config;
    use crate::ui::{self, centered_rect, hint_text, render_tiles};

    // Helper function to create a test terminal
    fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).unwrap()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
        terminal.draw(|f| ui::render(f, app)).unwrap();
        buffer_text(terminal)
    }

    // App in the middle of a game showing a known puzzle
    fn app_with_puzzle(numbers: Vec<u32>, direction: Direction) -> App {
        let mut app = App::new();
        app.start_game();
        let puzzle = Puzzle::new(numbers, direction, Level::Three).unwrap();
        app.world.insert_resource(Arrangement::from_puzzle(&puzzle));
        app.world
            .resource_mut::<SessionController>()
            .set_puzzle(puzzle);
        app.world.resource_mut::<Round>().phase = RoundPhase::Showing;
        app
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 100);
        let centered = centered_rect(50, 40, area);

        assert_eq!(centered.width, 50);
        assert_eq!(centered.height, 40);
        assert_eq!(centered.x, 25);
        assert_eq!(centered.y, 30);
    }

    #[test]
    fn test_main_menu_render() {
        let mut terminal = create_test_terminal(80, 30);
        let mut app = App::new();

        let text = draw(&mut terminal, &mut app);
        assert!(text.contains("NUMBER ORDER"));
        assert!(text.contains("New Game"));
        assert!(text.contains("Quit"));
    }

    #[test]
    fn test_countdown_render() {
        let mut terminal = create_test_terminal(80, 30);
        let mut app = App::new();
        app.start_game();

        let text = draw(&mut terminal, &mut app);
        assert!(text.contains("Get Ready!"));
        assert!(text.contains('3'));
        assert!(text.contains("Level 1"));
        assert_eq!(*app.world.resource::<TileLayout>(), TileLayout::default());
    }

    #[test]
    fn test_question_render() {
        let _config = lock_global_config();
        let mut terminal = create_test_terminal(80, 30);
        let mut app = app_with_puzzle(vec![5, 2, 8], Direction::Ascending);

        let text = draw(&mut terminal, &mut app);
        assert!(text.contains("Arrange the numbers in ascending order"));
        assert!(text.contains("Smallest to Largest"));
        assert!(text.contains("Check Order"));
        assert!(text.contains("0 Questions"));
        assert!(text.contains(hint_text(Direction::Ascending)));

        let layout = *app.world.resource::<TileLayout>();
        assert_eq!(layout.count, 3);
        assert_eq!(layout.item_width, 8);
        assert!(layout.tile_at(layout.origin_x + 1, layout.y + 1).is_some());
    }

    #[test]
    fn test_descending_question_render() {
        let mut terminal = create_test_terminal(80, 30);
        let mut app = app_with_puzzle(vec![12, 40, 3, 27], Direction::Descending);

        let text = draw(&mut terminal, &mut app);
        assert!(text.contains("Arrange the numbers in descending order"));
        assert!(text.contains("Largest to Smallest"));
        assert!(text.contains("40"));
        assert!(text.contains("27"));
    }

    #[test]
    fn test_feedback_render() {
        let mut terminal = create_test_terminal(80, 30);
        let mut app = app_with_puzzle(vec![5, 2, 8], Direction::Ascending);
        {
            let mut round = app.world.resource_mut::<Round>();
            round.phase = RoundPhase::AwaitingDelay { remaining: 1.0 };
            round.feedback = Some(Feedback {
                correct: false,
                game_over: false,
            });
        }

        let text = draw(&mut terminal, &mut app);
        assert!(text.contains("Try Again!"));
        assert!(!text.contains("Check Order"));
    }

    #[test]
    fn test_game_over_render() {
        let mut terminal = create_test_terminal(80, 30);
        let mut app = app_with_puzzle(vec![5, 2, 8], Direction::Ascending);
        app.world.resource_mut::<Round>().phase = RoundPhase::GameOver;

        let text = draw(&mut terminal, &mut app);
        assert!(text.contains("Game Over!"));
        assert!(text.contains("Your score: 0"));
        assert!(text.contains("Try Again"));
        assert!(text.contains("Home"));
    }

    #[test]
    fn test_game_render_with_small_terminal() {
        let mut terminal = create_test_terminal(46, 18);
        let mut app = app_with_puzzle(vec![5, 2, 8], Direction::Ascending);

        let text = draw(&mut terminal, &mut app);
        assert!(text.contains("Terminal too small!"));
        assert!(!text.contains("Check Order"));
        assert_eq!(app.world.resource::<TileLayout>().count, 0);
    }

    #[test]
    fn test_oversized_tiles_render_without_overflow() {
        let mut terminal = create_test_terminal(80, 30);
        let puzzle = Puzzle::new(vec![4, 9, 2, 6, 7], Direction::Ascending, Level::Three).unwrap();
        let arrangement = Arrangement::from_puzzle(&puzzle);
        let round = Round {
            phase: RoundPhase::Showing,
            ..Round::default()
        };
        let display = DisplayConfig {
            tile_width: 20000,
            tile_margin: 30000,
            ..DisplayConfig::default()
        };

        let mut layout = TileLayout::default();
        terminal
            .draw(|f| {
                let area = Rect::new(0, 5, 80, 3);
                layout = render_tiles(f, area, &round, &arrangement, &display);
            })
            .unwrap();

        assert_eq!(layout.count, 5);
        assert_eq!(layout.item_width, u16::MAX);
        assert_eq!(layout.origin_x, 0);
        assert_eq!(layout.tile_at(79, 6), None);
    }
}
