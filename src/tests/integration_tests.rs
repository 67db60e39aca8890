#[cfg(test)]
mod tests {
    use crate::components::{Round, RoundPhase};
    use crate::game::{GAME_ID, MAX_WRONG_ANSWERS};
    use crate::puzzle::Level;
    use crate::session::SessionController;
    use crate::systems::{game_tick_system, submit_answer};
    use crate::tests::test_utils::{RESULT_DELAY, arrange, create_test_world};

    #[test]
    fn test_full_session() {
        let (mut world, tracker) = create_test_world();

        // Countdown in game-tick sized steps
        while matches!(world.resource::<Round>().phase, RoundPhase::Countdown { .. }) {
            game_tick_system(&mut world, 0.5);
        }

        // Eleven correct answers climb to level 3, then three strikes end it
        let answers = std::iter::repeat_n(true, 11).chain(std::iter::repeat_n(false, 3));
        for correct in answers {
            assert_eq!(world.resource::<Round>().phase, RoundPhase::Showing);
            arrange(&mut world, correct);
            submit_answer(&mut world);

            let session = world.resource::<SessionController>().session();
            assert_eq!(
                session.score + session.wrong_count,
                session.questions_answered
            );
            assert_eq!(session.level, Level::from_questions(session.questions_answered));

            // Feedback is held for the whole delay in 50 ms ticks
            for _ in 0..29 {
                game_tick_system(&mut world, 0.05);
                assert!(matches!(
                    world.resource::<Round>().phase,
                    RoundPhase::AwaitingDelay { .. }
                ));
            }
            game_tick_system(&mut world, RESULT_DELAY);
        }

        let session = world.resource::<SessionController>().session();
        assert_eq!(world.resource::<Round>().phase, RoundPhase::GameOver);
        assert_eq!(session.score, 11);
        assert_eq!(session.wrong_count, MAX_WRONG_ANSWERS);
        assert_eq!(session.level, Level::Three);
        assert_eq!(tracker.records(), vec![(GAME_ID.to_string(), 11)]);
    }

    #[test]
    fn test_level_three_puzzles_after_ten_answers() {
        let (mut world, _) = create_test_world();
        game_tick_system(&mut world, 3.0);

        for _ in 0..10 {
            arrange(&mut world, true);
            submit_answer(&mut world);
            game_tick_system(&mut world, RESULT_DELAY);
        }

        let controller = world.resource::<SessionController>();
        let puzzle = controller.puzzle().unwrap();
        assert_eq!(puzzle.level(), Level::Three);
        assert!(puzzle.numbers().iter().all(|n| (1..=50).contains(n)));
    }
}
