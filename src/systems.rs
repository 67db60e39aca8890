use bevy_ecs::prelude::*;
use log::{debug, info, trace, warn};

use crate::components::{
    Arrangement, Feedback, GameOverChoice, Input, Round, RoundPhase, TileLayout,
};
use crate::session::SessionController;

/// Starts a fresh session: zeroed counters, no puzzle, countdown running.
pub fn start_session(world: &mut World) {
    let session = world.resource_mut::<SessionController>().reset();
    world.resource_mut::<Arrangement>().clear();
    world.resource_mut::<Round>().restart();
    world.insert_resource(Input::default());

    info!("Session started at level {}", session.level);
}

/// Generates the next puzzle and lays its tiles out for the player.
pub fn spawn_puzzle(world: &mut World) {
    let arrangement = {
        let mut controller = world.resource_mut::<SessionController>();
        Arrangement::from_puzzle(controller.next_puzzle())
    };
    world.insert_resource(arrangement);

    let mut round = world.resource_mut::<Round>();
    round.phase = RoundPhase::Showing;
    round.feedback = None;
}

pub fn countdown_system(world: &mut World, delta_seconds: f32) {
    let finished = {
        let mut round = world.resource_mut::<Round>();
        let RoundPhase::Countdown { remaining, timer } = round.phase else {
            return;
        };

        let mut remaining = remaining;
        let mut timer = timer + delta_seconds;
        while remaining > 0 && timer >= 1.0 {
            timer -= 1.0;
            remaining -= 1;
            trace!("Countdown at {remaining}");
        }
        round.phase = RoundPhase::Countdown { remaining, timer };
        remaining == 0
    };

    if finished {
        debug!("Countdown finished");
        spawn_puzzle(world);
    }
}

pub fn input_system(world: &mut World) {
    let input = world.resource::<Input>().clone();
    let accepts_moves = world.resource::<Round>().accepts_moves();

    // Consume one-shot flags
    {
        let mut stored = world.resource_mut::<Input>();
        stored.left = false;
        stored.right = false;
        stored.grab = false;
        stored.submit = false;
        if stored.drop_column.is_some() {
            stored.drag = None;
            stored.drop_column = None;
        }
    }

    if !accepts_moves {
        return;
    }

    if let (Some(drag), Some(drop_column)) = (input.drag, input.drop_column) {
        let item_width = world.resource::<TileLayout>().item_width;
        let dx = i32::from(drop_column) - i32::from(drag.start_column);
        let mut arrangement = world.resource_mut::<Arrangement>();
        let target = arrangement.drop_dragged(drag.index, dx, item_width);
        trace!("Dragged tile {} by {dx} columns to {target}", drag.index);
    }

    let keyboard_move = input.grab || input.left || input.right;
    if keyboard_move && input.drop_column.is_none() && input.drag.is_some() {
        // The pressed tile may no longer sit at the captured index
        world.resource_mut::<Input>().drag = None;
    }

    {
        let mut arrangement = world.resource_mut::<Arrangement>();
        if input.grab {
            arrangement.toggle_hold();
        }
        if input.left {
            arrangement.step(-1);
        }
        if input.right {
            arrangement.step(1);
        }
    }

    if input.submit {
        submit_answer(world);
    }
}

/// Checks the current arrangement and starts the feedback delay.
pub fn submit_answer(world: &mut World) {
    if !world.resource::<Round>().accepts_moves() {
        return;
    }

    let order = {
        let mut arrangement = world.resource_mut::<Arrangement>();
        arrangement.held = None;
        arrangement.order.clone()
    };

    let verdict = match world.resource_mut::<SessionController>().submit(&order) {
        Ok(verdict) => verdict,
        Err(e) => {
            warn!("Submission ignored: {e}");
            return;
        }
    };

    let mut round = world.resource_mut::<Round>();
    let remaining = round.result_delay;
    round.feedback = Some(Feedback {
        correct: verdict.correct,
        game_over: verdict.game_over,
    });
    round.phase = RoundPhase::AwaitingDelay { remaining };
}

pub fn feedback_delay_system(world: &mut World, delta_seconds: f32) {
    let mut round = world.resource_mut::<Round>();
    if let RoundPhase::AwaitingDelay { remaining } = round.phase {
        let remaining = remaining - delta_seconds;
        round.phase = if remaining <= 0.0 {
            RoundPhase::Transitioning
        } else {
            RoundPhase::AwaitingDelay { remaining }
        };
    }
}

pub fn transition_system(world: &mut World) {
    if world.resource::<Round>().phase != RoundPhase::Transitioning {
        return;
    }

    if world.resource::<SessionController>().session().is_over() {
        let mut round = world.resource_mut::<Round>();
        round.phase = RoundPhase::GameOver;
        round.game_over_choice = GameOverChoice::default();
        debug!("Showing game over");
    } else {
        spawn_puzzle(world);
    }
}

pub fn game_tick_system(world: &mut World, delta_seconds: f32) {
    countdown_system(world, delta_seconds);
    feedback_delay_system(world, delta_seconds);
    transition_system(world);
}
