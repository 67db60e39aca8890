use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::App;
use crate::components::{Arrangement, GameOverChoice, Round, RoundPhase, TileLayout};
use crate::config::{Config, DisplayConfig};
use crate::game::MAX_WRONG_ANSWERS;
use crate::menu;
use crate::menu_types::MenuState;
use crate::puzzle::Direction as OrderDirection;
use crate::session::{Session, SessionController};

// Minimum terminal size for the game screen
pub const MIN_WIDTH: u16 = 48;
pub const MIN_HEIGHT: u16 = 20;

const TILE_HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, app: &mut App) {
    if app.menu.state != MenuState::Game {
        menu::render_menu(f, &app.menu);
        return;
    }

    // Check if the terminal is too small to render the game properly
    if f.area().width < MIN_WIDTH || f.area().height < MIN_HEIGHT {
        let warning_text = Paragraph::new(
            "Terminal too small!\nPlease resize your terminal\nto continue playing.",
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Number Order"));
        f.render_widget(warning_text, centered_rect(50, 30, f.area()));
        app.world.insert_resource(TileLayout::default());
        return;
    }

    let config = Config::current();
    let round = app.world.resource::<Round>().clone();
    let arrangement = app.world.resource::<Arrangement>().clone();
    let (session, direction) = {
        let controller = app.world.resource::<SessionController>();
        (
            controller.session(),
            controller.puzzle().map(crate::puzzle::Puzzle::direction),
        )
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Question
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Controls
        ])
        .split(f.area());

    render_header(f, layout[0], &session, &config);

    let tile_layout = match (round.phase, direction) {
        (RoundPhase::Countdown { remaining, .. }, _) => {
            render_countdown(f, layout[1], remaining);
            TileLayout::default()
        }
        (_, Some(direction)) => {
            render_question(f, layout[1], &round, &arrangement, direction, &config)
        }
        (_, None) => TileLayout::default(),
    };
    app.world.insert_resource(tile_layout);

    let feedback_showing = matches!(
        round.phase,
        RoundPhase::AwaitingDelay { .. } | RoundPhase::Transitioning
    );
    render_progress(f, layout[2], &session, feedback_showing, &config);

    let controls = Paragraph::new(
        "←/→: Move   Space: Pick up/drop   Mouse: Drag   Enter: Check   Esc: Home   Q: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(controls, layout[3]);

    if round.phase == RoundPhase::GameOver {
        render_game_over(f, &session, round.game_over_choice);
    }
}

fn render_header(f: &mut Frame, area: Rect, session: &Session, config: &Config) {
    let accent: Color = config.display.accent_color.into();
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(inner);

    let lives = format!(
        "{}{}",
        "♥".repeat(session.strikes_left() as usize),
        "♡".repeat((MAX_WRONG_ANSWERS - session.strikes_left()) as usize)
    );
    f.render_widget(
        Paragraph::new(lives).style(Style::default().fg(Color::Red)),
        columns[0],
    );

    let level = Paragraph::new(format!("Level {}", session.level))
        .alignment(Alignment::Center)
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD));
    f.render_widget(level, columns[1]);

    let score = Paragraph::new(format!("{} ★", session.score))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(score, columns[2]);
}

fn render_countdown(f: &mut Frame, area: Rect, remaining: u32) {
    let text = Text::from(vec![
        Line::from(Span::styled(
            "Get Ready!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            remaining.max(1).to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("You will need to put the numbers in the right order!"),
    ]);
    let countdown = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(countdown, centered_rect(80, 60, area));
}

fn render_question(
    f: &mut Frame,
    area: Rect,
    round: &Round,
    arrangement: &Arrangement,
    direction: OrderDirection,
    config: &Config,
) -> TileLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),           // Instruction
            Constraint::Length(2),           // Direction
            Constraint::Length(TILE_HEIGHT), // Tiles
            Constraint::Length(1),           // Spacing
            Constraint::Length(3),           // Status button
            Constraint::Min(1),              // Hint
        ])
        .split(area);

    let instruction = Paragraph::new(format!("Arrange the numbers in {direction} order"))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(instruction, rows[0]);

    let arrow = match direction {
        OrderDirection::Ascending => "↗",
        OrderDirection::Descending => "↘",
    };
    let describe = Paragraph::new(format!("{arrow} {}", direction.describe()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(config.display.accent_color.into()));
    f.render_widget(describe, rows[1]);

    let tile_layout = render_tiles(f, rows[2], round, arrangement, &config.display);

    let (label, color): (&str, Color) = match round.feedback {
        Some(feedback) if feedback.correct => ("Correct!", config.display.correct_color.into()),
        Some(_) => ("Try Again!", config.display.wrong_color.into()),
        None => ("Check Order", config.display.accent_color.into()),
    };
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(button, centered_rect(40, 100, rows[4]));

    if config.gameplay.show_hints {
        let hint = Paragraph::new(hint_text(direction))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC))
            .wrap(Wrap { trim: true });
        f.render_widget(hint, rows[5]);
    }

    tile_layout
}

#[must_use]
pub fn hint_text(direction: OrderDirection) -> &'static str {
    match direction {
        OrderDirection::Ascending => "Tip: Drag to arrange from smallest to largest",
        OrderDirection::Descending => "Tip: Drag to arrange from largest to smallest",
    }
}

pub(crate) fn render_tiles(
    f: &mut Frame,
    area: Rect,
    round: &Round,
    arrangement: &Arrangement,
    display: &DisplayConfig,
) -> TileLayout {
    let item_width = display.item_width();
    let count = u16::try_from(arrangement.len()).unwrap_or(u16::MAX);
    let row_width = item_width.saturating_mul(count);
    let origin_x = area.x + area.width.saturating_sub(row_width) / 2;

    let feedback_color: Option<Color> = round.feedback.map(|feedback| {
        if feedback.correct {
            display.correct_color.into()
        } else {
            display.wrong_color.into()
        }
    });
    let accent: Color = display.accent_color.into();

    for (index, value) in arrangement.order.iter().enumerate() {
        let offset = u16::try_from(index).unwrap_or(u16::MAX);
        let x = origin_x
            .saturating_add(offset.saturating_mul(item_width))
            .saturating_add(display.tile_margin);
        let tile_area = Rect::new(x, area.y, display.tile_width, TILE_HEIGHT).intersection(area);
        if tile_area.is_empty() {
            continue;
        }

        let is_cursor = round.accepts_moves() && index == arrangement.cursor;
        let is_held = arrangement.held == Some(index);

        let mut style = Style::default().add_modifier(Modifier::BOLD);
        let mut border_style = Style::default();
        if let Some(color) = feedback_color {
            style = style.fg(Color::Black).bg(color);
            border_style = border_style.fg(color);
        } else if is_held {
            style = style.fg(Color::Black).bg(accent);
            border_style = border_style.fg(accent);
        } else if is_cursor {
            border_style = border_style.fg(accent);
        }

        let tile = Paragraph::new(value.to_string())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(if is_cursor {
                        BorderType::Thick
                    } else {
                        BorderType::Rounded
                    })
                    .border_style(border_style),
            );
        f.render_widget(tile, tile_area);
    }

    TileLayout {
        origin_x,
        y: area.y,
        height: TILE_HEIGHT,
        tile_width: display.tile_width,
        item_width,
        count: arrangement.len(),
    }
}

fn render_progress(
    f: &mut Frame,
    area: Rect,
    session: &Session,
    feedback_showing: bool,
    config: &Config,
) {
    let bar_color = if feedback_showing {
        config.display.accent_color.into()
    } else {
        Color::DarkGray
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(centered_rect(60, 100, area));

    let bar = Paragraph::new("━".repeat(usize::from(rows[0].width)))
        .style(Style::default().fg(bar_color));
    f.render_widget(bar, rows[0]);

    let questions = Paragraph::new(format!("{} Questions", session.questions_answered))
        .alignment(Alignment::Center);
    f.render_widget(questions, rows[1]);
}

fn render_game_over(f: &mut Frame, session: &Session, choice: GameOverChoice) {
    let area = centered_rect(50, 40, f.area());
    f.render_widget(Clear, area);

    let selected = Style::default().add_modifier(Modifier::REVERSED);
    let (try_again_style, home_style) = match choice {
        GameOverChoice::TryAgain => (selected, Style::default()),
        GameOverChoice::Home => (Style::default(), selected),
    };

    let text = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Game Over!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Your score: {}", session.score)),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Try Again ", try_again_style),
            Span::raw("   "),
            Span::styled(" Home ", home_style),
        ]),
    ]);

    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Number Order"));
    f.render_widget(popup, area);
}

/// Helper function to create a centered rect using up certain percentage of the available rect
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
