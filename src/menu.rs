use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::config::Config;
use crate::menu_types::{Menu, MenuOption, MenuState, OptionsOption};
use crate::ui::centered_rect;

const TITLE: &str = "NUMBER ORDER";
const SUBTITLE: &str = "Put the numbers in order before you run out of tries!";

pub fn render_menu(f: &mut Frame, menu: &Menu) {
    let config = Config::current();
    let accent: Color = config.display.accent_color.into();

    let area = centered_rect(60, 60, f.area());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title
            Constraint::Min(4),    // Options
            Constraint::Length(2), // Controls
        ])
        .split(area);

    render_title(f, chunks[0], accent);
    match menu.state {
        MenuState::MainMenu => render_main_menu_options(f, chunks[1], menu),
        MenuState::Options => render_options_menu(f, chunks[1], menu, &config),
        MenuState::Game => {}
    }

    let controls = Paragraph::new("↑/↓: Select   Enter: Confirm   Q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(controls, chunks[2]);
}

fn render_title(f: &mut Frame, area: Rect, accent: Color) {
    let title_style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    let text = Text::from(vec![
        Line::from(Span::styled(TITLE, title_style)),
        Line::from(""),
        Line::from(SUBTITLE),
    ]);
    let title = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_main_menu_options(f: &mut Frame, area: Rect, menu: &Menu) {
    let selected = match menu.selected_option {
        MenuOption::NewGame => 0,
        MenuOption::Options => 1,
        MenuOption::Quit => 2,
    };
    render_option_list(f, area, &["New Game", "Options", "Quit"], selected);
}

fn render_options_menu(f: &mut Frame, area: Rect, menu: &Menu, config: &Config) {
    let hints = format!(
        "Hints: {}",
        if config.gameplay.show_hints { "ON" } else { "OFF" }
    );
    let selected = match menu.options_selected {
        OptionsOption::HintsToggle => 0,
        OptionsOption::Back => 1,
    };
    render_option_list(f, area, &[hints.as_str(), "Back"], selected);
}

fn render_option_list(f: &mut Frame, area: Rect, options: &[&str], selected: usize) {
    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = if i == selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(Span::styled((*option).to_string(), style))
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
