#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, error, info, warn};
use numberorder::app::{App, AppResult};
use numberorder::config::loader;
use numberorder::progress::FileProgress;
use numberorder::ui;
use ratatui::{Terminal, prelude::*};

const LOG_PATH: &str = "numberorder.log";

fn main() -> AppResult<()> {
    init_logging();

    info!("Starting Number Order");

    // Initialize configuration system
    match loader::load_config_from_file() {
        Ok(_) => info!("Configuration loaded successfully"),
        // Continue with default configuration
        Err(e) => error!("Failed to load configuration: {e}"),
    }

    let progress = FileProgress::from_env();
    info!("Recording progress to {}", progress.path().display());

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(33); // ~30 FPS
    let game_tick_rate = Duration::from_millis(50); // Game logic updates less often

    let app = App::with_tracker(Box::new(progress));
    let res = run_app(&mut terminal, app, tick_rate, game_tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Game error: {err:?}");
        return Err(err);
    }

    info!("Exiting");
    Ok(())
}

// The terminal belongs to the UI, so logs go to a file
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.format_timestamp(None).format_module_path(false);

    match std::fs::File::create(LOG_PATH) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            // Nothing sensible to log to; stay quiet rather than draw over the UI
            builder.filter_level(log::LevelFilter::Off);
            eprintln!("Could not create {LOG_PATH}: {e}");
        }
    }

    builder.init();
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
    game_tick_rate: Duration,
) -> AppResult<()> {
    let mut last_render = Instant::now();
    let mut last_game_tick = Instant::now();

    // Explicitly flush any pending input events that might be in the buffer
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read()?;
    }

    debug!("Event loop started");

    loop {
        if last_render.elapsed() >= tick_rate {
            terminal.draw(|f| ui::render(f, &mut app))?;
            last_render = Instant::now();
        }

        if last_game_tick.elapsed() >= game_tick_rate {
            last_game_tick = Instant::now();
            app.on_tick();
        }

        if app.should_quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(5))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    if width < ui::MIN_WIDTH || height < ui::MIN_HEIGHT {
                        warn!("Terminal resized to {width}x{height}, below the minimum");
                    }
                }
                _ => {}
            }
        }
    }
}
