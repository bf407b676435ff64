use std::fs::File;
use std::io;
use std::path::Path;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::terminal::{enable_raw_mode, supports_keyboard_enhancement};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use alien_invasion::app::{App, DOTS_X, DOTS_Y};
use alien_invasion::audio::Jukebox;
use alien_invasion::cli::Config;
use alien_invasion::event::{Event, EventHandler};
use alien_invasion::game::AlienInvasion;
use alien_invasion::scores::HighScoreFile;
use alien_invasion::settings::Settings;
use alien_invasion::{terminal as term, ui};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.log_file.as_deref())?;

    let score_file = HighScoreFile::new(
        config
            .score_file
            .clone()
            .unwrap_or_else(HighScoreFile::default_path),
    );
    let high_score = score_file.load()?;
    log::info!("Loaded high score {} from {}", high_score, score_file.path().display());

    let mut settings = Settings::default();
    config.apply(&mut settings);

    // Setup terminal
    enable_raw_mode()?;
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    let result = setup_and_run(&config, settings, score_file, high_score, release_events);

    // Restore terminal, whatever happened above
    let restored = term::restore(&mut io::stdout(), release_events);
    result?;
    restored?;
    Ok(())
}

fn setup_and_run(
    config: &Config,
    settings: Settings,
    score_file: HighScoreFile,
    high_score: u32,
    release_events: bool,
) -> Result<()> {
    let mut stdout = io::stdout();
    term::enter(&mut stdout, release_events)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    run(&mut terminal, config, settings, score_file, high_score, release_events)
}

fn run(
    terminal: &mut Tui,
    config: &Config,
    mut settings: Settings,
    score_file: HighScoreFile,
    high_score: u32,
    release_events: bool,
) -> Result<()> {
    // Size the field before the first fleet is built
    let size = terminal.size()?;
    let [_, field, _] = ui::layout(Rect::new(0, 0, size.width, size.height));
    settings.screen_width = field.width as f32 * DOTS_X as f32;
    settings.screen_height = field.height as f32 * DOTS_Y as f32;
    log::info!(
        "Playfield {}x{} px, key release events: {}",
        settings.screen_width,
        settings.screen_height,
        release_events
    );

    let tick_rate = settings.tick_rate;
    let mut app = App::new(AlienInvasion::new(settings, high_score), score_file, release_events);
    let mut jukebox = Jukebox::new(config.bell);
    let event_handler = EventHandler::new(tick_rate);

    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;
        for sound in app.game.drain_sounds() {
            jukebox.play(sound, terminal.backend_mut())?;
        }

        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
            Event::Mouse(mouse) => app.on_mouse(mouse),
            Event::Resize => terminal.autoresize()?,
        }

        if app.should_quit {
            break;
        }
    }

    let high_score = app.shutdown()?;
    for sound in app.game.drain_sounds() {
        jukebox.play(sound, terminal.backend_mut())?;
    }
    terminal.draw(|frame| ui::render_goodbye(frame, high_score))?;
    thread::sleep(app.game.settings.quit_pause);
    Ok(())
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    // The alternate screen owns stdout/stderr, so logs only go to a file
    let Some(path) = path else { return Ok(()) };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
