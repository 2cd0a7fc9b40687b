//! Unscramble - a terminal word-scramble game
//!
//! Put the letters back in order before the rounds run out.

mod app;
mod tui;

use anyhow::{Context, Result};
use app::App;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;
use tui::Tui;
use unscramble::{logging, GameConfig, GameEngine, Language, WordCorpus};

/// How long to wait for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    if let Err(e) = logging::init() {
        eprintln!("warning: logging disabled: {}", e);
    }

    let config = GameConfig::from_env().context("invalid configuration")?;
    let corpus = WordCorpus::from_config(&config).context("failed to load word lists")?;
    for &language in Language::all() {
        if corpus.is_empty(language) {
            tracing::warn!("No {} words available, fallback words will be used", language.code());
        } else {
            tracing::info!("{} {} words available", corpus.len(language), language.code());
        }
    }
    let mut app = App::new(GameEngine::new(corpus, &config));

    let mut terminal = Tui::enter().context("failed to set up terminal")?;

    // Main event loop
    loop {
        terminal.draw(|frame| tui::render(frame, &app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    terminal.restore()?;
    tracing::info!("exiting");
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Enter => app.on_submit(),
        KeyCode::Backspace => app.on_backspace(),
        KeyCode::Tab => app.on_skip(),
        KeyCode::F(2) => app.on_toggle_language(),
        KeyCode::Char('r') | KeyCode::Char('R') if app.view().is_game_over => app.on_restart(),
        KeyCode::Char(c) if c.is_alphabetic() || c == '-' => app.on_char(c),
        _ => {}
    }
}
