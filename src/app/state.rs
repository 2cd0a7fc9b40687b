//! Application state: keyboard actions forwarded to the game engine

use std::sync::mpsc::Receiver;

use unscramble::{GameEngine, GameState};

/// Feedback shown after a wrong guess
pub const WRONG_GUESS_FEEDBACK: &str = "Wrong guess! Try again.";

/// Main application state
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    engine: GameEngine,
    updates: Receiver<GameState>,
    /// Latest snapshot published by the engine
    view: GameState,
}

impl App {
    /// Wrap an engine and follow its state stream
    pub fn new(mut engine: GameEngine) -> Self {
        let updates = engine.subscribe();
        let view = engine.state().clone();
        Self {
            should_quit: false,
            engine,
            updates,
            view,
        }
    }

    /// Snapshot to render
    pub fn view(&self) -> &GameState {
        &self.view
    }

    /// Rounds per game
    pub fn max_rounds(&self) -> u32 {
        self.engine.max_rounds()
    }

    /// Points per correct guess
    pub fn score_increment(&self) -> u32 {
        self.engine.score_increment()
    }

    /// Feedback line for the current snapshot
    pub fn feedback(&self) -> Option<&'static str> {
        self.view.is_guess_wrong.then_some(WRONG_GUESS_FEEDBACK)
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handle character input (locked when the game is over)
    pub fn on_char(&mut self, c: char) {
        if self.view.is_game_over {
            return;
        }
        let mut guess = self.view.user_guess.clone();
        guess.push(c);
        self.engine.update_guess(&guess);
        self.sync();
    }

    /// Handle backspace (locked when the game is over)
    pub fn on_backspace(&mut self) {
        if self.view.is_game_over {
            return;
        }
        let mut guess = self.view.user_guess.clone();
        if guess.pop().is_none() {
            return;
        }
        self.engine.update_guess(&guess);
        self.sync();
    }

    /// Handle Enter: check the guess, or start over once the game has ended
    pub fn on_submit(&mut self) {
        if self.view.is_game_over {
            self.on_restart();
            return;
        }
        self.engine.check_guess();
        self.sync();
    }

    /// Skip the current word
    pub fn on_skip(&mut self) {
        if self.view.is_game_over {
            return;
        }
        self.engine.skip();
        self.sync();
    }

    /// Switch to the other word list
    pub fn on_toggle_language(&mut self) {
        if self.view.is_game_over {
            return;
        }
        let language = self.view.language.toggle();
        self.engine.set_language(language);
        self.sync();
    }

    /// Start a new game
    pub fn on_restart(&mut self) {
        self.engine.reset();
        self.sync();
    }

    /// Take the newest snapshot from the engine's stream
    fn sync(&mut self) {
        if let Some(latest) = self.updates.try_iter().last() {
            self.view = latest;
        }
    }
}
