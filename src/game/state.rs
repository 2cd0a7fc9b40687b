//! Game state snapshot published by the engine

use super::language::Language;

/// Immutable view of a game, replaced as a whole after every operation.
///
/// The word being guessed is never part of the snapshot, only its scrambled form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    /// Scrambled letters of the current word
    pub scrambled_word: String,
    /// Whether the last checked guess was wrong
    pub is_guess_wrong: bool,
    /// Points earned so far
    pub score: u32,
    /// Current round, starting at 1
    pub round: u32,
    /// Set once the last round has been resolved
    pub is_game_over: bool,
    /// What the player has typed so far
    pub user_guess: String,
    /// Active word-list language
    pub language: Language,
}

impl GameState {
    /// Snapshot for the first round of a fresh game
    pub fn first_round(scrambled_word: String, language: Language) -> Self {
        Self {
            scrambled_word,
            round: 1,
            language,
            ..Default::default()
        }
    }

    /// Copy of this snapshot with a different guess
    pub fn with_guess(&self, user_guess: impl Into<String>) -> Self {
        Self {
            user_guess: user_guess.into(),
            ..self.clone()
        }
    }

    /// Copy of this snapshot marking the guess as wrong and clearing the input
    pub fn wrong_guess(&self) -> Self {
        Self {
            is_guess_wrong: true,
            user_guess: String::new(),
            ..self.clone()
        }
    }

    /// Copy of this snapshot moved on to the next round
    pub fn next_round(&self, scrambled_word: String, score: u32) -> Self {
        Self {
            scrambled_word,
            is_guess_wrong: false,
            score,
            round: self.round + 1,
            user_guess: String::new(),
            ..self.clone()
        }
    }

    /// Copy of this snapshot with the last round resolved
    pub fn game_over(&self, score: u32) -> Self {
        Self {
            is_guess_wrong: false,
            score,
            is_game_over: true,
            user_guess: String::new(),
            ..self.clone()
        }
    }

    /// Copy of this snapshot showing a word from another language
    pub fn with_language(&self, language: Language, scrambled_word: String) -> Self {
        Self {
            scrambled_word,
            language,
            ..self.clone()
        }
    }
}
