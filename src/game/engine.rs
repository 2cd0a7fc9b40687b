//! Round, score and word bookkeeping for one game session

use std::collections::HashSet;
use std::sync::mpsc::{channel, Receiver, Sender};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::corpus::WordCorpus;
use super::language::Language;
use super::scramble::scramble;
use super::selector::pick_word;
use super::state::GameState;
use crate::config::GameConfig;

/// Drives a game: picks and scrambles words, checks guesses, counts rounds and score.
///
/// Every operation replaces the current [`GameState`] with a new snapshot and
/// sends exactly one copy of it to each subscriber, in order.
pub struct GameEngine<R: Rng = StdRng> {
    corpus: WordCorpus,
    max_rounds: u32,
    score_increment: u32,
    rng: R,
    state: GameState,
    /// Word the player must guess, never published
    current_word: String,
    /// Words shown this session, lowercase
    used_words: HashSet<String>,
    subscribers: Vec<Sender<GameState>>,
}

impl GameEngine<StdRng> {
    /// Start a game seeded from the operating system
    pub fn new(corpus: WordCorpus, config: &GameConfig) -> Self {
        Self::with_rng(corpus, config, StdRng::from_os_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Start a game using a specific RNG (for testing/seeding)
    pub fn with_rng(corpus: WordCorpus, config: &GameConfig, rng: R) -> Self {
        let mut engine = Self {
            corpus,
            max_rounds: config.max_rounds.max(1),
            score_increment: config.score_increment,
            rng,
            state: GameState::default(),
            current_word: String::new(),
            used_words: HashSet::new(),
            subscribers: Vec::new(),
        };
        engine.start(config.language);
        engine
    }

    /// Current snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Receive every snapshot published from now on
    pub fn subscribe(&mut self) -> Receiver<GameState> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Rounds per game
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Points per correct guess
    pub fn score_increment(&self) -> u32 {
        self.score_increment
    }

    /// Replace the player's guess
    pub fn update_guess(&mut self, guess: &str) {
        let next = self.state.with_guess(guess);
        self.publish(next);
    }

    /// Check the guess against the current word, ignoring case.
    ///
    /// A match scores and moves on (or ends the game on the last round); a
    /// mismatch only flags the guess as wrong. The guess is cleared either way.
    pub fn check_guess(&mut self) {
        if self.state.is_game_over {
            let next = self.state.with_guess("");
            self.publish(next);
            return;
        }

        if self.state.user_guess.to_lowercase() == self.current_word.to_lowercase() {
            let score = self.state.score.saturating_add(self.score_increment);
            tracing::debug!(round = self.state.round, score, "correct guess");
            self.advance(score);
        } else {
            let next = self.state.wrong_guess();
            self.publish(next);
        }
    }

    /// Give up on the current word without scoring
    pub fn skip(&mut self) {
        if self.state.is_game_over {
            let next = self.state.with_guess("");
            self.publish(next);
            return;
        }

        tracing::debug!(round = self.state.round, "word skipped");
        let score = self.state.score;
        self.advance(score);
    }

    /// Switch word lists and show a word from the new one.
    ///
    /// Score, round and the used-word set carry over.
    pub fn set_language(&mut self, language: Language) {
        tracing::debug!(from = %self.state.language, to = %language, "language changed");
        let scrambled = self.next_word(language);
        let next = self.state.with_language(language, scrambled);
        self.publish(next);
    }

    /// Start a new game in the current language
    pub fn reset(&mut self) {
        let language = self.state.language;
        self.start(language);
        let next = self.state.clone();
        self.publish_existing(next);
    }

    fn start(&mut self, language: Language) {
        self.used_words.clear();
        let scrambled = self.next_word(language);
        tracing::info!(%language, rounds = self.max_rounds, "new game");
        self.state = GameState::first_round(scrambled, language);
    }

    /// Move past the current round, ending the game after the last one
    fn advance(&mut self, score: u32) {
        let next = if self.state.round >= self.max_rounds {
            tracing::info!(score, "game over");
            self.state.game_over(score)
        } else {
            let scrambled = self.next_word(self.state.language);
            self.state.next_round(scrambled, score)
        };
        self.publish(next);
    }

    /// Pick an unused word, remember it, and return it scrambled
    fn next_word(&mut self, language: Language) -> String {
        let word = pick_word(
            self.corpus.words(language),
            &mut self.used_words,
            &mut self.rng,
        );
        tracing::debug!(%language, used = self.used_words.len(), "picked word");
        let scrambled = scramble(&word, &mut self.rng);
        self.current_word = word;
        scrambled
    }

    fn publish(&mut self, next: GameState) {
        self.state = next;
        let snapshot = self.state.clone();
        self.publish_existing(snapshot);
    }

    /// Send a snapshot to subscribers, dropping those that hung up
    fn publish_existing(&mut self, snapshot: GameState) {
        self.subscribers
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}
