//! Hangman game state machine.
//!
//! A [`Game`] holds one player's puzzle: the hidden word, the letters
//! guessed so far, the message produced by the last action, and an
//! [`Outcome`] code. [`Game::event`] applies one raw input string per
//! turn; invalid input is modeled as a state transition with an
//! explanatory message, never as an error.

use derive_more::{Display, Error};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Terminal/non-terminal marker on a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Game is ongoing and accepts guesses.
    InProgress,
    /// Player quit; the stored game should be deleted.
    Finished,
    /// Player finished the word and wants a fresh game.
    FinishedWantsNew,
}

/// Error constructing a game from an invalid word.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid word: {} at {}:{}", message, file, line)]
pub struct InvalidWord {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidWord {
    /// Creates a new invalid-word error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// One player's hangman puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    word: String,
    guesses: BTreeSet<char>,
    msg: String,
    outcome: Outcome,
}

impl Game {
    /// Creates a new game for the given word.
    ///
    /// The word must already be normalized: non-empty, lowercase
    /// alphabet letters only. Anything else is rejected here rather
    /// than stored as an unplayable puzzle.
    #[instrument(skip(word))]
    pub fn new(word: impl Into<String>) -> Result<Self, InvalidWord> {
        let word = word.into();
        if word.is_empty() {
            return Err(InvalidWord::new("word is empty"));
        }
        if !word.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(InvalidWord::new(format!(
                "word {:?} contains characters outside a-z",
                word
            )));
        }
        Ok(Self {
            word,
            guesses: BTreeSet::new(),
            msg: "New game!".to_string(),
            outcome: Outcome::InProgress,
        })
    }

    /// Reassembles a game from decoded state. Used by the codec; the
    /// outcome always restarts at `InProgress` because terminal games
    /// are deleted from storage rather than encoded.
    pub(crate) fn from_parts(word: String, guesses: BTreeSet<char>, msg: String) -> Self {
        Self {
            word,
            guesses,
            msg,
            outcome: Outcome::InProgress,
        }
    }

    /// The hidden word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Letters guessed so far, in sorted order.
    pub fn guesses(&self) -> &BTreeSet<char> {
        &self.guesses
    }

    /// Message produced by the last action.
    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// Current outcome code.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Handles one user input string.
    ///
    /// The decision sequence matches the channel's rules: empty and
    /// multi-character input get a prompt to correct, `"0"` quits,
    /// input after a completed word asks for a new game, non-letters
    /// and repeats get a reminder, and a fresh letter is recorded as a
    /// hit or miss. A win detected after any branch overwrites the
    /// message with the victory tier; the outcome flips to
    /// `FinishedWantsNew` only on the *next* input, so the winning turn
    /// still shows its board.
    #[instrument(skip(self), fields(word = %self.word))]
    pub fn event(&mut self, input: &str) {
        let input = input.to_lowercase();
        if input.is_empty() {
            self.msg = "Some input required please.".to_string();
        } else if input.chars().count() > 1 {
            self.msg = "Single characters only please.".to_string();
        } else if input == "0" {
            self.outcome = Outcome::Finished;
            self.msg = "Game ended.".to_string();
        } else if self.won() {
            self.outcome = Outcome::FinishedWantsNew;
        } else if !input.chars().all(|c| c.is_ascii_lowercase()) {
            self.msg = "Letters of the alphabet only please.".to_string();
        } else {
            let letter = input.chars().next().expect("non-empty input");
            if self.guesses.contains(&letter) {
                self.msg = format!("You've already guessed '{}'.", letter);
            } else {
                let _ = self.guesses.insert(letter);
                debug!(%letter, "Guess recorded");
                if self.word.contains(letter) {
                    self.msg = format!("Word contains at least one '{}'! :D", letter);
                } else {
                    self.msg = format!("Word contains no '{}'. :(", letter);
                }
            }
        }

        if self.won() {
            self.msg = self.victory_message();
        }
    }

    /// Whether every letter of the word has been guessed.
    pub fn won(&self) -> bool {
        self.word.chars().all(|c| self.guesses.contains(&c))
    }

    /// Rates the win by how many guesses it took relative to the
    /// number of distinct letters in the word.
    pub fn victory_message(&self) -> String {
        let uniques = self.word.chars().collect::<BTreeSet<_>>().len() as f64;
        let guesses = self.guesses.len() as f64;
        let tiers = [
            (1.0, "Flawless victory!"),
            (1.5, "Epic victory!"),
            (2.0, "Standard victory!"),
            (3.0, "Sub-par victory!"),
            (4.0, "Random victory!"),
        ];
        for (factor, msg) in tiers {
            if guesses <= uniques * factor {
                return msg.to_string();
            }
        }
        "Button mashing!".to_string()
    }

    /// Renders the text board shown to the player.
    ///
    /// Terminal games render a fixed farewell; otherwise the board
    /// shows the masked word, the guessed letters, the last message,
    /// and the next prompt.
    pub fn draw_board(&self) -> String {
        if self.outcome != Outcome::InProgress {
            return "Adieu!".to_string();
        }
        let word: String = self
            .word
            .chars()
            .map(|c| if self.guesses.contains(&c) { c } else { '_' })
            .collect();
        let guesses: String = self.guesses.iter().collect();
        let prompt = if self.won() {
            "Enter anything to start a new game"
        } else {
            "Enter next guess"
        };
        format!(
            "{}\nWord: {}\nLetters guessed so far: {}\n{} (0 to quit):\n",
            self.msg, word, guesses, prompt
        )
    }
}
