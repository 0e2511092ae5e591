//! Delimiter-based state codec for persisted games.
//!
//! A game is stored as one UTF-8 byte string: `word:guesses:message`.
//! The delimiter can never appear in the first two fields (both are
//! restricted to lowercase letters), and the message consumes the rest
//! of the record, so any `:` inside it survives a round trip. The
//! outcome code is deliberately not part of the encoding: terminal
//! games are deleted from storage, never written, so every decoded game
//! restarts at `InProgress`.

use crate::game::Game;
use derive_more::{Display, Error};
use std::collections::BTreeSet;
use tracing::instrument;

/// Field delimiter in the encoded record.
const DELIMITER: char = ':';

/// Error decoding a malformed or truncated stored record.
#[derive(Debug, Clone, Display, Error)]
#[display("Corrupt state: {} at {}:{}", message, file, line)]
pub struct CorruptState {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CorruptState {
    /// Creates a new corrupt-state error with caller location tracking.
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

/// Serializes a game to its stored byte form.
#[instrument(skip(game), fields(word = %game.word()))]
pub fn encode(game: &Game) -> Vec<u8> {
    let guesses: String = game.guesses().iter().collect();
    format!(
        "{}{}{}{}{}",
        game.word(),
        DELIMITER,
        guesses,
        DELIMITER,
        game.msg()
    )
    .into_bytes()
}

/// Reconstructs a game from its stored byte form.
///
/// Splits on the delimiter at most twice; fewer than three parts means
/// the record is truncated or was never a game, and surfaces as a
/// [`CorruptState`] error rather than a silently empty game.
#[instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode(bytes: &[u8]) -> Result<Game, CorruptState> {
    let state = std::str::from_utf8(bytes)
        .map_err(|e| CorruptState::new(format!("stored record is not UTF-8: {}", e)))?;
    let mut parts = state.splitn(3, DELIMITER);
    let (Some(word), Some(guesses), Some(msg)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(CorruptState::new(format!(
            "expected 3 delimited fields, record has {}",
            state.matches(DELIMITER).count() + 1
        )));
    };
    let guesses: BTreeSet<char> = guesses.chars().collect();
    Ok(Game::from_parts(
        word.to_string(),
        guesses,
        msg.to_string(),
    ))
}
