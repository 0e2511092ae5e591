//! Session lifecycle controller.
//!
//! The worker maps inbound transport events onto game state
//! transitions: a `Start` event loads or creates the player's game, a
//! `Continue` event feeds the message to the game and decides whether
//! the session continues, restarts with a fresh word, or terminates,
//! and a `Close` event does nothing at all — games deliberately
//! survive channel disconnects so the player can resume later.
//!
//! The store and word source are injected at construction, so the
//! worker is a pure function of its inputs plus those two
//! collaborators.

use crate::codec;
use crate::codec::CorruptState;
use crate::config::HangmanConfig;
use crate::game::{Game, InvalidWord, Outcome};
use crate::store::{SessionStore, StoreError};
use crate::words::{WordSource, WordSourceError};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Kind of inbound session event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Session opened (dial-in). No message payload expected.
    Start,
    /// Session continued with a message from the player.
    Continue,
    /// Channel session closed by the transport.
    Close,
}

/// Inbound event delivered by the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEvent {
    /// Transport session identifier, echoed back in the reply.
    pub session_id: String,
    /// Player identifier, e.g. an msisdn like `+27001`.
    pub sender: String,
    /// Kind of event.
    pub kind: EventKind,
    /// Message payload (present for `Continue` events).
    #[serde(default)]
    pub message: Option<String>,
}

/// Outbound reply produced by the worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundReply {
    /// Transport session identifier this reply belongs to.
    pub session_id: String,
    /// Rendered board text.
    pub text: String,
    /// Whether the transport should end the channel session.
    pub terminal: bool,
}

/// Worker error.
#[derive(Debug, Display, Error, From)]
pub enum WorkerError {
    /// A `Continue` event arrived for a player with no stored game.
    #[display("No session found for player '{}'", _0.player)]
    #[from(skip)]
    SessionNotFound(#[error(not(source))] SessionNotFound),
    /// The stored record could not be decoded.
    #[display("{}", _0)]
    CorruptState(CorruptState),
    /// The session store failed.
    #[display("{}", _0)]
    Store(StoreError),
    /// The word source failed.
    #[display("{}", _0)]
    WordSource(WordSourceError),
    /// The word source produced a word the game rejects.
    #[display("{}", _0)]
    InvalidWord(InvalidWord),
    /// The event is missing a required field.
    #[display("Malformed event: {}", _0.message)]
    #[from(skip)]
    MalformedEvent(#[error(not(source))] MalformedEvent),
}

/// Details for [`WorkerError::SessionNotFound`].
#[derive(Debug, Clone)]
pub struct SessionNotFound {
    /// Normalized player identifier with no stored game.
    pub player: String,
}

/// Details for [`WorkerError::MalformedEvent`].
#[derive(Debug, Clone)]
pub struct MalformedEvent {
    /// What was missing or wrong.
    pub message: String,
}

/// Session lifecycle controller for hangman games.
#[derive(Debug, Clone)]
pub struct HangmanWorker<S, W> {
    store: S,
    words: W,
    key_prefix: String,
}

impl<S: SessionStore, W: WordSource> HangmanWorker<S, W> {
    /// Creates a worker with injected collaborators.
    ///
    /// The store namespace is derived from the configured transport
    /// name and channel code, with the channel code made key-safe.
    #[instrument(skip(store, words, config), fields(transport = %config.transport_name()))]
    pub fn new(store: S, words: W, config: &HangmanConfig) -> Self {
        let key_prefix = format!(
            "hangman:{}:{}",
            config.transport_name(),
            safe_routing_key(config.ussd_code())
        );
        info!(%key_prefix, "Creating hangman worker");
        Self {
            store,
            words,
            key_prefix,
        }
    }

    /// Handles one inbound event, returning the reply to send (if
    /// any — `Close` events produce none).
    #[instrument(skip(self, event), fields(session_id = %event.session_id, kind = ?event.kind))]
    pub async fn handle_event(
        &self,
        event: InboundEvent,
    ) -> Result<Option<OutboundReply>, WorkerError> {
        match event.kind {
            EventKind::Start => self.new_session(event).await.map(Some),
            EventKind::Continue => self.resume_session(event).await.map(Some),
            EventKind::Close => {
                self.close_session(&event);
                Ok(None)
            }
        }
    }

    /// Finds or creates the player's game and replies with its board.
    #[instrument(skip(self, event), fields(session_id = %event.session_id, sender = %event.sender))]
    async fn new_session(&self, event: InboundEvent) -> Result<OutboundReply, WorkerError> {
        info!("New session");
        let key = self.game_key(&event.sender);
        let game = match self.load_game(&key).await? {
            Some(game) => {
                debug!("Resuming stored game");
                game
            }
            None => {
                let game = self.new_game().await?;
                self.save_game(&key, &game).await?;
                game
            }
        };
        Ok(OutboundReply {
            session_id: event.session_id,
            text: game.draw_board(),
            terminal: false,
        })
    }

    /// Applies the player's message to their game and branches on the
    /// resulting outcome.
    #[instrument(skip(self, event), fields(session_id = %event.session_id, sender = %event.sender))]
    async fn resume_session(&self, event: InboundEvent) -> Result<OutboundReply, WorkerError> {
        info!("Resume session");
        let message = event.message.as_deref().ok_or_else(|| {
            WorkerError::MalformedEvent(MalformedEvent {
                message: "continue event carries no message".to_string(),
            })
        })?;
        let key = self.game_key(&event.sender);
        let mut game = self.load_game(&key).await?.ok_or_else(|| {
            warn!("Continue event for player with no stored game");
            WorkerError::SessionNotFound(SessionNotFound {
                player: normalize_msisdn(&event.sender),
            })
        })?;

        game.event(message.trim());
        match game.outcome() {
            Outcome::Finished => {
                info!("Game ended, deleting stored state");
                self.store.delete(&key).await?;
                Ok(OutboundReply {
                    session_id: event.session_id,
                    text: game.draw_board(),
                    terminal: true,
                })
            }
            Outcome::FinishedWantsNew => {
                info!("Starting fresh game");
                let game = self.new_game().await?;
                self.save_game(&key, &game).await?;
                Ok(OutboundReply {
                    session_id: event.session_id,
                    text: game.draw_board(),
                    terminal: false,
                })
            }
            Outcome::InProgress => {
                self.save_game(&key, &game).await?;
                Ok(OutboundReply {
                    session_id: event.session_id,
                    text: game.draw_board(),
                    terminal: false,
                })
            }
        }
    }

    /// Channel close is a no-op: the saved game sticks around so the
    /// player can pick it up again later.
    #[instrument(skip(self, event), fields(session_id = %event.session_id))]
    fn close_session(&self, event: &InboundEvent) {
        debug!("Session closed, keeping stored game");
    }

    /// Key for looking up a player's game in the store.
    pub fn game_key(&self, sender: &str) -> String {
        format!("{}#{}", self.key_prefix, normalize_msisdn(sender))
    }

    /// Fetches a word and constructs a new game from it.
    #[instrument(skip(self))]
    async fn new_game(&self) -> Result<Game, WorkerError> {
        let word = self.words.fetch_word().await?;
        let game = Game::new(word)?;
        info!("Created new game");
        Ok(game)
    }

    /// Loads and decodes the stored game for a key, if present.
    async fn load_game(&self, key: &str) -> Result<Option<Game>, WorkerError> {
        match self.store.get(key).await? {
            Some(bytes) => Ok(Some(codec::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Encodes and writes the game for a key.
    async fn save_game(&self, key: &str, game: &Game) -> Result<(), WorkerError> {
        self.store.set(key, codec::encode(game)).await?;
        Ok(())
    }
}

/// Canonicalizes a player identifier so equivalent spellings map to
/// the same store key (`+27001`, ` 27001 ` and `27001` are one
/// player).
pub fn normalize_msisdn(sender: &str) -> String {
    sender.trim().trim_start_matches('+').to_string()
}

/// Makes a channel code safe for use inside a store key by replacing
/// the characters USSD codes are made of.
pub fn safe_routing_key(code: &str) -> String {
    code.replace('*', "s").replace('#', "h")
}
