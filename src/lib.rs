//! Hangman worker library - session-based word guessing over text channels
//!
//! This library implements the game logic and session lifecycle for a
//! hangman game played one letter per turn over a stateless,
//! session-oriented channel (e.g. USSD).
//!
//! # Architecture
//!
//! - **Game**: per-player state machine applying one input per turn
//! - **Codec**: delimiter-based encoding of a game for storage
//! - **Store**: keyed byte-string storage, one persisted game per player
//! - **Words**: word source supplying a fresh word for each new game
//! - **Worker**: session controller wiring events to game transitions
//!
//! # Example
//!
//! ```no_run
//! use hangman_worker::{
//!     EventKind, HangmanConfig, HangmanWorker, HttpWordSource, InboundEvent, MemoryStore,
//! };
//!
//! # async fn example() -> Result<(), hangman_worker::WorkerError> {
//! let config = HangmanConfig::new(
//!     "ussd_transport".to_string(),
//!     "*120*1#".to_string(),
//!     "http://randomword.example.com/get".to_string(),
//! );
//! let words = HttpWordSource::new(config.random_word_url().clone());
//! let worker = HangmanWorker::new(MemoryStore::new(), words, &config);
//!
//! let reply = worker
//!     .handle_event(InboundEvent {
//!         session_id: "session_1".to_string(),
//!         sender: "+27001".to_string(),
//!         kind: EventKind::Start,
//!         message: None,
//!     })
//!     .await?;
//! assert!(reply.is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod codec;
mod config;
mod game;
mod store;
mod words;
mod worker;

// Crate-level exports - Game state machine
pub use game::{Game, InvalidWord, Outcome};

// Crate-level exports - State codec
pub use codec::{CorruptState, decode, encode};

// Crate-level exports - Session store
pub use store::{MemoryStore, SessionStore, StoreError};

// Crate-level exports - Word source
pub use words::{HttpWordSource, WordSource, WordSourceError, normalize_word};

// Crate-level exports - Session controller
pub use worker::{
    EventKind, HangmanWorker, InboundEvent, MalformedEvent, OutboundReply, SessionNotFound,
    WorkerError, normalize_msisdn, safe_routing_key,
};

// Crate-level exports - Configuration
pub use config::{ConfigError, HangmanConfig};
