//! Command-line interface for hangman_worker.

use clap::{Parser, Subcommand};

/// Hangman Worker - session-based word guessing over text channels
#[derive(Parser, Debug)]
#[command(name = "hangman_worker")]
#[command(about = "Hangman game worker for stateless text channels", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP event endpoint
    Serve {
        /// Path to worker configuration file
        #[arg(short, long, default_value = "hangman.toml")]
        config: std::path::PathBuf,

        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Play a game locally on stdin/stdout (in-memory store)
    Play {
        /// Path to worker configuration file
        #[arg(short, long, default_value = "hangman.toml")]
        config: std::path::PathBuf,
    },
}
