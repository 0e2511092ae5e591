//! Hangman Worker - Unified CLI
//!
//! Session-based hangman worker with an HTTP event endpoint and a
//! local play mode.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use clap::Parser;
use cli::{Cli, Command};
use hangman_worker::{
    EventKind, HangmanConfig, HangmanWorker, HttpWordSource, InboundEvent, MemoryStore,
    WorkerError,
};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

/// Worker wired with the collaborators the binary uses.
type Worker = HangmanWorker<MemoryStore, HttpWordSource>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config, port, host } => run_server(&config, host, port).await,
        Command::Play { config } => run_play(&config).await,
    }
}

/// Builds a worker from the config file with an in-memory store.
#[instrument(skip(config_path), fields(path = %config_path.display()))]
fn build_worker(config_path: &Path) -> Result<Worker> {
    let config = HangmanConfig::from_file(config_path)?;
    let words = HttpWordSource::new(config.random_word_url().clone());
    Ok(HangmanWorker::new(MemoryStore::new(), words, &config))
}

/// Run the HTTP event endpoint
async fn run_server(config_path: &Path, host: String, port: u16) -> Result<()> {
    info!("Starting hangman worker HTTP endpoint");
    info!(port, "Server will listen on http://{}:{}", host, port);

    let worker = Arc::new(build_worker(config_path)?);

    let app = Router::new()
        .route("/event", post(handle_event))
        .with_state(worker);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Server ready, POST inbound events to /event");
    axum::serve(listener, app).await?;

    Ok(())
}

/// POST /event handler: one inbound event in, one reply (or no
/// content, for close events) out.
#[instrument(skip(worker, event), fields(session_id = %event.session_id, kind = ?event.kind))]
async fn handle_event(
    State(worker): State<Arc<Worker>>,
    Json(event): Json<InboundEvent>,
) -> Response {
    match worker.handle_event(event).await {
        Ok(Some(reply)) => Json(reply).into_response(),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            warn!(error = %e, "Event handling failed");
            let status = match &e {
                WorkerError::SessionNotFound(_) => StatusCode::CONFLICT,
                WorkerError::MalformedEvent(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Play a game locally on stdin/stdout
async fn run_play(config_path: &Path) -> Result<()> {
    let worker = build_worker(config_path)?;
    let session_id = format!("local_{}", std::process::id());
    let sender = "+0000".to_string();

    let reply = worker
        .handle_event(InboundEvent {
            session_id: session_id.clone(),
            sender: sender.clone(),
            kind: EventKind::Start,
            message: None,
        })
        .await?;
    if let Some(reply) = reply {
        print!("{}", reply.text);
    }

    let stdin = std::io::stdin();
    loop {
        std::io::stdout().flush()?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        let reply = worker
            .handle_event(InboundEvent {
                session_id: session_id.clone(),
                sender: sender.clone(),
                kind: EventKind::Continue,
                message: Some(line.trim().to_string()),
            })
            .await?;
        match reply {
            Some(reply) => {
                print!("{}", reply.text);
                if reply.terminal {
                    println!();
                    break;
                }
            }
            None => break,
        }
    }

    Ok(())
}
