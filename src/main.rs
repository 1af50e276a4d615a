use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use taskboard::config::{Cli, Command, ReplayConfig};
use taskboard::doc::Board;
use taskboard::engine::BoardEngine;
use taskboard::error::SeedError;
use taskboard::machine::DragEvent;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("board load failed: {0}")]
    Seed(#[from] SeedError),
    #[error("failed to read script {path}: {source}")]
    Script { path: String, source: std::io::Error },
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = ReplayConfig::from(Cli::parse());
    match run(&config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "taskboard failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ReplayConfig) -> Result<String, CliError> {
    let board = config.initial_board()?;
    let board = match &config.command {
        Command::Seed => board,
        Command::Replay { script } => replay(board, script, config.trace)?,
    };
    Ok(serde_json::to_string_pretty(&board)?)
}

fn replay(board: Board, script: &Path, trace: bool) -> Result<Board, CliError> {
    let text = std::fs::read_to_string(script)
        .map_err(|source| CliError::Script { path: script.display().to_string(), source })?;
    let events: Vec<DragEvent> = serde_json::from_str(&text)?;
    tracing::info!(events = events.len(), "replaying drag script");

    let mut engine = BoardEngine::new(board);
    for (step, event) in events.iter().enumerate() {
        let outcome = engine.apply(event);
        if trace {
            eprintln!("#{step}: {outcome:?}");
        }
    }
    Ok(engine.board().clone())
}
