//! # Display Dump
//! Prints the display snapshots recorded in a snapshot file.
//!
//! Usage: `display-dump <snapshots.toml> [--debug]`
//!

use std::{path::PathBuf, process::ExitCode};

use display_info::{DisplayInfoProvider, LoadError, ProviderError, SnapshotFile};
use logger::setup_logger;
use mimalloc::MiMalloc;
use thiserror::Error;
use tracing::{error, info, info_span, warn};

mod logger;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Debug, Error)]
enum AppError {
    #[error("No snapshot file was given.\nUsage: display-dump <snapshots.toml> [--debug]")]
    MissingPath,

    #[error("Failed to load snapshots:\n{0}")]
    Load(#[from] LoadError),

    #[error("Failed to query display:\n{0}")]
    Query(#[from] ProviderError),
}

/// If this instance should have debug enabled.
fn should_debug() -> bool {
    std::env::args().any(|arg| arg.eq("--debug"))
}

/// The first argument that isn't a flag.
fn snapshot_path() -> Option<PathBuf> {
    std::env::args()
        .skip(1)
        .find(|arg| !arg.starts_with("--"))
        .map(PathBuf::from)
}

fn run() -> Result<(), AppError> {
    let path = snapshot_path().ok_or(AppError::MissingPath)?;
    let provider = SnapshotFile::load(&path)?.into_provider();

    if provider.is_empty() {
        warn!("{} contains no displays", path.display());
        return Ok(());
    }

    for display_id in provider.display_ids()? {
        let _span = info_span!("Display", id = display_id).entered();
        let display_info = provider.display_info(display_id)?;

        println!("Display {display_id}: {display_info}");
        println!(
            "  natural size: {}, on: {}, round: {}",
            display_info.natural_size(),
            display_info.is_on(),
            display_info.is_round()
        );
    }

    info!("Listed {} displays", provider.len());
    Ok(())
}

fn main() -> ExitCode {
    let logger_guard = match setup_logger(should_debug()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to set up logger: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = run();
    if let Err(e) = &result {
        error!("{e}");
    }

    drop(logger_guard);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
