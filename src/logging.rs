// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! File-backed tracing setup.
//!
//! The TUI owns stdout, so logs only go to a file the user names. `PROTEUS_LOG` takes an
//! `EnvFilter` directive and defaults to `info`.

use std::env;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "PROTEUS_LOG";
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("cannot open log file {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("invalid PROTEUS_LOG filter: {0}")]
    Filter(#[from] ParseError),
    #[error("logging already initialised: {0}")]
    Init(#[from] TryInitError),
}

/// Builds the filter from a directive string, falling back to [`DEFAULT_FILTER`] when unset or
/// blank.
pub fn filter_from(directives: Option<&str>) -> Result<EnvFilter, LoggingError> {
    match directives.map(str::trim) {
        Some(directives) if !directives.is_empty() => Ok(EnvFilter::try_new(directives)?),
        _ => Ok(EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Appends plain-text tracing output to `path` using the `PROTEUS_LOG` filter.
pub fn init_file_logging(path: &Path) -> Result<(), LoggingError> {
    let directives = env::var(LOG_ENV).ok();
    let filter = filter_from(directives.as_deref())?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}
