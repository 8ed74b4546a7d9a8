// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for corpus loading and bookmark persistence.
//!
//! The search pipeline itself never fails; only I/O does.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading a corpus or touching persistent storage.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file or directory could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input was not valid JSON for the expected shape
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
