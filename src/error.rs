// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failures at the crate's edges (JSON boundary, storage, config).
///
/// The calculation path itself is infallible.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown material id: {0}")]
    UnknownMaterial(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid brewing conditions: {0}")]
    InvalidConditions(String),
}

pub type Result<T> = std::result::Result<T, Error>;
