/*
 * error.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! Error types for map merging.

use thiserror::Error;

/// Errors that can occur while merging a chain of decoded maps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// The merge input was empty.
    #[error("no source maps to merge")]
    NoSourceMaps,

    /// A non-leaf map in the chain is not a transform map over a single
    /// input (it must have exactly one source).
    #[error("invalid transform map: expected exactly one source, found {sources}")]
    InvalidTransformMap { sources: usize },
}
