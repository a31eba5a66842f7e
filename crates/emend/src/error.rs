/*
 * error.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! Error types for editing operations.

use emend_source_map::MergeError;
use thiserror::Error;

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, EditError>;

/// Errors that can occur during editing or map generation.
///
/// Failing operations leave the editor untouched: validation happens
/// before any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// An overwrite range with `start >= end`.
    #[error("invalid range: start {start} must be less than end {end}")]
    InvalidRange { start: usize, end: usize },

    /// The offset does not address an editable byte: past the end for
    /// insertions, or inside an already overwritten range for overwrites.
    #[error("offset {index} does not address an editable byte")]
    OffsetNotFound { index: usize },

    /// An overwrite range extending past the end of the original text.
    #[error("offset {index} is out of bounds for a source of {len} bytes")]
    OffsetOutOfBounds { index: usize, len: usize },

    /// `rollback` on a stack with only its base layer left.
    #[error("cannot roll back the base layer")]
    CannotRollbackBase,

    /// Map merging failed while composing stacked layers.
    #[error(transparent)]
    Merge(#[from] MergeError),
}
