/*
 * lib.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! # emend-source-map
//!
//! In-memory Source Map v3 model with VLQ serialization and map merging.
//!
//! The core types are:
//! - [`DecodedMap`]: a source map as lines of decoded segments
//! - [`SourceMap`]: the serializable `{version: 3, ...}` wrapper object
//! - [`LineIndex`]: byte offset to (line, column) lookups over a text
//! - [`merge`]: trace-through-chain composition of a stack of decoded maps
//!
//! A generator builds a [`DecodedMap`] against its own input text; when that
//! input was itself produced by an earlier transformation, [`merge`] walks
//! the chain of maps so the final map points at the outermost original
//! source.

pub mod decoded;
pub mod error;
pub mod line_index;
pub mod merge;
pub mod source_map;
pub mod types;

pub use decoded::DecodedMap;
pub use error::MergeError;
pub use line_index::LineIndex;
pub use merge::merge;
pub use source_map::SourceMap;
pub use types::{MappingOrigin, MappingSegment};
