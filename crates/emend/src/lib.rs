/*
 * lib.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! # emend
//!
//! A non-destructive string editor with Source Map v3 generation.
//!
//! An [`Editor`] keeps its source text immutable and records edits —
//! insertions bound to the left or right edge of an original offset, and
//! range overwrites — against *original* byte offsets, no matter how much
//! the output has already grown or shrunk. The edited text materializes
//! through `Display`, and [`Editor::generate_map`] produces a Source Map
//! v3 from output positions back to the original.
//!
//! A [`StackedEditor`] adds committable editing layers: `commit` freezes
//! the current output and starts editing it as a fresh source, `rollback`
//! discards the newest layer, and map generation merges the layer maps so
//! the final map still points at the original source.
//!
//! ## Example
//!
//! ```rust
//! use emend::{Editor, SourceMapOptions};
//!
//! let mut editor = Editor::new("var x = 1");
//! editor.append_left(0, "// Comment\n").unwrap();
//! editor.overwrite(4, 5, "answer").unwrap();
//! editor.append_right(9, ";").unwrap();
//! assert_eq!(editor.to_string(), "// Comment\nvar answer = 1;");
//!
//! let map = editor.generate_map(&SourceMapOptions {
//!     source: Some("input.js".to_string()),
//!     ..SourceMapOptions::default()
//! });
//! assert_eq!(map.sources, vec!["input.js"]);
//! assert_eq!(map.mappings, ";AAAA,IAAI,MAAC");
//! ```

mod editor;
mod error;
mod generate;
mod options;
mod segment;
mod stack;

pub use editor::Editor;
pub use error::{EditError, Result};
pub use options::SourceMapOptions;
pub use stack::StackedEditor;

// Re-export the map types alongside the editor that produces them.
pub use emend_source_map::{
    merge, DecodedMap, LineIndex, MappingOrigin, MappingSegment, MergeError, SourceMap,
};
