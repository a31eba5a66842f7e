/*
 * options.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! Source map generation options.

/// Options for [`Editor::generate_map`](crate::Editor::generate_map) and
/// friends. Every field is optional; `..Default::default()` fills the
/// rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMapOptions {
    /// Stored as `file` in the output map.
    pub file: Option<String>,
    /// Stored as `sourceRoot`.
    pub source_root: Option<String>,
    /// Name of the single `sources` entry; an empty string when omitted.
    pub source: Option<String>,
    /// Populate `sourcesContent` with the original text.
    pub include_content: bool,
    /// Reserved for finer-grained mappings; unused by the generator.
    pub hires: bool,
}
