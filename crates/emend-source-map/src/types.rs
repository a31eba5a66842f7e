/*
 * types.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! Decoded mapping segment types.

use serde::{Deserialize, Serialize};

/// One decoded segment of a generated line.
///
/// Serializes 1, 4 or 5 VLQ fields: a bare segment carries only the
/// generated column; a sourced segment adds the origin triple and an
/// optional name index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSegment {
    /// Zero-based column in the generated output line.
    pub generated_column: u32,
    /// Where this run came from, if anywhere.
    pub origin: Option<MappingOrigin>,
}

/// The source side of a mapping segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingOrigin {
    /// Index into the map's `sources` list.
    pub source_index: u32,
    /// Zero-based line in the source.
    pub source_line: u32,
    /// Zero-based column in the source.
    pub source_column: u32,
    /// Index into the map's `names` list, if the run carries a name.
    pub name_index: Option<u32>,
}

impl MappingSegment {
    /// A segment with no source side (1-field form).
    pub fn bare(generated_column: u32) -> Self {
        MappingSegment {
            generated_column,
            origin: None,
        }
    }

    /// A segment mapping back to a source position (4-field form).
    pub fn sourced(
        generated_column: u32,
        source_index: u32,
        source_line: u32,
        source_column: u32,
    ) -> Self {
        MappingSegment {
            generated_column,
            origin: Some(MappingOrigin {
                source_index,
                source_line,
                source_column,
                name_index: None,
            }),
        }
    }
}
