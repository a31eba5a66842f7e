/*
 * decoded.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! In-memory decoded source map and its VLQ serialization.

use crate::source_map::SourceMap;
use crate::types::MappingSegment;

/// A Source Map v3 in decoded form: one list of segments per generated
/// line.
///
/// Segment columns within a line are strictly increasing; generators
/// guarantee this and the merger preserves it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodedMap {
    /// Output file name, if known.
    pub file: Option<String>,
    /// Prefix prepended to the `sources` entries by consumers.
    pub source_root: Option<String>,
    /// Source file names. May contain a single empty string for an
    /// anonymous source.
    pub sources: Vec<String>,
    /// Embedded source texts, parallel to `sources`. `None` omits the
    /// field entirely from the serialized map.
    pub sources_content: Option<Vec<Option<String>>>,
    /// Interned identifier names referenced by segments.
    pub names: Vec<String>,
    /// Decoded segments, one `Vec` per generated line.
    pub mappings: Vec<Vec<MappingSegment>>,
}

impl DecodedMap {
    /// Serialize `mappings` to the Source Map v3 VLQ string.
    ///
    /// Lines are joined with `;`, segments within a line with `,`. The
    /// generated-column delta resets at the start of every line; source
    /// index, source line, source column, and name index deltas carry
    /// across lines.
    pub fn encode_mappings(&self) -> String {
        let mut out = String::new();
        let mut prev_source: i32 = 0;
        let mut prev_line: i32 = 0;
        let mut prev_column: i32 = 0;
        let mut prev_name: i32 = 0;

        for (line_idx, line) in self.mappings.iter().enumerate() {
            if line_idx > 0 {
                out.push(';');
            }
            let mut prev_generated: i32 = 0;
            for (seg_idx, segment) in line.iter().enumerate() {
                if seg_idx > 0 {
                    out.push(',');
                }
                let generated = segment.generated_column as i32;
                emend_vlq::encode_into(generated - prev_generated, &mut out);
                prev_generated = generated;

                if let Some(origin) = &segment.origin {
                    let source = origin.source_index as i32;
                    emend_vlq::encode_into(source - prev_source, &mut out);
                    prev_source = source;

                    let source_line = origin.source_line as i32;
                    emend_vlq::encode_into(source_line - prev_line, &mut out);
                    prev_line = source_line;

                    let source_column = origin.source_column as i32;
                    emend_vlq::encode_into(source_column - prev_column, &mut out);
                    prev_column = source_column;

                    if let Some(name_index) = origin.name_index {
                        let name = name_index as i32;
                        emend_vlq::encode_into(name - prev_name, &mut out);
                        prev_name = name;
                    }
                }
            }
        }

        out
    }

    /// Build the serializable wrapper object, encoding `mappings`.
    pub fn to_source_map(&self) -> SourceMap {
        SourceMap {
            version: 3,
            file: self.file.clone(),
            source_root: self.source_root.clone(),
            sources: self.sources.clone(),
            sources_content: self.sources_content.clone(),
            names: self.names.clone(),
            mappings: self.encode_mappings(),
        }
    }
}
