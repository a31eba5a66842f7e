/*
 * generate.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! Source map generation: walking the segment store into a decoded map.
//!
//! The walk tracks the generated line/column while emitting one mapping
//! per contiguous run: the first non-newline byte of each line run within
//! a segment's content. Edge buffers (`intro`/`outro`) and pure-insertion
//! segments advance the generated position without emitting mappings.
//! Replacement segments map every line of their content to the position
//! of `original_start` — the replacement occupies one original position.

use emend_source_map::{DecodedMap, LineIndex, MappingSegment, SourceMap};
use tracing::debug;

use crate::editor::Editor;
use crate::options::SourceMapOptions;

/// Accumulates decoded mapping lines while walking the output.
struct MappingsBuilder {
    lines: Vec<Vec<MappingSegment>>,
    current: Vec<MappingSegment>,
    generated_column: u32,
}

impl MappingsBuilder {
    fn new() -> Self {
        MappingsBuilder {
            lines: Vec::new(),
            current: Vec::new(),
            generated_column: 0,
        }
    }

    /// Close the current generated line.
    fn flush_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.generated_column = 0;
    }

    /// Emit a mapping at the current generated column.
    fn emit(&mut self, source_line: u32, source_column: u32) {
        self.current.push(MappingSegment::sourced(
            self.generated_column,
            0,
            source_line,
            source_column,
        ));
    }

    /// Advance past `text` without emitting mappings.
    fn advance_unmapped(&mut self, text: &str) {
        for byte in text.bytes() {
            if byte == b'\n' {
                self.flush_line();
            } else {
                self.generated_column += 1;
            }
        }
    }

    /// Finish the walk; the in-progress line always closes, so the
    /// decoded map has exactly one line per generated line.
    fn finish(mut self) -> Vec<Vec<MappingSegment>> {
        self.lines.push(self.current);
        self.lines
    }
}

impl Editor {
    /// Generate the decoded source map for the current output.
    pub fn generate_decoded(&self, options: &SourceMapOptions) -> DecodedMap {
        let index = LineIndex::new(self.source());
        let mut builder = MappingsBuilder::new();

        for segment in self.segment_list().segments() {
            builder.advance_unmapped(&segment.intro);

            let content = segment.content(self.source());
            if let Some(offset) = segment.source_offset {
                let (line, column) = index.line_col(offset);
                let mut source_line = line as u32;
                let mut source_column = column as u32;
                let mut first_in_line = true;
                for byte in content.bytes() {
                    if byte == b'\n' {
                        builder.flush_line();
                        first_in_line = true;
                        source_line += 1;
                        source_column = 0;
                    } else {
                        if first_in_line {
                            builder.emit(source_line, source_column);
                            first_in_line = false;
                        }
                        builder.generated_column += 1;
                        source_column += 1;
                    }
                }
            } else if segment.original_len() > 0 && !content.is_empty() {
                // Replacement: every line re-emits the position of the
                // overwritten range's start.
                let (line, column) = index.line_col(segment.original_start);
                let mut first_in_line = true;
                for byte in content.bytes() {
                    if byte == b'\n' {
                        builder.flush_line();
                        first_in_line = true;
                    } else {
                        if first_in_line {
                            builder.emit(line as u32, column as u32);
                            first_in_line = false;
                        }
                        builder.generated_column += 1;
                    }
                }
            } else {
                builder.advance_unmapped(content);
            }

            builder.advance_unmapped(&segment.outro);
        }

        let mappings = builder.finish();
        debug!(
            segments = self.segment_list().len(),
            lines = mappings.len(),
            "generated decoded source map"
        );

        DecodedMap {
            file: options.file.clone(),
            source_root: options.source_root.clone(),
            sources: vec![options.source.clone().unwrap_or_default()],
            sources_content: options
                .include_content
                .then(|| vec![Some(self.source().to_string())]),
            names: Vec::new(),
            mappings,
        }
    }

    /// Generate the serializable Source Map v3 object for the current
    /// output.
    pub fn generate_map(&self, options: &SourceMapOptions) -> SourceMap {
        self.generate_decoded(options).to_source_map()
    }
}
