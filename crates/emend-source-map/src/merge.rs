/*
 * merge.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! Trace-through-chain merging of decoded maps.
//!
//! Given maps `[M0, M1, .., Mk]` where `M0` maps the outermost output back
//! to its immediate input and each `Mj` maps layer `j`'s output back to
//! layer `j-1`'s, [`merge`] produces a single decoded map whose generated
//! side is `M0`'s and whose sources are the leaf sources of `Mk`.
//!
//! Every map except the leaf must be a transform map over exactly one
//! input. Tracing is per segment: the segment's source position is looked
//! up in the next map's mappings by exact generated-column match; a miss
//! abandons that segment.

use hashlink::LinkedHashMap;

use crate::decoded::DecodedMap;
use crate::error::MergeError;
use crate::types::{MappingOrigin, MappingSegment};

/// Assigns `sources` indices to `(name, content)` pairs in first-use
/// order. Keyed by name; the first content seen for a name wins.
struct SourceAccumulator {
    entries: LinkedHashMap<String, (u32, Option<String>)>,
}

impl SourceAccumulator {
    fn new() -> Self {
        SourceAccumulator {
            entries: LinkedHashMap::new(),
        }
    }

    fn intern(&mut self, name: &str, content: Option<String>) -> u32 {
        if let Some(&(index, _)) = self.entries.get(name) {
            return index;
        }
        let index = self.entries.len() as u32;
        self.entries.insert(name.to_string(), (index, content));
        index
    }

    fn into_parts(self) -> (Vec<String>, Option<Vec<Option<String>>>) {
        let mut sources = Vec::with_capacity(self.entries.len());
        let mut contents = Vec::with_capacity(self.entries.len());
        let mut any_content = false;
        for (name, (_, content)) in self.entries {
            any_content |= content.is_some();
            sources.push(name);
            contents.push(content);
        }
        (sources, any_content.then_some(contents))
    }
}

/// Assigns `names` indices to strings in first-use order.
struct StringInterner {
    entries: LinkedHashMap<String, u32>,
}

impl StringInterner {
    fn new() -> Self {
        StringInterner {
            entries: LinkedHashMap::new(),
        }
    }

    fn intern(&mut self, name: String) -> u32 {
        if let Some(&index) = self.entries.get(&name) {
            return index;
        }
        let index = self.entries.len() as u32;
        self.entries.insert(name, index);
        index
    }

    fn into_names(self) -> Vec<String> {
        self.entries.into_iter().map(|(name, _)| name).collect()
    }
}

/// Find the segment of `map` at exactly (`line`, `column`) of its
/// generated side.
fn lookup(map: &DecodedMap, line: u32, column: u32) -> Option<&MappingSegment> {
    let segments = map.mappings.get(line as usize)?;
    let index = segments
        .binary_search_by_key(&column, |segment| segment.generated_column)
        .ok()?;
    Some(&segments[index])
}

/// Merge a chain of decoded maps into one.
///
/// A single-map chain is cloned structurally. Fails with
/// [`MergeError::NoSourceMaps`] on empty input and
/// [`MergeError::InvalidTransformMap`] when a non-leaf map does not have
/// exactly one source.
pub fn merge(maps: &[DecodedMap]) -> Result<DecodedMap, MergeError> {
    let (outer, inner) = match maps {
        [] => return Err(MergeError::NoSourceMaps),
        [single] => return Ok(single.clone()),
        [outer, inner @ ..] => (outer, inner),
    };

    for map in &maps[..maps.len() - 1] {
        if map.sources.len() != 1 {
            return Err(MergeError::InvalidTransformMap {
                sources: map.sources.len(),
            });
        }
    }

    let mut sources = SourceAccumulator::new();
    let mut names = StringInterner::new();
    let mut lines = Vec::with_capacity(outer.mappings.len());

    for line in &outer.mappings {
        let mut merged_line = Vec::new();
        for segment in line {
            let Some(origin) = segment.origin else {
                continue;
            };
            let mut name = origin
                .name_index
                .and_then(|i| outer.names.get(i as usize).cloned());
            let mut query_line = origin.source_line;
            let mut query_column = origin.source_column;
            let mut leaf: Option<(&DecodedMap, MappingOrigin)> = None;

            for (depth, map) in inner.iter().enumerate() {
                let Some(found) = lookup(map, query_line, query_column) else {
                    break;
                };
                let Some(found_origin) = found.origin else {
                    break;
                };
                if let Some(name_index) = found_origin.name_index {
                    if let Some(found_name) = map.names.get(name_index as usize) {
                        name = Some(found_name.clone());
                    }
                }
                if depth == inner.len() - 1 {
                    leaf = Some((map, found_origin));
                } else {
                    if found_origin.source_index != 0 {
                        break;
                    }
                    query_line = found_origin.source_line;
                    query_column = found_origin.source_column;
                }
            }

            let Some((leaf_map, leaf_origin)) = leaf else {
                continue;
            };
            let Some(source_name) = leaf_map.sources.get(leaf_origin.source_index as usize)
            else {
                continue;
            };
            let content = leaf_map
                .sources_content
                .as_ref()
                .and_then(|contents| contents.get(leaf_origin.source_index as usize))
                .cloned()
                .flatten();

            merged_line.push(MappingSegment {
                generated_column: segment.generated_column,
                origin: Some(MappingOrigin {
                    source_index: sources.intern(source_name, content),
                    source_line: leaf_origin.source_line,
                    source_column: leaf_origin.source_column,
                    name_index: name.map(|n| names.intern(n)),
                }),
            });
        }
        lines.push(merged_line);
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let (sources, sources_content) = sources.into_parts();
    Ok(DecodedMap {
        file: outer.file.clone(),
        source_root: outer.source_root.clone(),
        sources,
        sources_content,
        names: names.into_names(),
        mappings: lines,
    })
}
