/*
 * source_map.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! The serializable Source Map v3 wrapper object.

use serde::{Deserialize, Serialize};

/// A Source Map v3 object ready for JSON serialization.
///
/// Field names and optionality follow the Source Map v3 wire format:
/// `file`, `sourceRoot` and `sourcesContent` are omitted entirely when
/// absent; `sourcesContent` entries may be `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMap {
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(rename = "sourceRoot", skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    pub sources: Vec<String>,
    #[serde(rename = "sourcesContent", skip_serializing_if = "Option::is_none")]
    pub sources_content: Option<Vec<Option<String>>>,
    pub names: Vec<String>,
    pub mappings: String,
}

impl SourceMap {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
