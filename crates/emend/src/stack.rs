/*
 * stack.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! Layered editing with committable snapshots.
//!
//! A [`StackedEditor`] holds a stack of editors; each `commit` freezes the
//! current layer and opens a fresh editor over its output, so
//! `layers[k].source() == layers[k-1].to_string()`. Map generation walks
//! the whole chain: each layer's decoded map is produced against its own
//! input, then the chain is merged so the final map points back at the
//! original source.

use std::fmt;

use emend_source_map::{merge, DecodedMap, SourceMap};
use tracing::debug;

use crate::editor::Editor;
use crate::error::{EditError, Result};
use crate::options::SourceMapOptions;

/// A stack of editing layers; all edits apply to the newest layer.
#[derive(Debug, Clone)]
pub struct StackedEditor {
    layers: Vec<Editor>,
}

impl StackedEditor {
    /// Create a stack with a single base layer over `source`.
    pub fn new(source: impl Into<String>) -> Self {
        StackedEditor {
            layers: vec![Editor::new(source)],
        }
    }

    /// The active layer.
    pub fn current(&self) -> &Editor {
        // new() seeds the base layer and rollback() refuses to pop it.
        self.layers.last().expect("stack always has a base layer")
    }

    fn current_mut(&mut self) -> &mut Editor {
        self.layers.last_mut().expect("stack always has a base layer")
    }

    /// Number of layers, including the base.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Freeze the current layer and open a fresh one over its output.
    pub fn commit(&mut self) {
        let next = Editor::new(self.current().to_string());
        self.layers.push(next);
        debug!(depth = self.layers.len(), "committed editing layer");
    }

    /// Discard the newest layer. The base layer cannot be rolled back.
    pub fn rollback(&mut self) -> Result<()> {
        if self.layers.len() == 1 {
            return Err(EditError::CannotRollbackBase);
        }
        self.layers.pop();
        debug!(depth = self.layers.len(), "rolled back editing layer");
        Ok(())
    }

    /// See [`Editor::append_left`].
    pub fn append_left(&mut self, index: usize, content: &str) -> Result<()> {
        self.current_mut().append_left(index, content)
    }

    /// See [`Editor::prepend_left`].
    pub fn prepend_left(&mut self, index: usize, content: &str) -> Result<()> {
        self.current_mut().prepend_left(index, content)
    }

    /// See [`Editor::append_right`].
    pub fn append_right(&mut self, index: usize, content: &str) -> Result<()> {
        self.current_mut().append_right(index, content)
    }

    /// See [`Editor::prepend_right`].
    pub fn prepend_right(&mut self, index: usize, content: &str) -> Result<()> {
        self.current_mut().prepend_right(index, content)
    }

    /// See [`Editor::overwrite`].
    pub fn overwrite(&mut self, start: usize, end: usize, content: &str) -> Result<()> {
        self.current_mut().overwrite(start, end, content)
    }

    /// See [`Editor::remove`].
    pub fn remove(&mut self, start: usize, end: usize) -> Result<()> {
        self.current_mut().remove(start, end)
    }

    /// Generate the decoded map for the stacked output.
    ///
    /// A single layer delegates to the editor. Multiple layers produce
    /// one decoded map per layer and merge them outermost-first, so the
    /// result maps the final output back to the base layer's source.
    pub fn generate_decoded(&self, options: &SourceMapOptions) -> Result<DecodedMap> {
        if self.layers.len() == 1 {
            return Ok(self.current().generate_decoded(options));
        }
        let mut decoded: Vec<DecodedMap> = self
            .layers
            .iter()
            .map(|layer| layer.generate_decoded(options))
            .collect();
        decoded.reverse();
        debug!(layers = decoded.len(), "merging stacked source maps");
        Ok(merge(&decoded)?)
    }

    /// Generate the serializable Source Map v3 object for the stacked
    /// output.
    pub fn generate_map(&self, options: &SourceMapOptions) -> Result<SourceMap> {
        if self.layers.len() == 1 {
            return Ok(self.current().generate_map(options));
        }
        Ok(self.generate_decoded(options)?.to_source_map())
    }
}

impl fmt::Display for StackedEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.current(), f)
    }
}
