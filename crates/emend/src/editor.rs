/*
 * editor.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! The non-destructive string editor.
//!
//! An [`Editor`] owns an immutable original text and records edits as
//! mutations of a segment list, so every edit stays addressable by
//! *original* byte offsets no matter how much has already been inserted
//! or overwritten. `to_string()` materializes the output;
//! [`generate_map`](Editor::generate_map) materializes a Source Map v3
//! back to the original.
//!
//! Insertions bind to one of the two edge buffers that meet at an
//! original offset: content bound to the *left* of the offset always
//! precedes content bound to its *right*, regardless of call order. The
//! `append_*` operations accumulate in call order within their buffer;
//! the `prepend_*` operations stack newest-on-the-outside.

use std::fmt;

use crate::error::{EditError, Result};
use crate::segment::SegmentList;

/// Which side of the original offset an insertion binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Where the insertion lands within its edge buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Append,
    Prepend,
}

/// A non-destructive editor over an immutable source text.
#[derive(Debug, Clone)]
pub struct Editor {
    source: String,
    segments: SegmentList,
    /// Cumulative output length before each segment; rebuilt lazily,
    /// invalidated by every mutation.
    offsets: Option<Vec<usize>>,
}

impl Editor {
    /// Create an editor over `source`.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let segments = SegmentList::new(source.len());
        Editor {
            source,
            segments,
            offsets: None,
        }
    }

    /// The original text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Length of the original text in bytes.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Whether the original text is empty.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Whether any edit has been applied.
    pub fn has_changed(&self) -> bool {
        match self.segments.segments() {
            [] => false,
            [only] => {
                !(only.is_source_backed()
                    && only.original_start == 0
                    && only.original_end == self.source.len()
                    && only.intro.is_empty()
                    && only.outro.is_empty())
            }
            _ => true,
        }
    }

    /// Insert `content` bound to the left edge of original offset
    /// `index`, after any content previously bound there.
    pub fn append_left(&mut self, index: usize, content: &str) -> Result<()> {
        self.insert_at(index, content, Side::Left, Placement::Append)
    }

    /// Insert `content` bound to the left edge of original offset
    /// `index`, before any content previously bound there.
    pub fn prepend_left(&mut self, index: usize, content: &str) -> Result<()> {
        self.insert_at(index, content, Side::Left, Placement::Prepend)
    }

    /// Insert `content` bound to the right edge of original offset
    /// `index`, after any content previously bound there.
    pub fn append_right(&mut self, index: usize, content: &str) -> Result<()> {
        self.insert_at(index, content, Side::Right, Placement::Append)
    }

    /// Insert `content` bound to the right edge of original offset
    /// `index`, before any content previously bound there.
    pub fn prepend_right(&mut self, index: usize, content: &str) -> Result<()> {
        self.insert_at(index, content, Side::Right, Placement::Prepend)
    }

    fn insert_at(
        &mut self,
        index: usize,
        content: &str,
        side: Side,
        placement: Placement,
    ) -> Result<()> {
        if content.is_empty() {
            return Ok(());
        }
        if index > self.source.len() {
            return Err(EditError::OffsetNotFound { index });
        }

        let buffer = self.edge_buffer(index, side)?;
        match placement {
            Placement::Append => buffer.push_str(content),
            Placement::Prepend => buffer.insert_str(0, content),
        }
        self.offsets = None;
        Ok(())
    }

    /// Resolve the edge buffer that content bound to `side` of `index`
    /// lands in, splitting a source-backed segment when `index` falls
    /// strictly inside one.
    fn edge_buffer(&mut self, index: usize, side: Side) -> Result<&mut String> {
        // At (or past) the end of the source, both sides share the last
        // segment's outro; an empty source has only the head anchor.
        if index == self.source.len() {
            let last = if self.segments.is_empty() {
                self.segments.head_anchor()
            } else {
                self.segments.len() - 1
            };
            return Ok(&mut self.segments.get_mut(last).outro);
        }

        // Prefer the source lookup; edges of overwritten ranges resolve
        // through the original-range fallback.
        let i = match self.segments.find_by_source(index) {
            Some(i) => i,
            None => self
                .segments
                .find_by_original(index)
                .ok_or(EditError::OffsetNotFound { index })?,
        };
        let rel = index - self.segments.get(i).original_start;

        let buffer = match side {
            Side::Left => {
                if rel == 0 {
                    if i > 0 {
                        &mut self.segments.get_mut(i - 1).outro
                    } else {
                        let anchor = self.segments.head_anchor();
                        &mut self.segments.get_mut(anchor).outro
                    }
                } else if self.segments.get(i).is_source_backed() {
                    self.segments.split(i, rel);
                    &mut self.segments.get_mut(i).outro
                } else {
                    // Strictly inside a replacement: route to its leading
                    // edge.
                    &mut self.segments.get_mut(i).intro
                }
            }
            Side::Right => {
                if rel == 0 {
                    &mut self.segments.get_mut(i).intro
                } else if self.segments.get(i).is_source_backed() {
                    self.segments.split(i, rel);
                    &mut self.segments.get_mut(i + 1).intro
                } else {
                    // Strictly inside a replacement: route to its trailing
                    // edge.
                    &mut self.segments.get_mut(i).outro
                }
            }
        };
        Ok(buffer)
    }

    /// Replace the original bytes `[start, end)` with `content`.
    ///
    /// Both endpoints must still lie in source-backed segments; ranges
    /// that were already overwritten fail with
    /// [`EditError::OffsetNotFound`]. Validation happens before any
    /// mutation, so a failing overwrite leaves the editor untouched.
    pub fn overwrite(&mut self, start: usize, end: usize, content: &str) -> Result<()> {
        if start >= end {
            return Err(EditError::InvalidRange { start, end });
        }
        if end > self.source.len() {
            return Err(EditError::OffsetOutOfBounds {
                index: end,
                len: self.source.len(),
            });
        }
        let start_index = self
            .segments
            .find_by_source(start)
            .ok_or(EditError::OffsetNotFound { index: start })?;
        self.segments
            .find_by_source(end - 1)
            .ok_or(EditError::OffsetNotFound { index: end - 1 })?;

        let seg_start = self.segments.get(start_index).original_start;
        if start > seg_start {
            self.segments.split(start_index, start - seg_start);
        }
        let end_index = self
            .segments
            .find_by_source(end - 1)
            .ok_or(EditError::OffsetNotFound { index: end - 1 })?;
        let (seg_start, seg_end) = {
            let segment = self.segments.get(end_index);
            (segment.original_start, segment.original_end)
        };
        if end < seg_end {
            self.segments.split(end_index, end - seg_start);
        }

        // The covered subrange is now segment-aligned; its outer edge
        // buffers bind to unchanged positions and must survive.
        let a = self
            .segments
            .find_by_original(start)
            .ok_or(EditError::OffsetNotFound { index: start })?;
        let b = self
            .segments
            .find_by_original(end - 1)
            .ok_or(EditError::OffsetNotFound { index: end - 1 })?;
        let saved_intro = std::mem::take(&mut self.segments.get_mut(a).intro);
        let saved_outro = std::mem::take(&mut self.segments.get_mut(b).outro);
        self.segments
            .replace_range(a, b, content.to_string(), saved_intro, saved_outro);
        self.offsets = None;
        Ok(())
    }

    /// Delete the original bytes `[start, end)`.
    ///
    /// Equivalent to overwriting the range with nothing; the emptied
    /// range stays addressable at its edges.
    pub fn remove(&mut self, start: usize, end: usize) -> Result<()> {
        self.overwrite(start, end, "")
    }

    /// Cumulative output length before each segment.
    ///
    /// Rebuilt on first read after a mutation.
    pub fn output_offsets(&mut self) -> &[usize] {
        if self.offsets.is_none() {
            let mut total = 0usize;
            let offsets = self
                .segments
                .segments()
                .iter()
                .map(|segment| {
                    let before = total;
                    total += segment.output_len();
                    before
                })
                .collect();
            self.offsets = Some(offsets);
        }
        self.offsets.as_deref().unwrap_or_default()
    }

    /// Total length of the output in bytes, from the offset cache.
    pub fn output_len(&mut self) -> usize {
        let last_len = self
            .segments
            .segments()
            .last()
            .map_or(0, |segment| segment.output_len());
        match self.output_offsets().last() {
            Some(&before) => before + last_len,
            None => 0,
        }
    }

    pub(crate) fn segment_list(&self) -> &SegmentList {
        &self.segments
    }
}

impl fmt::Display for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.segments.segments() {
            f.write_str(&segment.intro)?;
            f.write_str(segment.content(&self.source))?;
            f.write_str(&segment.outro)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_editor_reproduces_the_source() {
        let editor = Editor::new("var x = 1");
        assert_eq!(editor.to_string(), "var x = 1");
        assert!(!editor.has_changed());
    }

    #[test]
    fn simple_overwrite() {
        let mut editor = Editor::new("var x = 1");
        editor.overwrite(4, 5, "answer").unwrap();
        assert_eq!(editor.to_string(), "var answer = 1");
        assert!(editor.has_changed());
    }

    #[test]
    fn append_left_accumulates_in_call_order() {
        let mut editor = Editor::new("world");
        editor.append_left(0, "Hello ").unwrap();
        editor.append_left(0, ">>> ").unwrap();
        assert_eq!(editor.to_string(), "Hello >>> world");
    }

    #[test]
    fn append_right_accumulates_in_call_order() {
        let mut editor = Editor::new("Hello");
        editor.append_right(5, " world").unwrap();
        editor.append_right(5, " <<<").unwrap();
        assert_eq!(editor.to_string(), "Hello world <<<");
    }

    #[test]
    fn prepends_stack_newest_on_the_outside() {
        let mut editor = Editor::new("x");
        editor.prepend_left(0, "A").unwrap();
        editor.prepend_left(0, "B").unwrap();
        assert_eq!(editor.to_string(), "BAx");

        let mut editor = Editor::new("x");
        editor.append_right(1, "A").unwrap();
        editor.prepend_right(1, "B").unwrap();
        assert_eq!(editor.to_string(), "xBA");
    }

    #[test]
    fn left_bound_content_precedes_right_bound_content() {
        let mut editor = Editor::new("world");
        editor.append_right(0, "R").unwrap();
        editor.append_left(0, "L").unwrap();
        assert_eq!(editor.to_string(), "LRworld");
    }

    #[test]
    fn mid_segment_insertions_split_the_segment() {
        let mut editor = Editor::new("helloworld");
        editor.append_left(5, "-").unwrap();
        assert_eq!(editor.to_string(), "hello-world");

        let mut editor = Editor::new("helloworld");
        editor.append_right(5, "-").unwrap();
        assert_eq!(editor.to_string(), "hello-world");
    }

    #[test]
    fn insertions_at_the_same_split_point_keep_their_sides() {
        let mut editor = Editor::new("helloworld");
        editor.append_right(5, "R").unwrap();
        editor.append_left(5, "L").unwrap();
        assert_eq!(editor.to_string(), "helloLRworld");
    }

    #[test]
    fn empty_content_is_a_no_op() {
        let mut editor = Editor::new("abc");
        editor.append_left(1, "").unwrap();
        editor.append_right(1, "").unwrap();
        assert!(!editor.has_changed());
        assert_eq!(editor.to_string(), "abc");
    }

    #[test]
    fn insertions_past_the_end_are_rejected() {
        let mut editor = Editor::new("abc");
        assert_eq!(
            editor.append_left(4, "x"),
            Err(EditError::OffsetNotFound { index: 4 })
        );
        assert_eq!(
            editor.append_right(4, "x"),
            Err(EditError::OffsetNotFound { index: 4 })
        );
        assert_eq!(editor.to_string(), "abc");
    }

    #[test]
    fn insertions_at_the_end_share_the_last_outro() {
        let mut editor = Editor::new("abc");
        editor.append_left(3, "1").unwrap();
        editor.append_right(3, "2").unwrap();
        assert_eq!(editor.to_string(), "abc12");
    }

    #[test]
    fn edits_on_an_empty_source() {
        let mut editor = Editor::new("");
        editor.append_left(0, "a").unwrap();
        editor.append_right(0, "b").unwrap();
        assert_eq!(editor.to_string(), "ab");
        assert_eq!(
            editor.append_left(1, "x"),
            Err(EditError::OffsetNotFound { index: 1 })
        );
    }

    #[test]
    fn overwrite_then_edit_at_boundaries() {
        let mut editor = Editor::new("abc");
        editor.overwrite(1, 2, "XXX").unwrap();
        editor.append_left(1, ">>>").unwrap();
        assert_eq!(editor.to_string(), "a>>>XXXc");

        let mut editor = Editor::new("abc");
        editor.overwrite(1, 2, "XXX").unwrap();
        editor.append_right(1, "<<<").unwrap();
        assert_eq!(editor.to_string(), "a<<<XXXc");
    }

    #[test]
    fn overwrite_preserves_outer_edge_buffers() {
        let mut editor = Editor::new("abcdef");
        editor.append_right(1, "R").unwrap();
        editor.append_left(5, "L").unwrap();
        editor.overwrite(1, 5, "-").unwrap();
        // R binds to the right edge of offset 1, L to the left edge of
        // offset 5; both edges survive the overwrite.
        assert_eq!(editor.to_string(), "aR-Lf");
    }

    #[test]
    fn overwrite_drops_interior_insertions() {
        let mut editor = Editor::new("abcdef");
        editor.append_left(3, "gone").unwrap();
        editor.overwrite(1, 5, "-").unwrap();
        assert_eq!(editor.to_string(), "a-f");
    }

    #[test]
    fn mid_replacement_insertions_route_to_the_nearest_edge() {
        let mut editor = Editor::new("abcde");
        editor.overwrite(1, 4, "XYZ").unwrap();
        editor.append_left(2, "L").unwrap();
        editor.append_right(2, "R").unwrap();
        assert_eq!(editor.to_string(), "aLXYZRe");
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        let mut editor = Editor::new("abc");
        assert_eq!(
            editor.overwrite(2, 2, "x"),
            Err(EditError::InvalidRange { start: 2, end: 2 })
        );
        assert_eq!(
            editor.overwrite(2, 1, "x"),
            Err(EditError::InvalidRange { start: 2, end: 1 })
        );
        assert_eq!(
            editor.overwrite(1, 9, "x"),
            Err(EditError::OffsetOutOfBounds { index: 9, len: 3 })
        );
        assert_eq!(editor.to_string(), "abc");
    }

    #[test]
    fn double_overwrite_is_rejected_and_leaves_state_untouched() {
        let mut editor = Editor::new("abcdef");
        editor.overwrite(1, 3, "X").unwrap();
        let before = editor.to_string();
        assert_eq!(
            editor.overwrite(1, 3, "Y"),
            Err(EditError::OffsetNotFound { index: 1 })
        );
        assert_eq!(
            editor.overwrite(2, 5, "Y"),
            Err(EditError::OffsetNotFound { index: 2 })
        );
        assert_eq!(editor.to_string(), before);
    }

    #[test]
    fn remove_deletes_a_range() {
        let mut editor = Editor::new("abcdef");
        editor.remove(1, 4).unwrap();
        assert_eq!(editor.to_string(), "aef");
        // The emptied range is still addressable at its edges.
        editor.append_right(1, "-").unwrap();
        assert_eq!(editor.to_string(), "a-ef");
    }

    #[test]
    fn output_len_tracks_mutations() {
        let mut editor = Editor::new("abc");
        assert_eq!(editor.output_len(), 3);
        editor.append_left(1, "xx").unwrap();
        assert_eq!(editor.output_len(), 5);
        editor.overwrite(1, 2, "yyy").unwrap();
        assert_eq!(editor.output_len(), editor.to_string().len());
    }

    #[test]
    fn output_offsets_are_cumulative() {
        let mut editor = Editor::new("abcdef");
        editor.append_left(3, "--").unwrap();
        // Split into [0,3) carrying "--" in its outro, then [3,6).
        assert_eq!(editor.output_offsets(), &[0, 5]);
        assert_eq!(editor.output_len(), 8);
    }

    #[test]
    fn coverage_and_concatenation_invariants_hold() {
        let mut editor = Editor::new("The quick brown fox");
        editor.append_left(0, "<<").unwrap();
        editor.overwrite(4, 9, "slow").unwrap();
        editor.append_right(9, "!").unwrap();
        editor.prepend_left(16, "~").unwrap();
        editor.append_right(19, ">>").unwrap();

        let coverage: usize = editor
            .segments
            .segments()
            .iter()
            .map(|segment| segment.original_len())
            .sum();
        assert_eq!(coverage, editor.source().len());

        let concatenated: String = editor
            .segments
            .segments()
            .iter()
            .map(|segment| {
                format!(
                    "{}{}{}",
                    segment.intro,
                    segment.content(editor.source()),
                    segment.outro
                )
            })
            .collect();
        assert_eq!(concatenated, editor.to_string());
        assert_eq!(editor.to_string(), "<<The slow! brown ~fox>>");
    }
}
