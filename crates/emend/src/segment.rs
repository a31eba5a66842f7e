/*
 * segment.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! The segment store: an ordered list of segments covering the original
//! text plus insertions.
//!
//! Invariants maintained by the editing operations:
//!
//! - Coverage: the `[original_start, original_end)` intervals of all
//!   segments partition `[0, len(source))`; every original byte is
//!   accounted for by exactly one segment (source-backed or replacement).
//! - Monotonicity: segments are ordered by `original_start`, and adjacent
//!   coverage segments meet exactly (`end == next start`).
//! - Edge binding: `intro` binds to `original_start`, `outro` to
//!   `original_end`; splitting carries `intro` to the left child and
//!   `outro` to the right child.
//!
//! The only pure-insertion segment (empty original interval) is the head
//! anchor at `[0, 0)`, which collects content bound to the left edge of
//! offset 0.

/// One contiguous run of the eventual output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Segment {
    /// Start of the original byte range this segment accounts for.
    pub original_start: usize,
    /// End (exclusive) of the original byte range.
    pub original_end: usize,
    /// Present iff the segment's content is a live slice of the original
    /// text. Under the operations here it always equals `original_start`.
    pub source_offset: Option<usize>,
    /// Owned bytes for replacement/insertion segments; unused when
    /// source-backed.
    pub content: String,
    /// Bytes emitted before the content (left-edge insertions).
    pub intro: String,
    /// Bytes emitted after the content (right-edge insertions).
    pub outro: String,
}

impl Segment {
    /// A segment backed by `source[start..end]`.
    fn source_backed(start: usize, end: usize) -> Self {
        Segment {
            original_start: start,
            original_end: end,
            source_offset: Some(start),
            content: String::new(),
            intro: String::new(),
            outro: String::new(),
        }
    }

    /// A pure-insertion segment anchored at `at`.
    fn insertion(at: usize) -> Self {
        Segment {
            original_start: at,
            original_end: at,
            source_offset: None,
            content: String::new(),
            intro: String::new(),
            outro: String::new(),
        }
    }

    pub fn is_source_backed(&self) -> bool {
        self.source_offset.is_some()
    }

    /// Length of the original range this segment accounts for.
    pub fn original_len(&self) -> usize {
        self.original_end - self.original_start
    }

    /// The bytes this segment contributes to the output body.
    pub fn content<'a>(&'a self, source: &'a str) -> &'a str {
        match self.source_offset {
            Some(offset) => &source[offset..offset + self.original_len()],
            None => &self.content,
        }
    }

    /// Total bytes this segment emits: `intro ++ content ++ outro`.
    pub fn output_len(&self) -> usize {
        let content_len = match self.source_offset {
            Some(_) => self.original_len(),
            None => self.content.len(),
        };
        self.intro.len() + content_len + self.outro.len()
    }
}

/// Ordered segment list with the split/replace primitives used by the
/// editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SegmentList {
    segments: Vec<Segment>,
}

impl SegmentList {
    /// Seed coverage for a source of `source_len` bytes: one source-backed
    /// segment, or nothing for an empty source.
    pub fn new(source_len: usize) -> Self {
        let segments = if source_len == 0 {
            Vec::new()
        } else {
            vec![Segment::source_backed(0, source_len)]
        };
        SegmentList { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn get(&self, index: usize) -> &Segment {
        &self.segments[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut Segment {
        &mut self.segments[index]
    }

    /// Index of the unique segment whose original range contains `p`.
    ///
    /// Binary search on `original_start`; the only segment with an empty
    /// range is the head anchor, which always precedes the coverage
    /// segment sharing its start, so stepping back once suffices.
    pub fn find_by_original(&self, p: usize) -> Option<usize> {
        let upper = self
            .segments
            .partition_point(|segment| segment.original_start <= p);
        let index = upper.checked_sub(1)?;
        let segment = &self.segments[index];
        (segment.original_start <= p && p < segment.original_end).then_some(index)
    }

    /// Index of the unique source-backed segment whose backing slice
    /// contains `p`, or `None` if that byte has been overwritten.
    ///
    /// Source-backed segments keep `source_offset == original_start`, so
    /// this is the original-range lookup restricted to source-backed
    /// segments.
    pub fn find_by_source(&self, p: usize) -> Option<usize> {
        let index = self.find_by_original(p)?;
        self.segments[index].is_source_backed().then_some(index)
    }

    /// Split segment `i` at `rel` bytes into its content.
    ///
    /// Only valid on a source-backed segment with `0 < rel < len`. The
    /// left child keeps `intro`, the right child takes `outro`.
    pub fn split(&mut self, i: usize, rel: usize) {
        let segment = &mut self.segments[i];
        debug_assert!(segment.is_source_backed());
        debug_assert!(rel > 0 && rel < segment.original_len());

        let mid = segment.original_start + rel;
        let right = Segment {
            original_start: mid,
            original_end: segment.original_end,
            source_offset: segment.source_offset.map(|offset| offset + rel),
            content: String::new(),
            intro: String::new(),
            outro: std::mem::take(&mut segment.outro),
        };
        segment.original_end = mid;
        self.segments.insert(i + 1, right);
    }

    /// Replace segments `a..=b` with a single replacement segment spanning
    /// their combined original range, carrying the saved edge buffers.
    pub fn replace_range(
        &mut self,
        a: usize,
        b: usize,
        content: String,
        intro: String,
        outro: String,
    ) {
        let replacement = Segment {
            original_start: self.segments[a].original_start,
            original_end: self.segments[b].original_end,
            source_offset: None,
            content,
            intro,
            outro,
        };
        self.segments.splice(a..=b, std::iter::once(replacement));
    }

    /// Index of the head anchor, creating it on demand.
    pub fn head_anchor(&mut self) -> usize {
        let has_anchor = self
            .segments
            .first()
            .is_some_and(|first| !first.is_source_backed() && first.original_len() == 0);
        if !has_anchor {
            self.segments.insert(0, Segment::insertion(0));
        }
        0
    }
}
