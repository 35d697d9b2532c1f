//! Typed document model
//!
//! This module defines the blocks a converted rich-text payload is made of.
//! The model is the common intermediate format between the converters and
//! the renderer: an ordered sequence of paragraphs, list items and tables.

/// Text of the sentinel paragraph emitted when the editor produced no content.
///
/// Distinct from a genuinely empty paragraph: the renderer styles this run
/// with the muted placeholder color.
pub const EMPTY_CONTENT_PLACEHOLDER: &str = "[Conteúdo não gerado]";

/// One table cell: an ordered sequence of runs
pub type TableCell = Vec<InlineRun>;

/// One table row: an ordered sequence of cells
pub type TableRow = Vec<TableCell>;

/// A contiguous span of text sharing the same bold/italic styling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl InlineRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: false,
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: true,
        }
    }

    pub fn bold_italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: true,
        }
    }

    /// Placeholder run for an element with no content.
    ///
    /// Empty cells carry exactly one of these instead of zero runs, so
    /// column counts stay stable through rendering.
    pub fn empty() -> Self {
        Self::plain("")
    }

    /// Check if this run is empty/blank
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A top-level structural unit of the document
///
/// Lists are flattened: a source `<ul>`/`<ol>` becomes one block per item,
/// and adjacency of same-variant blocks means "same list" to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Paragraph containing styled runs
    Paragraph { runs: Vec<InlineRun> },

    /// One bullet list item
    BulletListItem { runs: Vec<InlineRun> },

    /// One ordered list item with its 1-based position in the source list
    OrderedListItem { runs: Vec<InlineRun>, index: usize },

    /// Table rows of cells of runs; rows with index below
    /// `header_row_count` render as header rows
    Table {
        rows: Vec<TableRow>,
        header_row_count: usize,
    },
}

impl Block {
    /// Check if this block is empty/blank
    pub fn is_blank(&self) -> bool {
        match self {
            Block::Paragraph { runs }
            | Block::BulletListItem { runs }
            | Block::OrderedListItem { runs, .. } => runs.iter().all(|r| r.is_blank()),
            Block::Table { rows, .. } => rows
                .iter()
                .all(|row| row.iter().all(|cell| cell.iter().all(|r| r.is_blank()))),
        }
    }
}

/// An ordered sequence of blocks, in source order
///
/// Built fresh for every export request, consumed exactly once by the
/// renderer, never cached or shared between requests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// The sentinel document emitted for input with no usable content
    pub fn placeholder() -> Self {
        Self {
            blocks: vec![Block::Paragraph {
                runs: vec![InlineRun::italic(EMPTY_CONTENT_PLACEHOLDER)],
            }],
        }
    }

    /// Check whether this document is exactly the "no content" sentinel
    pub fn is_placeholder(&self) -> bool {
        match self.blocks.as_slice() {
            [Block::Paragraph { runs }] => matches!(
                runs.as_slice(),
                [InlineRun { text, bold: false, italic: true }] if text == EMPTY_CONTENT_PLACEHOLDER
            ),
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
