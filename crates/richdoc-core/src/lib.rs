//! richdoc-core - document model, styles and rendering
//!
//! This crate provides the typed document model shared by the richdoc
//! converters, the immutable style configuration, and the renderer that
//! maps a document to the primitives the packaging backend consumes.
//!
//! # Architecture
//!
//! ```text
//! Rich-text HTML ──converter──▶ ┌──────────┐
//!                               │          │
//!                               │ Document │ ──render──▶ RenderBlocks
//! Plain text ────converter────▶ │          │
//!                               └──────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use richdoc_core::{render, Block, Document, InlineRun, StyleConfig};
//!
//! let doc = Document::new(vec![
//!     Block::Paragraph {
//!         runs: vec![
//!             InlineRun::plain("This is "),
//!             InlineRun::bold("bold"),
//!             InlineRun::plain(" text."),
//!         ],
//!     },
//! ]);
//!
//! let styles = StyleConfig::default();
//! let blocks = render(&doc, &styles);
//! assert_eq!(blocks.len(), 1);
//! ```

mod model;
mod render;
mod style;

pub use model::{Block, Document, InlineRun, TableCell, TableRow, EMPTY_CONTENT_PLACEHOLDER};
pub use render::{
    render, Numbering, RenderBlock, RenderCell, RenderParagraph, RenderRun, RenderTable,
};
pub use style::{RoleStyle, StyleConfig, StyleError};
