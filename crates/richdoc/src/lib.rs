//! # richdoc
//!
//! Convert the constrained rich-text HTML dialect produced by the editor
//! into the typed document model from `richdoc-core`.
//!
//! ## Design
//!
//! The converter is a set of sequential scanners over a closed tag
//! vocabulary (`p`, `strong`/`b`, `em`/`i`, `ul`/`ol`/`li`, `table` and its
//! row/cell tags), not a general HTML parser. Unbalanced or unknown markup
//! is not repaired: it simply fails to match and degrades to tag-stripped
//! plain text. Downstream rendering depends on that exact behavior.
//!
//! Conversion never returns an error. Input with no usable content yields
//! the sentinel placeholder document instead of an empty one.
//!
//! ## Example
//!
//! ```rust
//! use richdoc::html_to_document;
//! use richdoc_core::{render, StyleConfig};
//!
//! let doc = html_to_document("<p>Valor estimado: <strong>R$ 1.500,00</strong></p>");
//! let styles = StyleConfig::default();
//! let blocks = render(&doc, &styles);
//! assert_eq!(blocks.len(), 1);
//! ```

mod convert;
mod entity;
mod inline;
mod plain;
mod segment;
mod table;

pub use convert::html_to_document;
pub use entity::decode_entities;
pub use inline::parse_inline;
pub use plain::plain_to_document;
pub use segment::{segment, Region};
pub use table::extract_table;
