//! Document rendering
//!
//! Maps the typed document model plus a style configuration into the
//! renderable primitives consumed by the packaging backend. Rendering is a
//! pure function of its inputs: the same document and styles always produce
//! structurally identical output, and no block kind may fail to render.

use crate::model::{Block, Document, InlineRun, TableRow};
use crate::style::{RoleStyle, StyleConfig};

/// List numbering applied to a rendered paragraph, always at indent level 0.
///
/// Ordered items share a single numbering sequence definition; the backend
/// tracks the running counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numbering {
    Bullet,
    Decimal,
}

/// A fully styled text run
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub font: String,
    /// Size in half-points
    pub size: u32,
    /// RRGGBB hex
    pub color: String,
}

/// A styled paragraph, optionally flagged as a list item
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParagraph {
    pub runs: Vec<RenderRun>,
    pub numbering: Option<Numbering>,
    pub line_spacing: f32,
}

/// One table cell with an optional background fill
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCell {
    pub runs: Vec<RenderRun>,
    /// RRGGBB fill, set on header cells
    pub shading: Option<String>,
}

/// A table spanning the full available width, with a uniform single-line
/// border on all four sides of every cell
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTable {
    pub rows: Vec<Vec<RenderCell>>,
    pub header_row_count: usize,
    pub width_pct: u32,
    pub border_color: String,
}

/// A renderable primitive handed to the packaging backend
#[derive(Debug, Clone, PartialEq)]
pub enum RenderBlock {
    Paragraph(RenderParagraph),
    Table(RenderTable),
}

/// Render a document against a style configuration
pub fn render(doc: &Document, styles: &StyleConfig) -> Vec<RenderBlock> {
    let placeholder = doc.is_placeholder();

    doc.blocks
        .iter()
        .map(|block| render_block(block, styles, placeholder))
        .collect()
}

fn render_block(block: &Block, styles: &StyleConfig, placeholder: bool) -> RenderBlock {
    match block {
        Block::Paragraph { runs } => {
            let role = if placeholder {
                &styles.placeholder
            } else {
                &styles.body
            };
            RenderBlock::Paragraph(RenderParagraph {
                runs: render_runs(runs, role, false),
                numbering: None,
                line_spacing: styles.line_spacing,
            })
        }

        Block::BulletListItem { runs } => RenderBlock::Paragraph(RenderParagraph {
            runs: render_runs(runs, &styles.list, false),
            numbering: Some(Numbering::Bullet),
            line_spacing: styles.line_spacing,
        }),

        // The item index is not re-emitted; numbering state lives in the
        // backend's shared sequence definition
        Block::OrderedListItem { runs, .. } => RenderBlock::Paragraph(RenderParagraph {
            runs: render_runs(runs, &styles.list, false),
            numbering: Some(Numbering::Decimal),
            line_spacing: styles.line_spacing,
        }),

        Block::Table {
            rows,
            header_row_count,
        } => RenderBlock::Table(render_table(rows, *header_row_count, styles)),
    }
}

fn render_runs(runs: &[InlineRun], role: &RoleStyle, force_bold: bool) -> Vec<RenderRun> {
    if runs.is_empty() {
        // An element with no runs still renders one empty text node
        return vec![empty_run(role)];
    }

    runs.iter()
        .map(|run| RenderRun {
            text: run.text.clone(),
            bold: run.bold || force_bold,
            italic: run.italic,
            font: role.font.clone(),
            size: role.size,
            color: role.color.clone(),
        })
        .collect()
}

fn empty_run(role: &RoleStyle) -> RenderRun {
    RenderRun {
        text: String::new(),
        bold: false,
        italic: false,
        font: role.font.clone(),
        size: role.size,
        color: role.color.clone(),
    }
}

fn render_table(rows: &[TableRow], header_row_count: usize, styles: &StyleConfig) -> RenderTable {
    let rendered_rows = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let is_header = i < header_row_count;
            let role = if is_header {
                &styles.table_header
            } else {
                &styles.table_body
            };

            row.iter()
                .map(|cell| RenderCell {
                    // Header rows force bold regardless of each run's own flag
                    runs: render_runs(cell, role, is_header),
                    shading: is_header.then(|| styles.table_header_shading.clone()),
                })
                .collect()
        })
        .collect();

    RenderTable {
        rows: rendered_rows,
        header_row_count,
        width_pct: 100,
        border_color: styles.table_border_color.clone(),
    }
}
