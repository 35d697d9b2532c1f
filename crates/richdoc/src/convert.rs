//! HTML to document conversion
//!
//! The top-level builder: segments the payload, runs each region through
//! the matching extractor and assembles the flat block sequence.

use richdoc_core::{Block, Document, InlineRun};

use crate::entity::decode_entities;
use crate::inline::parse_inline;
use crate::segment::{segment, Region};
use crate::table::extract_table;

/// Convert a rich-text HTML payload into a document.
///
/// Never fails: malformed markup degrades to plain text, zero-row tables
/// are dropped, and input with no usable content yields the sentinel
/// placeholder document.
pub fn html_to_document(html: &str) -> Document {
    if html.trim().is_empty() {
        return Document::placeholder();
    }

    let mut blocks = Vec::new();

    for region in segment(html) {
        match region {
            Region::Table(inner) => {
                if let Some(table) = extract_table(inner) {
                    blocks.push(table);
                }
            }
            Region::BulletItem(inner) => blocks.push(Block::BulletListItem {
                runs: item_runs(inner),
            }),
            Region::OrderedItem(inner, index) => blocks.push(Block::OrderedListItem {
                runs: item_runs(inner),
                index,
            }),
            Region::ParagraphText(fragment) => {
                let runs = parse_inline(&decode_entities(fragment));
                if !runs.is_empty() {
                    blocks.push(Block::Paragraph { runs });
                }
            }
        }
    }

    if blocks.is_empty() {
        // Everything degraded away (empty paragraphs, dropped tables);
        // the export still needs a document body
        log::debug!("conversion produced no blocks, emitting placeholder");
        return Document::placeholder();
    }

    Document::new(blocks)
}

fn item_runs(inner: &str) -> Vec<InlineRun> {
    let runs = parse_inline(&decode_entities(inner.trim()));
    if runs.is_empty() {
        // An empty item still occupies its slot in the list
        vec![InlineRun::empty()]
    } else {
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use richdoc_core::EMPTY_CONTENT_PLACEHOLDER;

    #[test]
    fn test_plain_text_single_paragraph() {
        let doc = html_to_document("hello world");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph {
                runs: vec![InlineRun::plain("hello world")],
            }]
        );
    }

    #[test]
    fn test_paragraph_with_formatting() {
        let doc = html_to_document("<p>Hello <strong>world</strong></p>");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph {
                runs: vec![InlineRun::plain("Hello "), InlineRun::bold("world")],
            }]
        );
    }

    #[test]
    fn test_bullet_list_adjacent_blocks() {
        let doc = html_to_document("<ul><li>a</li><li>b</li></ul>");
        assert_eq!(
            doc.blocks,
            vec![
                Block::BulletListItem {
                    runs: vec![InlineRun::plain("a")],
                },
                Block::BulletListItem {
                    runs: vec![InlineRun::plain("b")],
                },
            ]
        );
    }

    #[test]
    fn test_ordered_list_indexes() {
        let doc = html_to_document("<ol><li>a</li><li>b</li></ol>");
        assert_eq!(
            doc.blocks,
            vec![
                Block::OrderedListItem {
                    runs: vec![InlineRun::plain("a")],
                    index: 1,
                },
                Block::OrderedListItem {
                    runs: vec![InlineRun::plain("b")],
                    index: 2,
                },
            ]
        );
    }

    #[test]
    fn test_empty_input_placeholder() {
        let doc = html_to_document("");
        assert!(doc.is_placeholder());

        let Block::Paragraph { runs } = &doc.blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(runs[0].text, EMPTY_CONTENT_PLACEHOLDER);
        assert!(runs[0].italic);
    }

    #[test]
    fn test_whitespace_input_placeholder() {
        assert!(html_to_document("   \n\t ").is_placeholder());
    }

    #[test]
    fn test_only_empty_paragraphs_placeholder() {
        assert!(html_to_document("<p></p><p>  </p>").is_placeholder());
    }

    #[test]
    fn test_zero_row_table_placeholder() {
        assert!(html_to_document("<table></table>").is_placeholder());
    }

    #[test]
    fn test_document_order_preserved() {
        let doc = html_to_document(
            "<p>intro</p>\
             <table><tr><th>A</th></tr><tr><td>1</td></tr></table>\
             <ul><li>item</li></ul>\
             <p>outro</p>",
        );

        assert_eq!(doc.blocks.len(), 4);
        assert!(matches!(doc.blocks[0], Block::Paragraph { .. }));
        assert!(matches!(
            doc.blocks[1],
            Block::Table {
                header_row_count: 1,
                ..
            }
        ));
        assert!(matches!(doc.blocks[2], Block::BulletListItem { .. }));
        assert!(matches!(doc.blocks[3], Block::Paragraph { .. }));
    }

    #[test]
    fn test_entities_decoded_in_paragraphs() {
        let doc = html_to_document("A &amp; B");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph {
                runs: vec![InlineRun::plain("A & B")],
            }]
        );
    }

    #[test]
    fn test_list_item_with_formatting() {
        let doc = html_to_document("<ul><li><em>x</em></li></ul>");
        assert_eq!(
            doc.blocks,
            vec![Block::BulletListItem {
                runs: vec![InlineRun::italic("x")],
            }]
        );
    }

    #[test]
    fn test_empty_list_item_keeps_slot() {
        let doc = html_to_document("<ul><li>a</li><li></li></ul>");
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(
            doc.blocks[1],
            Block::BulletListItem {
                runs: vec![InlineRun::empty()],
            }
        );
    }

    #[test]
    fn test_unknown_block_markup_degrades_to_text() {
        let doc = html_to_document("<div>boxed</div>");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph {
                runs: vec![InlineRun::plain("boxed")],
            }]
        );
    }
}
