//! End-to-end conversion and rendering checks over the documented
//! behavior of the export pipeline.

use richdoc::{html_to_document, plain_to_document};
use richdoc_core::{render, Block, InlineRun, RenderBlock, StyleConfig};

#[test]
fn plain_text_converts_and_renders_verbatim() {
    let doc = html_to_document("Objeto da contratação");
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            runs: vec![InlineRun::plain("Objeto da contratação")],
        }]
    );

    let rendered = render(&doc, &StyleConfig::default());
    let RenderBlock::Paragraph(para) = &rendered[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(para.runs[0].text, "Objeto da contratação");
}

#[test]
fn nested_bold_italic_single_run() {
    let doc = html_to_document("<strong><em>x</em></strong>");
    assert_eq!(doc.blocks, vec![Block::Paragraph {
        runs: vec![InlineRun::bold_italic("x")],
    }]);
}

#[test]
fn thead_and_tbody_produce_header_and_body_rows() {
    let doc = html_to_document(
        "<table><thead><tr><th>A</th></tr></thead>\
         <tbody><tr><td>1</td></tr></tbody></table>",
    );

    assert_eq!(
        doc.blocks,
        vec![Block::Table {
            rows: vec![
                vec![vec![InlineRun::plain("A")]],
                vec![vec![InlineRun::plain("1")]],
            ],
            header_row_count: 1,
        }]
    );
}

#[test]
fn header_styling_forced_at_render_time() {
    // Header cells render bold and shaded even when the source run is plain
    let doc = html_to_document(
        "<table><thead><tr><th>Item</th><th>Valor</th></tr></thead>\
         <tbody><tr><td>Caneta</td><td>R$ 2,00</td></tr></tbody></table>",
    );
    let styles = StyleConfig::default();
    let rendered = render(&doc, &styles);

    let RenderBlock::Table(table) = &rendered[0] else {
        panic!("expected table");
    };
    for cell in &table.rows[0] {
        assert!(cell.runs[0].bold);
        assert_eq!(cell.shading.as_deref(), Some("D9D9D9"));
    }
    for cell in &table.rows[1] {
        assert!(!cell.runs[0].bold);
        assert!(cell.shading.is_none());
    }
}

#[test]
fn empty_input_renders_muted_placeholder() {
    let styles = StyleConfig::default();
    let rendered = render(&html_to_document(""), &styles);

    assert_eq!(rendered.len(), 1);
    let RenderBlock::Paragraph(para) = &rendered[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(para.runs[0].text, "[Conteúdo não gerado]");
    assert!(para.runs[0].italic);
    assert_eq!(para.runs[0].color, styles.placeholder.color);
}

#[test]
fn rendering_is_stateless_across_calls() {
    let doc = html_to_document(
        "<p>a</p><ol><li>um</li><li>dois</li></ol>\
         <table><tr><th>H</th></tr><tr><td>b</td></tr></table>",
    );
    let styles = StyleConfig::default();

    let first = render(&doc, &styles);
    let second = render(&doc, &styles);
    assert_eq!(first, second);
}

#[test]
fn mixed_lists_lose_ordered_structure() {
    // <ul> wins over <ol> in one stretch; the ordered items survive only
    // as tag-stripped paragraph text
    let doc = html_to_document("<ul><li>u</li></ul><ol><li>o</li></ol>");

    assert_eq!(
        doc.blocks,
        vec![
            Block::BulletListItem {
                runs: vec![InlineRun::plain("u")],
            },
            Block::Paragraph {
                runs: vec![InlineRun::plain("o")],
            },
        ]
    );
}

#[test]
fn unknown_reference_survives_conversion() {
    let doc = html_to_document("<p>&copy; 2026 &amp; Cia</p>");
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            runs: vec![InlineRun::plain("&copy; 2026 & Cia")],
        }]
    );
}

#[test]
fn plain_text_path_is_independent() {
    let doc = plain_to_document("Resumo\n\n- **prazo**: 30 dias\n- valor");
    assert_eq!(doc.blocks.len(), 3);
    assert_eq!(
        doc.blocks[1],
        Block::BulletListItem {
            runs: vec![InlineRun::bold("prazo"), InlineRun::plain(": 30 dias")],
        }
    );
}
