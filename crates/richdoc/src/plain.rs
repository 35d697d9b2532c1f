//! Plain-text content path
//!
//! Some export sources carry plain text with markdown conventions instead
//! of editor HTML: `**bold**`, `*italic*`, `- ` bullets and `1. ` ordered
//! items. This formatter handles that path on its own; it is independent
//! of the HTML pipeline and deliberately line-oriented and simpler.

use once_cell::sync::Lazy;
use regex::Regex;

use richdoc_core::{Block, Document, InlineRun};

static SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*|\*([^*]+)\*").unwrap());
static ORDERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)[.)]\s+(.*)$").unwrap());

/// Convert markdown-convention plain text into a document.
///
/// Never fails; shares the sentinel-on-empty behavior with the HTML path.
pub fn plain_to_document(text: &str) -> Document {
    if text.trim().is_empty() {
        return Document::placeholder();
    }

    let mut blocks = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            blocks.push(Block::BulletListItem {
                runs: parse_spans(rest),
            });
        } else if let Some(caps) = ORDERED.captures(line) {
            let index = caps[1].parse().unwrap_or(1);
            blocks.push(Block::OrderedListItem {
                runs: parse_spans(&caps[2]),
                index,
            });
        } else {
            blocks.push(Block::Paragraph {
                runs: parse_spans(line),
            });
        }
    }

    if blocks.is_empty() {
        return Document::placeholder();
    }

    Document::new(blocks)
}

fn parse_spans(line: &str) -> Vec<InlineRun> {
    let mut runs = Vec::new();
    let mut last = 0;

    for caps in SPAN.captures_iter(line) {
        let whole = caps.get(0).expect("match has group 0");
        if whole.start() > last {
            runs.push(InlineRun::plain(&line[last..whole.start()]));
        }
        if let Some(bold) = caps.get(1) {
            runs.push(InlineRun::bold(bold.as_str()));
        } else if let Some(italic) = caps.get(2) {
            runs.push(InlineRun::italic(italic.as_str()));
        }
        last = whole.end();
    }

    if last < line.len() {
        runs.push(InlineRun::plain(&line[last..]));
    }

    if runs.is_empty() {
        vec![InlineRun::empty()]
    } else {
        runs
    }
}
