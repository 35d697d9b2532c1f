//! Table extraction
//!
//! Splits the inner markup of one `<table>` region into header and body
//! rows. Header rows come from `<thead>` when present; without one, a
//! leading `<th>` row is promoted to header. A table that yields no rows
//! at all produces no block.

use once_cell::sync::Lazy;
use regex::Regex;

use richdoc_core::{Block, InlineRun, TableRow};

use crate::entity::decode_entities;
use crate::inline::parse_inline;

static THEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<thead[^>]*>(.*?)</thead\s*>").unwrap());
static TBODY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<tbody[^>]*>(.*?)</tbody\s*>").unwrap());
static TR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<tr[^>]*>(.*?)</tr\s*>").unwrap());
static CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(?:th|td)(?:\s[^>]*)?>(.*?)</(?:th|td)\s*>").unwrap());
static TH_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<th[\s>]").unwrap());

/// Extract a table block from the inner markup of one `<table>` region.
///
/// Returns `None` when no rows parse; the export silently drops such
/// tables instead of emitting an empty one.
pub fn extract_table(inner: &str) -> Option<Block> {
    let mut rows: Vec<TableRow> = Vec::new();
    let mut header_row_count = 0;

    let thead = THEAD.captures(inner);
    let thead_raw = thead
        .as_ref()
        .and_then(|caps| caps.get(0))
        .map(|m| m.as_str());

    if let Some(caps) = &thead {
        for tr in TR.captures_iter(caps.get(1).map_or("", |m| m.as_str())) {
            rows.push(parse_row(tr.get(1).map_or("", |m| m.as_str())));
            header_row_count += 1;
        }
    }

    // Body rows come from <tbody> when present, else from every <tr> in
    // the table
    let body_src = TBODY
        .captures(inner)
        .and_then(|caps| caps.get(1))
        .map_or(inner, |m| m.as_str());

    for tr in TR.captures_iter(body_src) {
        let raw = tr.get(0).expect("match has group 0").as_str();
        // Substring containment, not a structural check: a body row whose
        // raw markup also occurs verbatim inside the <thead> markup is
        // skipped as a duplicate of a header row
        if thead_raw.is_some_and(|head| head.contains(raw)) {
            continue;
        }
        rows.push(parse_row(tr.get(1).map_or("", |m| m.as_str())));
    }

    // No <thead>: a first row made with <th> cells still renders as header
    if thead.is_none() && header_row_count == 0 {
        if let Some(first) = TR.captures(inner) {
            if TH_OPEN.is_match(first.get(1).map_or("", |m| m.as_str())) {
                header_row_count = 1;
            }
        }
    }

    if rows.is_empty() {
        log::warn!("dropping table region with no parseable rows");
        return None;
    }

    Some(Block::Table {
        rows,
        header_row_count,
    })
}

fn parse_row(tr_inner: &str) -> TableRow {
    CELL.captures_iter(tr_inner)
        .map(|caps| {
            let content = caps.get(1).map_or("", |m| m.as_str());
            let runs = parse_inline(&decode_entities(content.trim()));
            if runs.is_empty() {
                // An empty cell keeps one empty run so column counts
                // survive rendering
                vec![InlineRun::empty()]
            } else {
                runs
            }
        })
        .collect()
}
