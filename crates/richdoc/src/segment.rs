//! Block segmentation
//!
//! Splits the full rich-text payload into an ordered sequence of
//! block-level regions: tables, list items and paragraph fragments.
//! Scanning is sequential over a closed tag vocabulary; tables are
//! recognized first at top level, lists inside the remaining stretches,
//! and whatever is left becomes paragraph text.

use once_cell::sync::Lazy;
use regex::Regex;

static TABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<table[^>]*>(.*?)</table\s*>").unwrap());
static UL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<ul[^>]*>(.*?)</ul\s*>").unwrap());
static OL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<ol[^>]*>(.*?)</ol\s*>").unwrap());
static P: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<p[^>]*>(.*?)</p\s*>").unwrap());
static LI: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<li[^>]*>(.*?)</li\s*>").unwrap());

/// One block-level region of the payload, in source order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region<'a> {
    /// Inner markup of one top-level table
    Table(&'a str),

    /// Inner markup of one item of an unordered list
    BulletItem(&'a str),

    /// Inner markup of one ordered-list item and its 1-based position
    /// within its `<ol>`
    OrderedItem(&'a str, usize),

    /// One paragraph fragment, trimmed
    ParagraphText(&'a str),
}

/// Split a payload into ordered block regions
pub fn segment(input: &str) -> Vec<Region<'_>> {
    let mut regions = Vec::new();
    let mut last = 0;

    // Tables are recognized at top level only; tables inside lists are not
    // supported by the editor
    for caps in TABLE.captures_iter(input) {
        let whole = caps.get(0).expect("match has group 0");
        segment_html(&input[last..whole.start()], &mut regions);
        regions.push(Region::Table(caps.get(1).map_or("", |m| m.as_str())));
        last = whole.end();
    }
    segment_html(&input[last..], &mut regions);

    log::debug!("segmented payload into {} regions", regions.len());
    regions
}

/// Split one table-free stretch into list items and paragraph fragments.
///
/// Unordered lists win: ordered lists are only scanned for when the stretch
/// has no `<ul>` at all, so a stretch mixing both loses the `<ol>` structure
/// to the paragraph path.
fn segment_html<'a>(html: &'a str, regions: &mut Vec<Region<'a>>) {
    if html.trim().is_empty() {
        return;
    }

    let mut last = 0;
    let mut found_list = false;

    for caps in UL.captures_iter(html) {
        found_list = true;
        let whole = caps.get(0).expect("match has group 0");
        segment_paragraphs(&html[last..whole.start()], regions);
        for li in LI.captures_iter(caps.get(1).map_or("", |m| m.as_str())) {
            regions.push(Region::BulletItem(li.get(1).map_or("", |m| m.as_str())));
        }
        last = whole.end();
    }

    if !found_list {
        for caps in OL.captures_iter(html) {
            found_list = true;
            let whole = caps.get(0).expect("match has group 0");
            segment_paragraphs(&html[last..whole.start()], regions);
            for (i, li) in LI
                .captures_iter(caps.get(1).map_or("", |m| m.as_str()))
                .enumerate()
            {
                regions.push(Region::OrderedItem(
                    li.get(1).map_or("", |m| m.as_str()),
                    i + 1,
                ));
            }
            last = whole.end();
        }
    }

    segment_paragraphs(&html[last..], regions);
}

/// Split remaining text on `<p>` boundaries; stray text around paragraphs
/// becomes a fragment of its own
fn segment_paragraphs<'a>(text: &'a str, regions: &mut Vec<Region<'a>>) {
    let mut last = 0;

    for caps in P.captures_iter(text) {
        let whole = caps.get(0).expect("match has group 0");
        push_fragment(&text[last..whole.start()], regions);
        push_fragment(caps.get(1).map_or("", |m| m.as_str()), regions);
        last = whole.end();
    }
    push_fragment(&text[last..], regions);
}

fn push_fragment<'a>(fragment: &'a str, regions: &mut Vec<Region<'a>>) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        regions.push(Region::ParagraphText(trimmed));
    }
}
