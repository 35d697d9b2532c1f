//! Inline formatting
//!
//! Turns one entity-decoded text fragment (the content of a paragraph, list
//! item or table cell) into an ordered sequence of styled runs. Recognition
//! is a left-to-right scan with no backtracking over the closed pattern set
//! the editor emits. Anything outside that set degrades the whole fragment
//! to a single plain run with every tag stripped; that failure mode is part
//! of the contract and must not be widened.

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use richdoc_core::InlineRun;

// Most fragments produce very few runs - avoid heap allocation
type RunVec = SmallVec<[InlineRun; 4]>;

/// `<tag>text</tag>` with tag-free inner text, for each synonym in `tags`
fn wrap_pattern(tags: &[&str]) -> Regex {
    let branches: Vec<String> = tags
        .iter()
        .map(|t| format!(r"<{t}(?:\s[^>]*)?>([^<]*)</{t}\s*>"))
        .collect();
    Regex::new(&format!(r"(?i)^(?:{})", branches.join("|"))).unwrap()
}

/// `<outer><inner>text</inner></outer>` for each synonym combination.
/// Two levels is the bound; the editor never nests deeper.
fn nested_pattern(outer: &[&str], inner: &[&str]) -> Regex {
    let mut branches = Vec::new();
    for o in outer {
        for i in inner {
            branches.push(format!(
                r"<{o}(?:\s[^>]*)?><{i}(?:\s[^>]*)?>([^<]*)</{i}\s*></{o}\s*>"
            ));
        }
    }
    Regex::new(&format!(r"(?i)^(?:{})", branches.join("|"))).unwrap()
}

static BOLD: Lazy<Regex> = Lazy::new(|| wrap_pattern(&["strong", "b"]));
static ITALIC: Lazy<Regex> = Lazy::new(|| wrap_pattern(&["em", "i"]));
static BOLD_ITALIC: Lazy<Regex> = Lazy::new(|| nested_pattern(&["strong", "b"], &["em", "i"]));
static ITALIC_BOLD: Lazy<Regex> = Lazy::new(|| nested_pattern(&["em", "i"], &["strong", "b"]));

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

/// Parse a fragment into styled runs.
///
/// The fragment must already be entity-decoded. Never fails; unrecognized
/// markup collapses the fragment to one tag-stripped plain run.
pub fn parse_inline(fragment: &str) -> Vec<InlineRun> {
    let mut runs = RunVec::new();
    let mut rest = fragment;

    while !rest.is_empty() {
        if rest.starts_with('<') {
            match match_styled(rest) {
                Some((consumed, run)) => {
                    if !run.text.is_empty() {
                        runs.push(run);
                    }
                    rest = &rest[consumed..];
                }
                None => {
                    log::warn!("unrecognized inline markup, stripping tags from fragment");
                    return strip_fallback(fragment);
                }
            }
        } else {
            let end = rest.find('<').unwrap_or(rest.len());
            runs.push(InlineRun::plain(&rest[..end]));
            rest = &rest[end..];
        }
    }

    runs.into_vec()
}

/// Try the recognized styled forms at the start of `rest`, in priority order
fn match_styled(rest: &str) -> Option<(usize, InlineRun)> {
    let patterns: [(&Regex, bool, bool); 4] = [
        (&BOLD, true, false),
        (&ITALIC, false, true),
        (&BOLD_ITALIC, true, true),
        (&ITALIC_BOLD, true, true),
    ];

    for (regex, bold, italic) in patterns {
        if let Some(caps) = regex.captures(rest) {
            let text = caps
                .iter()
                .skip(1)
                .flatten()
                .next()
                .map(|m| m.as_str())
                .unwrap_or("");
            let consumed = caps.get(0).map(|m| m.end()).unwrap_or(0);
            return Some((
                consumed,
                InlineRun {
                    text: text.to_string(),
                    bold,
                    italic,
                },
            ));
        }
    }

    None
}

fn strip_fallback(fragment: &str) -> Vec<InlineRun> {
    let text = TAG.replace_all(fragment, "");
    if text.trim().is_empty() {
        Vec::new()
    } else {
        vec![InlineRun::plain(text.into_owned())]
    }
}
