//! Character reference decoding
//!
//! The editor emits a fixed, small set of HTML character references; only
//! those are decoded. Any other reference, named or numeric, passes through
//! verbatim as literal text.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// The references the editor is known to emit. `&nbsp;` renders as a plain
/// space in the target document format.
static ENTITIES: Lazy<IndexMap<&'static str, char>> = Lazy::new(|| {
    IndexMap::from([
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#39;", '\''),
        ("&nbsp;", ' '),
    ])
});

/// Decode the recognized character references in `text`
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        result.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match ENTITIES
            .iter()
            .find(|(entity, _)| rest.starts_with(*entity))
        {
            Some((entity, replacement)) => {
                result.push(*replacement);
                rest = &rest[entity.len()..];
            }
            None => {
                // Unrecognized reference: emit the ampersand literally and
                // keep scanning after it
                result.push('&');
                rest = &rest[1..];
            }
        }
    }

    result.push_str(rest);
    result
}
