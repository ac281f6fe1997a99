//! Splits raw model output into hook, body and CTA.
//!
//! Sections are introduced by markers such as `**HOOK:**`. Matching is a
//! forward scan over the text:
//!
//! - hook runs from the first hook marker to the next body marker (or end)
//! - body runs from the first body marker to the next CTA marker (or end)
//! - CTA runs from the first CTA marker to the end
//!
//! Recognized marker shapes, all ASCII case-insensitive:
//!
//! - `**HOOK:**`, `** Hook : **`, `**HOOK**:` and the same with `__`
//! - a bare `HOOK:` label opening a line, optionally after `#` headings
//!
//! If nothing is found the whole text becomes the body, so generated content
//! is never dropped.

use tracing::debug;

use crate::types::ScriptSegments;

const HOOK: &str = "HOOK";
const BODY: &str = "BODY";
const CTA: &str = "CTA";

/// A located marker: `start` is where it begins, `end` is where the section
/// text begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Marker {
    start: usize,
    end: usize,
}

/// Parse generated text into script segments
pub fn parse_script(raw: &str) -> ScriptSegments {
    let hook = section(raw, HOOK, Some(BODY));
    let body = section(raw, BODY, Some(CTA));
    let cta = section(raw, CTA, None);

    if hook.is_empty() && body.is_empty() && cta.is_empty() {
        debug!(len = raw.len(), "no section markers matched, using whole text as body");
        return ScriptSegments {
            hook: String::new(),
            body: raw.trim().to_string(),
            cta: String::new(),
        };
    }

    ScriptSegments {
        hook: hook.to_string(),
        body: body.to_string(),
        cta: cta.to_string(),
    }
}

fn section<'a>(text: &'a str, label: &str, until: Option<&str>) -> &'a str {
    let Some(open) = find_marker(text, label, 0) else {
        return "";
    };
    let stop = until
        .and_then(|next| find_marker(text, next, open.end))
        .map_or(text.len(), |m| m.start);
    text[open.end..stop].trim()
}

fn find_marker(text: &str, label: &str, from: usize) -> Option<Marker> {
    let bytes = text.as_bytes();
    (from..bytes.len())
        // markers are ASCII, so any ASCII byte is a char boundary to slice at
        .filter(|&i| bytes[i].is_ascii())
        .find_map(|i| {
            emphasized_at(bytes, i, label)
                .map(|end| Marker { start: i, end })
                .or_else(|| bare_at(bytes, i, label))
        })
}

/// `**LABEL:**` or `**LABEL**:` starting at `i`
fn emphasized_at(bytes: &[u8], i: usize, label: &str) -> Option<usize> {
    let delim: &[u8] = match bytes.get(i..i + 2)? {
        b"**" => b"**",
        b"__" => b"__",
        _ => return None,
    };
    let mut j = skip_ws(bytes, i + 2);
    j = match_label(bytes, j, label)?;
    j = skip_ws(bytes, j);

    if bytes.get(j) == Some(&b':') {
        j = skip_ws(bytes, j + 1);
        return bytes[j..].starts_with(delim).then_some(j + 2);
    }
    if bytes[j..].starts_with(delim) {
        j = skip_inline_ws(bytes, j + 2);
        return (bytes.get(j) == Some(&b':')).then_some(j + 1);
    }
    None
}

/// `LABEL:` opening a line. The marker starts at the line start, so any
/// `##` heading prefix belongs to the marker and not to the previous section.
fn bare_at(bytes: &[u8], i: usize, label: &str) -> Option<Marker> {
    if !at_line_start(bytes, i) {
        return None;
    }
    let j = skip_inline_ws(bytes, match_label(bytes, i, label)?);
    (bytes.get(j) == Some(&b':')).then(|| Marker {
        start: line_start(bytes, i),
        end: j + 1,
    })
}

fn line_start(bytes: &[u8], i: usize) -> usize {
    bytes[..i]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |newline| newline + 1)
}

fn at_line_start(bytes: &[u8], i: usize) -> bool {
    bytes[..i]
        .iter()
        .rev()
        .take_while(|&&b| b != b'\n')
        .all(|&b| b == b' ' || b == b'\t' || b == b'\r' || b == b'#')
}

fn match_label(bytes: &[u8], i: usize, label: &str) -> Option<usize> {
    let end = i + label.len();
    let candidate = bytes.get(i..end)?;
    if !candidate.eq_ignore_ascii_case(label.as_bytes()) {
        return None;
    }
    // `HOOKS:` or `CTAs` are words, not labels
    match bytes.get(end) {
        Some(b) if b.is_ascii_alphanumeric() => None,
        _ => Some(end),
    }
}

fn skip_ws(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(|b| b.is_ascii_whitespace()) {
        i += 1;
    }
    i
}

fn skip_inline_ws(bytes: &[u8], mut i: usize) -> usize {
    while matches!(bytes.get(i), Some(b' ' | b'\t')) {
        i += 1;
    }
    i
}
