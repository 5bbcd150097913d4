//! Blank out the `extern "C"` braces of `__cplusplus` guard blocks.
//!
//! C headers commonly open `extern "C" {` inside one `#ifdef __cplusplus`
//! block and close it in another. The braces are unbalanced within each
//! conditional, which no grammar can represent, so guard blocks whose only
//! content is such a brace are replaced with spaces before parsing. Line and
//! column positions are unchanged.

use std::borrow::Cow;

pub(super) fn blank_linkage_guards(source: &str) -> Cow<'_, str> {
    let lines: Vec<&str> = source.split_inclusive('\n').collect();
    let mut blank = vec![false; lines.len()];
    let mut found = false;

    let mut idx = 0;
    while idx < lines.len() {
        if !is_cplusplus_guard(lines[idx]) {
            idx += 1;
            continue;
        }
        let body_start = idx + 1;
        let mut end = body_start;
        while end < lines.len() && !lines[end].trim_start().starts_with('#') {
            end += 1;
        }
        let body = &lines[body_start..end];
        let closes = end < lines.len() && directive(lines[end]) == "endif";
        if closes
            && body.iter().any(|line| is_linkage_brace(line))
            && body
                .iter()
                .all(|line| line.trim().is_empty() || is_linkage_brace(line))
        {
            for flag in &mut blank[body_start..end] {
                *flag = true;
            }
            found = true;
        }
        idx = end;
    }

    if !found {
        return Cow::Borrowed(source);
    }
    let mut out = String::with_capacity(source.len());
    for (line, blank) in lines.iter().zip(blank) {
        if blank {
            out.extend(line.chars().map(|c| if c == '\n' || c == '\r' { c } else { ' ' }));
        } else {
            out.push_str(line);
        }
    }
    Cow::Owned(out)
}

/// Directive text after `#`, whitespace-normalized: `"ifdef __cplusplus"`.
fn directive(line: &str) -> String {
    line.trim()
        .strip_prefix('#')
        .map(|rest| rest.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

fn is_cplusplus_guard(line: &str) -> bool {
    matches!(
        directive(line).as_str(),
        "ifdef __cplusplus" | "if defined(__cplusplus)" | "if defined __cplusplus"
    )
}

fn is_linkage_brace(line: &str) -> bool {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    compact == "extern\"C\"{" || compact == "}"
}
