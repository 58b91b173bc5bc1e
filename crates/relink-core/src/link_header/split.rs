//! Quote- and bracket-aware splitting of `Link` header values.

/// Splits `value` on `sep`, ignoring separators inside `<...>` or `"..."`.
///
/// A backslash inside a quoted string escapes the next character. Empty
/// pieces (e.g. from `a,,b` or a trailing comma) are dropped.
pub(crate) fn split_top_level(value: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_angle = false;
    let mut in_quotes = false;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in value.char_indices() {
        if in_quotes {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_quotes = false;
            }
            continue;
        }
        match c {
            '"' if !in_angle => in_quotes = true,
            '<' => in_angle = true,
            '>' => in_angle = false,
            c if c == sep && !in_angle => {
                push_non_empty(&mut parts, &value[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    push_non_empty(&mut parts, &value[start..]);
    parts
}

fn push_non_empty<'a>(parts: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        parts.push(piece);
    }
}

/// Strips surrounding double quotes and resolves backslash escapes.
pub(crate) fn unquote(value: &str) -> String {
    let value = value.trim();
    let Some(inner) = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
    else {
        return value.to_string();
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}
