//! Header insertion.
//!
//! The new content is the optional shebang line, the header followed by exactly
//! one blank line, then the original content with its leading blank lines
//! removed. No other bytes change.

/// Returns `content` with `header` inserted at the top.
///
/// An interpreter directive (`#!...`) stays on the first line and the header
/// goes right after it.
#[must_use]
pub fn insert_header(content: &[u8], header: &str) -> Vec<u8> {
    let (shebang, rest) = split_shebang(content);
    let body = strip_leading_blank_lines(rest);
    let header = header.as_bytes();
    let separator = separator_after(header);

    let mut output =
        Vec::with_capacity(shebang.len() + 1 + header.len() + separator.len() + body.len());
    if !shebang.is_empty() {
        output.extend_from_slice(shebang);
        if !shebang.ends_with(b"\n") {
            output.push(b'\n');
        }
    }
    output.extend_from_slice(header);
    output.extend_from_slice(separator);
    output.extend_from_slice(body);
    output
}

/// Splits off the first line (newline included) when it is a shebang.
fn split_shebang(content: &[u8]) -> (&[u8], &[u8]) {
    if !content.starts_with(b"#!") {
        return (&[], content);
    }
    content
        .iter()
        .position(|&b| b == b'\n')
        .map_or((content, &[][..]), |idx| content.split_at(idx + 1))
}

fn strip_leading_blank_lines(mut rest: &[u8]) -> &[u8] {
    loop {
        if let Some(stripped) = rest.strip_prefix(b"\n") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix(b"\r\n") {
            rest = stripped;
        } else {
            return rest;
        }
    }
}

/// Bytes needed so the header ends with exactly one blank line.
fn separator_after(header: &[u8]) -> &'static [u8] {
    match trailing_line_break(header) {
        None => b"\n\n",
        Some(len) if trailing_line_break(&header[..header.len() - len]).is_some() => b"",
        Some(_) => b"\n",
    }
}

fn trailing_line_break(bytes: &[u8]) -> Option<usize> {
    if bytes.ends_with(b"\r\n") {
        Some(2)
    } else if bytes.ends_with(b"\n") {
        Some(1)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
