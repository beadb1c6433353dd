//! Text helpers for embedding values in HTML attributes.

/// Escape HTML special characters.
///
/// Single quotes become `&#039;`.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }
    result
}

/// Remove markup from a string.
///
/// Drops `<...>` tags, including quoted attribute values that contain `>`,
/// and `<!-- ... -->` comments. A `<` followed by whitespace (or at the end
/// of input) is not a tag and is kept.
#[must_use]
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        if let Some(comment) = tail.strip_prefix("<!--") {
            rest = comment.find("-->").map_or("", |end| &comment[end + 3..]);
            continue;
        }

        let after = &tail[1..];
        match after.chars().next() {
            Some(c) if !c.is_whitespace() => rest = skip_tag(after),
            _ => {
                out.push('<');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Return the text following the `>` that closes the tag body.
///
/// An unterminated tag swallows the rest of the input.
fn skip_tag(body: &str) -> &str {
    let mut quote = None;
    for (i, c) in body.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '>' => return &body[i + 1..],
            None => {}
        }
    }
    ""
}
