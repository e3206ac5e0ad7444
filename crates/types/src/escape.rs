//! Quote-safe HTML escaping.

use std::borrow::Cow;

/// Escapes `&`, `<`, `>`, `"` and `'` for use in text or double-quoted
/// attribute values.
///
/// An `&` that already starts a well-formed entity (`&amp;`, `&#39;`,
/// `&#x27;`) is kept, so escaping twice gives the same result as escaping once.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    for (i, ch) in input.char_indices() {
        match ch {
            '&' if starts_entity(&input[i..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// `s` starts with `&` followed by a named, decimal or hex entity and `;`.
fn starts_entity(s: &str) -> bool {
    let body = &s[1..];
    let Some(end) = body.find(';') else {
        return false;
    };
    let entity = &body[..end];
    if let Some(num) = entity.strip_prefix('#') {
        if let Some(hex) = num.strip_prefix(['x', 'X']) {
            return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
        }
        return !num.is_empty() && num.chars().all(|c| c.is_ascii_digit());
    }
    let mut chars = entity.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}
