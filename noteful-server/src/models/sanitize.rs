//! Output sanitization for free-text fields

/// Escape angle brackets so stored text cannot inject markup into a page.
///
/// Only `<` and `>` are rewritten. Quotes, ampersands and everything else
/// pass through as stored, so `alert("hi")` stays readable.
pub fn escape_markup(input: &str) -> String {
    if !input.contains(|c: char| c == '<' || c == '>') {
        return input.to_owned();
    }

    let mut out = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
