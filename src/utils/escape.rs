/// Escape user-controlled text for insertion into HTML.
///
/// Maps `&`, `<`, `>`, `"` and `'` to their entities in a single pass and leaves
/// every other character untouched. Not idempotent: escaping twice escapes the
/// ampersands produced by the first pass.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
